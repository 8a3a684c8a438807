use uuid::Uuid;

pub mod assets;
pub mod logging;
pub mod persistence;
pub mod version;

/// Fresh opaque id, e.g. `planet-1b4e28ba-2fa1-11d2-883f-0016d3cca427`.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
