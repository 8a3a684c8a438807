use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "PlanetTradePlanner";
const APP_NAME: &str = "PlanetTradePlanner";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("state.json"))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    let path = data_file()?;
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => {
            tracing::info!(target: "persistence", path = %path.display(), "loaded saved setup");
            Some(state)
        }
        Err(err) => {
            tracing::warn!(target: "persistence", path = %path.display(), error = %err, "ignoring unreadable saved setup");
            None
        }
    }
}

/// Writes `state` with a fresh `saved_at` stamp.
pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let stamped = PersistedState {
        saved_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        ..state.clone()
    };
    let json = serde_json::to_string_pretty(&stamped)?;
    fs::write(&path, json)?;
    tracing::debug!(target: "persistence", path = %path.display(), planets = stamped.planets.len(), "saved setup");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
