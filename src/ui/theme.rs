//! Planet-type styling helpers shared by the pages.

use crate::domain::PlanetType;

pub fn type_badge(planet_type: PlanetType) -> &'static str {
    match planet_type {
        PlanetType::Agro => "badge badge-agro",
        PlanetType::Minero => "badge badge-minero",
        PlanetType::Techno => "badge badge-techno",
    }
}

pub fn type_accent(planet_type: PlanetType) -> &'static str {
    match planet_type {
        PlanetType::Agro => "accent-agro",
        PlanetType::Minero => "accent-minero",
        PlanetType::Techno => "accent-techno",
    }
}

/// Class for a signed unused-units value.
pub fn unused_class(unused: i64) -> &'static str {
    match unused {
        u if u < 0 => "value-negative",
        0 => "value-muted",
        _ => "value-positive",
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    }
}
