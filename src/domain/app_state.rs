use serde::{Deserialize, Serialize};

use super::allocation::{allocate, CapacityPolicy};
use super::entities::{Planet, PlanetId, PlanetType, TradeMatrix};

/// Calculator switches kept across sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    #[serde(default)]
    pub use_global_capacity: bool,
    #[serde(default)]
    pub global_capacity: u32,
}

impl CalculatorSettings {
    pub fn policy(&self) -> CapacityPolicy {
        if self.use_global_capacity {
            CapacityPolicy::Global(self.global_capacity)
        } else {
            CapacityPolicy::PerPlanet
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub planets: Vec<Planet>,
    pub settings: CalculatorSettings,
    pub trade_matrix: TradeMatrix,
    /// Phase A units from the last calculation.
    pub fair_share: TradeMatrix,
}

impl AppState {
    pub fn policy(&self) -> CapacityPolicy {
        self.settings.policy()
    }

    /// Capacity under the current policy; unknown ids have none.
    pub fn capacity_of(&self, planet_id: &str) -> u32 {
        self.policy().lookup(&self.planets)(planet_id)
    }

    pub fn planet(&self, planet_id: &str) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.id == planet_id)
    }

    pub fn planet_name(&self, planet_id: &str) -> String {
        self.planet(planet_id)
            .map(|planet| planet.name.clone())
            .unwrap_or_else(|| planet_id.to_string())
    }

    /// Adds a planet under `id`. Returns `false` for a blank name.
    pub fn add_planet(
        &mut self,
        id: PlanetId,
        name: &str,
        planet_type: PlanetType,
        trading_units: u32,
    ) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.planets
            .push(Planet::new(id, name, planet_type, trading_units));
        true
    }

    /// Replaces name, type and units of an existing planet. Its id and
    /// priority list are kept. Returns `false` for a blank name or an
    /// unknown id.
    pub fn update_planet(
        &mut self,
        planet_id: &str,
        name: &str,
        planet_type: PlanetType,
        trading_units: u32,
    ) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(planet) = self.planets.iter_mut().find(|p| p.id == planet_id) else {
            return false;
        };
        planet.name = name.to_string();
        planet.planet_type = planet_type;
        planet.trading_units = trading_units;
        true
    }

    /// Removes the planet and every priority pointing at it.
    pub fn remove_planet(&mut self, planet_id: &str) {
        self.planets.retain(|planet| planet.id != planet_id);
        for planet in &mut self.planets {
            planet.trade_priorities.retain(|id| id != planet_id);
        }
    }

    pub fn set_trading_units(&mut self, planet_id: &str, units: u32) {
        if let Some(planet) = self.planets.iter_mut().find(|p| p.id == planet_id) {
            planet.trading_units = units;
        }
    }

    /// Appends on enable so selection order is rank order; self toggles are ignored.
    pub fn toggle_priority(&mut self, planet_id: &str, partner_id: &str, enabled: bool) {
        if planet_id == partner_id {
            return;
        }
        let Some(planet) = self.planets.iter_mut().find(|p| p.id == planet_id) else {
            return;
        };
        if enabled {
            if !planet.prioritizes(partner_id) {
                planet.trade_priorities.push(partner_id.to_string());
            }
        } else {
            planet.trade_priorities.retain(|id| id != partner_id);
        }
    }

    pub fn replace_planets(&mut self, planets: Vec<Planet>) {
        self.planets = planets;
        self.trade_matrix = TradeMatrix::new();
        self.fair_share = TradeMatrix::new();
    }

    /// Recomputes the matrix and fair-share ledger from the current setup.
    pub fn recalculate(&mut self) {
        let policy = self.policy();
        let report = allocate(&self.planets, |planet| policy.capacity_of(planet));
        self.trade_matrix = report.matrix;
        self.fair_share = report.fair_share;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.planets = persisted.planets;
        self.settings = persisted.settings;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            planets: self.planets.clone(),
            settings: self.settings.clone(),
            saved_at: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub settings: CalculatorSettings,
    /// RFC 3339 timestamp of the last save.
    #[serde(default)]
    pub saved_at: Option<String>,
}
