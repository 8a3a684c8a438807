//! JSON import/export for planet setups and trade matrices.

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};
use thiserror::Error;

use super::entities::{Planet, PlanetId, PlanetType, TradeMatrix};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of planets")]
    NotAnArray,
    #[error("expected a trade matrix object")]
    NotAnObject,
    #[error("planet #{index}: {reason}")]
    InvalidPlanet { index: usize, reason: String },
    #[error("duplicate planet id {0:?}")]
    DuplicateId(PlanetId),
    #[error("trade row {from:?}: expected an object")]
    InvalidRow { from: String },
    #[error("trade {from:?} -> {to:?}: units must be a non-negative integer")]
    InvalidUnits { from: String, to: String },
}

/// Parses a setup document: an array of planet objects.
///
/// Planets without an `id` get one from `generate_id`.
pub fn parse_planets_json<G>(input: &str, mut generate_id: G) -> Result<Vec<Planet>, ImportError>
where
    G: FnMut() -> PlanetId,
{
    let value: Value = serde_json::from_str(input)?;
    let Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut seen = HashSet::new();
    let mut planets = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let planet = parse_planet(entry, &mut generate_id)
            .map_err(|reason| ImportError::InvalidPlanet { index, reason })?;
        if !seen.insert(planet.id.clone()) {
            return Err(ImportError::DuplicateId(planet.id));
        }
        planets.push(planet);
    }

    tracing::info!(target: "import", planets = planets.len(), "parsed planet setup");
    Ok(planets)
}

fn parse_planet<G>(entry: &Value, generate_id: &mut G) -> Result<Planet, String>
where
    G: FnMut() -> PlanetId,
{
    let Value::Object(fields) = entry else {
        return Err("expected an object".to_string());
    };

    let name = non_empty_str(fields, "name").ok_or("missing name")?;
    let raw_type = non_empty_str(fields, "type").ok_or("missing type")?;
    let planet_type =
        PlanetType::parse(raw_type).ok_or_else(|| format!("unknown type {raw_type:?}"))?;
    let trading_units = fields
        .get("tradingUnits")
        .and_then(as_units)
        .ok_or("tradingUnits must be a non-negative integer")?;
    let Some(Value::Array(raw_priorities)) = fields.get("tradePriorities") else {
        return Err("tradePriorities must be a list".to_string());
    };
    let trade_priorities = raw_priorities
        .iter()
        .map(|id| id.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or("tradePriorities must contain planet ids")?;

    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => generate_id(),
    };

    Ok(Planet {
        id,
        name: name.to_string(),
        planet_type,
        trading_units,
        trade_priorities,
    })
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn as_units(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|units| u32::try_from(units).ok())
}

/// Parses a trade matrix document: `{ from: { to: units } }`.
pub fn parse_trade_matrix_json(input: &str) -> Result<TradeMatrix, ImportError> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Object(rows) = value else {
        return Err(ImportError::NotAnObject);
    };

    let mut matrix: BTreeMap<PlanetId, BTreeMap<PlanetId, u32>> = BTreeMap::new();
    for (from, row) in rows {
        let Value::Object(cells) = row else {
            return Err(ImportError::InvalidRow { from });
        };
        let mut parsed = BTreeMap::new();
        for (to, units) in cells {
            let Some(units) = as_units(&units) else {
                return Err(ImportError::InvalidUnits { from, to });
            };
            parsed.insert(to, units);
        }
        matrix.insert(from, parsed);
    }

    tracing::info!(target: "import", rows = matrix.len(), "parsed trade matrix");
    Ok(TradeMatrix::from(matrix))
}

pub fn export_planets_json(planets: &[Planet]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(planets)
}

pub fn export_trade_matrix_json(matrix: &TradeMatrix) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(matrix)
}
