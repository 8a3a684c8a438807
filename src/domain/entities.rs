use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for planets. Ordered byte-wise; the smaller id of a pair is the
/// sender of record in a [`TradeMatrix`].
pub type PlanetId = String;

/// Closed set of planet types. Planets of the same type never trade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetType {
    #[default]
    Agro,
    Minero,
    Techno,
}

impl PlanetType {
    pub const ALL: [PlanetType; 3] = [PlanetType::Agro, PlanetType::Minero, PlanetType::Techno];

    pub fn name(&self) -> &'static str {
        match self {
            PlanetType::Agro => "Agro",
            PlanetType::Minero => "Minero",
            PlanetType::Techno => "Techno",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PlanetType::Agro => "🌾",
            PlanetType::Minero => "⛰️",
            PlanetType::Techno => "🔧",
        }
    }

    /// Case-insensitive lookup used by the setup form and the importer.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A planet as stored in a setup document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    /// Units the planet can exchange in total across all partners.
    #[serde(rename = "tradingUnits")]
    pub trading_units: u32,
    /// Partner ids, highest priority first.
    #[serde(rename = "tradePriorities", default)]
    pub trade_priorities: Vec<PlanetId>,
}

impl Planet {
    pub fn new(
        id: impl Into<PlanetId>,
        name: impl Into<String>,
        planet_type: PlanetType,
        trading_units: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            planet_type,
            trading_units,
            trade_priorities: Vec::new(),
        }
    }

    pub fn with_priorities<I, S>(mut self, priorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlanetId>,
    {
        self.trade_priorities = priorities.into_iter().map(Into::into).collect();
        self
    }

    pub fn prioritizes(&self, other: &str) -> bool {
        self.trade_priorities.iter().any(|id| id == other)
    }

    /// 1-based rank of `other` in this planet's priorities.
    pub fn priority_rank(&self, other: &str) -> Option<usize> {
        self.trade_priorities
            .iter()
            .position(|id| id == other)
            .map(|idx| idx + 1)
    }

    /// True when the two planets are distinct and of different types.
    pub fn can_trade_with(&self, other: &Planet) -> bool {
        self.id != other.id && self.planet_type != other.planet_type
    }
}

pub fn find_planet<'a>(planets: &'a [Planet], id: &str) -> Option<&'a Planet> {
    planets.iter().find(|planet| planet.id == id)
}

/// Sender id -> receiver id -> units.
///
/// A pair's volume lives under the smaller id as sender; the reverse cell is
/// either absent or `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeMatrix {
    rows: BTreeMap<PlanetId, BTreeMap<PlanetId, u32>>,
}

impl TradeMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw directed cell, `0` when missing.
    pub fn get(&self, from: &str, to: &str) -> u32 {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Canonical cell for an unordered pair.
    pub fn pair_units(&self, a: &str, b: &str) -> u32 {
        if a < b {
            self.get(a, b)
        } else {
            self.get(b, a)
        }
    }

    pub fn set(&mut self, from: impl Into<PlanetId>, to: impl Into<PlanetId>, units: u32) {
        self.rows
            .entry(from.into())
            .or_default()
            .insert(to.into(), units);
    }

    /// Ensures `id` has a row, even if it never sends.
    pub fn ensure_row(&mut self, id: impl Into<PlanetId>) {
        self.rows.entry(id.into()).or_default();
    }

    pub fn row(&self, from: &str) -> Option<&BTreeMap<PlanetId, u32>> {
        self.rows.get(from)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&PlanetId, &BTreeMap<PlanetId, u32>)> {
        self.rows.iter()
    }

    /// Sum of every cell.
    pub fn total_units(&self) -> u64 {
        self.rows
            .values()
            .flat_map(|row| row.values())
            .map(|units| u64::from(*units))
            .sum()
    }
}

impl From<BTreeMap<PlanetId, BTreeMap<PlanetId, u32>>> for TradeMatrix {
    fn from(rows: BTreeMap<PlanetId, BTreeMap<PlanetId, u32>>) -> Self {
        Self { rows }
    }
}
