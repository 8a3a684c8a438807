//! Read-only analytics over a planet list and a trade matrix.

use serde::{Deserialize, Serialize};

use super::entities::{find_planet, Planet, PlanetId, TradeMatrix};

/// Directional candidate pairs checked for missed trades, in report order.
///
/// One representative per adjacent type pair of the reference setup, not an
/// all-pairs scan.
pub const MISSED_TRADE_CANDIDATES: [(&str, &str); 3] = [("A", "B"), ("B", "C"), ("C", "A")];

/// An unexploited exchange between two candidates. `from` and `to` are
/// planet ids; callers resolve display names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedTrade {
    pub from: PlanetId,
    pub to: PlanetId,
    #[serde(rename = "maxPossible")]
    pub max_possible: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilizationRow {
    pub planet_id: PlanetId,
    pub capacity: u32,
    pub used: u64,
    pub unused: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartnerTrade {
    pub partner_id: PlanetId,
    pub units: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FairShareRow {
    pub planet_id: PlanetId,
    pub partner_id: PlanetId,
    pub units: u32,
}

/// Units `planet_id` sends plus units every other listed planet sends to it.
pub fn mutual_used_units(planets: &[Planet], matrix: &TradeMatrix, planet_id: &str) -> u64 {
    if find_planet(planets, planet_id).is_none() {
        return 0;
    }

    let sent: u64 = matrix
        .row(planet_id)
        .map(|row| row.values().map(|units| u64::from(*units)).sum())
        .unwrap_or_default();

    let received: u64 = planets
        .iter()
        .filter(|planet| planet.id != planet_id)
        .map(|planet| u64::from(matrix.get(&planet.id, planet_id)))
        .sum();

    sent + received
}

/// Capacity minus mutual usage. Not clamped: a matrix built against a
/// different capacity lookup can drive this negative.
pub fn unused_units<F>(planets: &[Planet], matrix: &TradeMatrix, planet_id: &str, capacity_of: F) -> i64
where
    F: Fn(&str) -> u32,
{
    if find_planet(planets, planet_id).is_none() {
        return 0;
    }
    let used = mutual_used_units(planets, matrix, planet_id) as i64;
    i64::from(capacity_of(planet_id)) - used
}

/// Evaluates [`MISSED_TRADE_CANDIDATES`] against `unused_of`.
///
/// The matrix only reaches this function through `unused_of`; it is taken so
/// all analytics share one call shape.
pub fn missed_trades<F>(planets: &[Planet], _matrix: &TradeMatrix, unused_of: F) -> Vec<MissedTrade>
where
    F: Fn(&str) -> i64,
{
    let mut missed = Vec::new();

    for (from, to) in MISSED_TRADE_CANDIDATES {
        let (Some(from_planet), Some(to_planet)) =
            (find_planet(planets, from), find_planet(planets, to))
        else {
            continue;
        };

        let max_possible = unused_of(&from_planet.id).min(unused_of(&to_planet.id));
        if max_possible > 0 {
            missed.push(MissedTrade {
                from: from_planet.id.clone(),
                to: to_planet.id.clone(),
                max_possible,
            });
        }
    }

    missed
}

pub fn utilization<F>(planets: &[Planet], matrix: &TradeMatrix, capacity_of: F) -> Vec<UtilizationRow>
where
    F: Fn(&str) -> u32,
{
    planets
        .iter()
        .map(|planet| {
            let capacity = capacity_of(&planet.id);
            let used = mutual_used_units(planets, matrix, &planet.id);
            UtilizationRow {
                planet_id: planet.id.clone(),
                capacity,
                used,
                unused: i64::from(capacity) - used as i64,
            }
        })
        .collect()
}

/// Partners of `planet_id` with a non-zero pair volume, in planet order.
pub fn trade_partners(planets: &[Planet], matrix: &TradeMatrix, planet_id: &str) -> Vec<PartnerTrade> {
    let Some(planet) = find_planet(planets, planet_id) else {
        return Vec::new();
    };

    planets
        .iter()
        .filter(|partner| planet.can_trade_with(partner))
        .filter_map(|partner| {
            let units = matrix.pair_units(&planet.id, &partner.id);
            (units > 0).then(|| PartnerTrade {
                partner_id: partner.id.clone(),
                units,
            })
        })
        .collect()
}

/// One row per (planet, known priority partner), priorities in rank order.
pub fn fair_share_rows(planets: &[Planet], fair_share: &TradeMatrix) -> Vec<FairShareRow> {
    planets
        .iter()
        .flat_map(|planet| {
            planet
                .trade_priorities
                .iter()
                .filter_map(|partner_id| find_planet(planets, partner_id))
                .map(|partner| FairShareRow {
                    planet_id: planet.id.clone(),
                    partner_id: partner.id.clone(),
                    units: fair_share.get(&planet.id, &partner.id),
                })
        })
        .collect()
}
