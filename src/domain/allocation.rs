//! Two-phase trade allocation.
//!
//! Pairs are enumerated in caller order: `(planets[i], planets[j])` for
//! `i < j`, skipping same-type pairs. Phase A commits a priority-weighted
//! fair share per pair, phase B saturates whatever capacity is left. Both
//! phases walk the pairs once, in the same order, so results depend on the
//! input order but are fully deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entities::{Planet, PlanetId, TradeMatrix};

/// How much each planet may trade in total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityPolicy {
    /// Each planet's own `trading_units`.
    #[default]
    PerPlanet,
    /// The same cap for every planet.
    Global(u32),
}

impl CapacityPolicy {
    pub fn capacity_of(&self, planet: &Planet) -> u32 {
        match self {
            CapacityPolicy::PerPlanet => planet.trading_units,
            CapacityPolicy::Global(units) => *units,
        }
    }

    /// Id-keyed lookup for analytics; unknown ids have no capacity.
    pub fn lookup<'a>(&'a self, planets: &'a [Planet]) -> impl Fn(&str) -> u32 + 'a {
        move |id| {
            planets
                .iter()
                .find(|planet| planet.id == id)
                .map(|planet| self.capacity_of(planet))
                .unwrap_or(0)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocationReport {
    pub matrix: TradeMatrix,
    /// Phase A units, keyed by the prioritising planet.
    pub fair_share: TradeMatrix,
    /// Capacity left per planet after phase B.
    pub remaining: BTreeMap<PlanetId, u32>,
}

impl AllocationReport {
    pub fn remaining_of(&self, planet_id: &str) -> u32 {
        self.remaining.get(planet_id).copied().unwrap_or(0)
    }
}

pub fn compute_allocation(planets: &[Planet], policy: &CapacityPolicy) -> TradeMatrix {
    allocate(planets, |planet| policy.capacity_of(planet)).matrix
}

pub fn allocate<F>(planets: &[Planet], capacity_of: F) -> AllocationReport
where
    F: Fn(&Planet) -> u32,
{
    let mut remaining: BTreeMap<PlanetId, u32> = planets
        .iter()
        .map(|planet| (planet.id.clone(), capacity_of(planet)))
        .collect();

    let pairs = valid_pairs(planets);
    let mut traded: BTreeMap<(PlanetId, PlanetId), u32> = BTreeMap::new();
    let mut fair_share = TradeMatrix::new();
    for planet in planets {
        fair_share.ensure_row(planet.id.clone());
    }

    for &(a, b) in &pairs {
        let a_wants = a.prioritizes(&b.id);
        let b_wants = b.prioritizes(&a.id);
        if !a_wants && !b_wants {
            continue;
        }

        let a_left = remaining_units(&remaining, &a.id);
        let b_left = remaining_units(&remaining, &b.id);
        let room = a_left.min(b_left);
        if room == 0 {
            continue;
        }

        let a_fair = if a_wants { fair_share_of(a_left, a) } else { 0 };
        let b_fair = if b_wants { fair_share_of(b_left, b) } else { 0 };
        let fair_trade = room.min(a_fair).min(b_fair);
        if fair_trade == 0 {
            continue;
        }

        traded.insert(pair_key(a, b), fair_trade);
        consume(&mut remaining, &a.id, fair_trade);
        consume(&mut remaining, &b.id, fair_trade);
        if a_wants {
            fair_share.set(a.id.clone(), b.id.clone(), fair_trade);
        }
        if b_wants {
            fair_share.set(b.id.clone(), a.id.clone(), fair_trade);
        }
        tracing::debug!(
            target: "allocation",
            phase = "fair_share",
            from = %a.id,
            to = %b.id,
            units = fair_trade,
            "committed fair-share trade"
        );
    }

    for &(a, b) in &pairs {
        let extra = remaining_units(&remaining, &a.id).min(remaining_units(&remaining, &b.id));
        if extra == 0 {
            continue;
        }

        *traded.entry(pair_key(a, b)).or_default() += extra;
        consume(&mut remaining, &a.id, extra);
        consume(&mut remaining, &b.id, extra);
        tracing::debug!(
            target: "allocation",
            phase = "saturation",
            from = %a.id,
            to = %b.id,
            units = extra,
            "committed saturation trade"
        );
    }

    let matrix = emit_matrix(planets, &traded);
    tracing::info!(
        target: "allocation",
        planets = planets.len(),
        pairs = pairs.len(),
        total_units = matrix.total_units(),
        "allocation complete"
    );

    AllocationReport {
        matrix,
        fair_share,
        remaining,
    }
}

/// Different-type pairs in nested index order.
fn valid_pairs(planets: &[Planet]) -> Vec<(&Planet, &Planet)> {
    let mut pairs = Vec::new();
    for (i, a) in planets.iter().enumerate() {
        for b in &planets[i + 1..] {
            if a.planet_type != b.planet_type {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

/// Remaining capacity split evenly over every declared priority, satisfied
/// or not. The denominator never shrinks during a run.
fn fair_share_of(left: u32, planet: &Planet) -> u32 {
    match planet.trade_priorities.len() {
        0 => 0,
        count => left / count as u32,
    }
}

fn pair_key(a: &Planet, b: &Planet) -> (PlanetId, PlanetId) {
    if a.id <= b.id {
        (a.id.clone(), b.id.clone())
    } else {
        (b.id.clone(), a.id.clone())
    }
}

fn remaining_units(remaining: &BTreeMap<PlanetId, u32>, id: &str) -> u32 {
    remaining.get(id).copied().unwrap_or(0)
}

fn consume(remaining: &mut BTreeMap<PlanetId, u32>, id: &str, units: u32) {
    if let Some(left) = remaining.get_mut(id) {
        *left = left.saturating_sub(units);
    }
}

fn emit_matrix(planets: &[Planet], traded: &BTreeMap<(PlanetId, PlanetId), u32>) -> TradeMatrix {
    let mut matrix = TradeMatrix::new();
    for from in planets {
        matrix.ensure_row(from.id.clone());
        for to in planets {
            if !from.can_trade_with(to) {
                continue;
            }
            let units = if from.id < to.id {
                traded
                    .get(&(from.id.clone(), to.id.clone()))
                    .copied()
                    .unwrap_or(0)
            } else {
                0
            };
            matrix.set(from.id.clone(), to.id.clone(), units);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlanetType;

    #[test]
    fn mutual_priorities_split_by_list_length_before_saturation() {
        let planets = vec![
            Planet::new("a", "Alpha", PlanetType::Agro, 90).with_priorities(["b", "c"]),
            Planet::new("b", "Beta", PlanetType::Techno, 60).with_priorities(["a"]),
            Planet::new("c", "Gamma", PlanetType::Minero, 40).with_priorities(["a"]),
        ];

        let report = allocate(&planets, |planet| planet.trading_units);

        // a-b: room 60, a fair 90/2 = 45, b fair 60/1 = 60 -> 45
        // a-c: room min(45, 40) = 40, a fair 45/2 = 22, c fair 40 -> 22
        assert_eq!(report.fair_share.get("a", "b"), 45);
        assert_eq!(report.fair_share.get("b", "a"), 45);
        assert_eq!(report.fair_share.get("a", "c"), 22);
        assert_eq!(report.fair_share.get("c", "a"), 22);

        // phase B: a-b adds min(23, 15) = 15, a-c adds min(8, 18) = 8, b-c adds min(0, 10) = 0
        assert_eq!(report.matrix.get("a", "b"), 60);
        assert_eq!(report.matrix.get("a", "c"), 30);
        assert_eq!(report.matrix.get("b", "c"), 0);
        assert_eq!(report.remaining_of("a"), 0);
        assert_eq!(report.remaining_of("b"), 0);
        assert_eq!(report.remaining_of("c"), 10);
    }

    #[test]
    fn unknown_and_self_priorities_still_divide_the_fair_share() {
        let planets = vec![
            Planet::new("a", "Alpha", PlanetType::Agro, 90).with_priorities(["b", "ghost", "a"]),
            Planet::new("b", "Beta", PlanetType::Techno, 60).with_priorities(["a"]),
        ];

        let report = allocate(&planets, |planet| planet.trading_units);

        // a's 90 units split over three entries, two of which never match.
        assert_eq!(report.fair_share.get("a", "b"), 30);
        assert_eq!(report.fair_share.get("b", "a"), 30);
        assert!(report.fair_share.row("a").is_some_and(|row| row.len() == 1));
        // phase B fills b's remaining 30.
        assert_eq!(report.matrix.get("a", "b"), 60);
        assert_eq!(report.remaining_of("a"), 30);
        assert_eq!(report.remaining_of("b"), 0);
    }

    #[test]
    fn one_sided_priority_has_no_fair_share() {
        let planets = vec![
            Planet::new("a", "Alpha", PlanetType::Agro, 50).with_priorities(["b"]),
            Planet::new("b", "Beta", PlanetType::Techno, 30),
        ];

        let report = allocate(&planets, |planet| planet.trading_units);

        assert_eq!(report.fair_share.get("a", "b"), 0);
        assert_eq!(report.matrix.get("a", "b"), 30);
    }

    #[test]
    fn reverse_direction_is_written_as_zero() {
        let planets = vec![
            Planet::new("z", "Zed", PlanetType::Agro, 10),
            Planet::new("m", "Em", PlanetType::Minero, 10),
        ];

        let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

        assert_eq!(matrix.row("m").and_then(|row| row.get("z")), Some(&10));
        assert_eq!(matrix.row("z").and_then(|row| row.get("m")), Some(&0));
    }

    #[test]
    fn global_policy_overrides_planet_units() {
        let planets = vec![
            Planet::new("a", "Alpha", PlanetType::Agro, 1),
            Planet::new("b", "Beta", PlanetType::Techno, 500),
        ];

        let matrix = compute_allocation(&planets, &CapacityPolicy::Global(25));

        assert_eq!(matrix.get("a", "b"), 25);
        let lookup = CapacityPolicy::Global(25).lookup(&planets);
        assert_eq!(lookup("a"), 25);
        assert_eq!(lookup("missing"), 0);
    }

    #[test]
    fn same_type_planets_have_no_cells() {
        let planets = vec![
            Planet::new("a", "Alpha", PlanetType::Agro, 10),
            Planet::new("b", "Beta", PlanetType::Agro, 10),
        ];

        let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

        assert!(matrix.row("a").is_some_and(|row| row.is_empty()));
        assert!(matrix.row("b").is_some_and(|row| row.is_empty()));
    }
}
