use planet_trade_planner::domain::{Planet, PlanetType, TradeMatrix};

pub fn reference_planets() -> Vec<Planet> {
    vec![
        Planet::new("A", "Planet A", PlanetType::Agro, 100),
        Planet::new("B", "Planet B", PlanetType::Techno, 100),
        Planet::new("C", "Planet C", PlanetType::Minero, 100),
    ]
}

/// `{A:{C:50}, B:{A:10,C:15}, C:{}}`
pub fn reference_matrix() -> TradeMatrix {
    let mut matrix = TradeMatrix::new();
    matrix.set("A", "C", 50);
    matrix.set("B", "A", 10);
    matrix.set("B", "C", 15);
    matrix.ensure_row("C");
    matrix
}

/// Five planets over three types with mixed, partly one-sided priorities.
pub fn crowded_system() -> Vec<Planet> {
    vec![
        Planet::new("p1", "Ceres", PlanetType::Agro, 120).with_priorities(["p2", "p3", "p5"]),
        Planet::new("p2", "Vesta", PlanetType::Techno, 80).with_priorities(["p1"]),
        Planet::new("p3", "Pallas", PlanetType::Minero, 45).with_priorities(["p4", "p1"]),
        Planet::new("p4", "Hygiea", PlanetType::Agro, 60).with_priorities(["p3"]),
        Planet::new("p5", "Juno", PlanetType::Techno, 0).with_priorities(["p1", "p4"]),
    ]
}

pub fn capacity(planets: &[Planet], id: &str) -> u32 {
    planets
        .iter()
        .find(|planet| planet.id == id)
        .map(|planet| planet.trading_units)
        .unwrap_or(0)
}
