use planet_trade_planner::domain::{
    allocate, compute_allocation, mutual_used_units, CapacityPolicy, Planet, PlanetType,
};

use crate::support::{capacity, crowded_system};

#[test]
fn given_crowded_system_when_allocating_then_each_pair_has_one_non_zero_direction() {
    let planets = crowded_system();
    let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

    for x in &planets {
        for y in &planets {
            if !x.can_trade_with(y) {
                continue;
            }
            let forward = matrix.get(&x.id, &y.id);
            let backward = matrix.get(&y.id, &x.id);
            assert!(forward == 0 || backward == 0, "{} <-> {}", x.id, y.id);
            assert_eq!(forward + backward, matrix.pair_units(&x.id, &y.id));
            if x.id > y.id {
                assert_eq!(forward, 0);
            }
        }
    }
}

#[test]
fn given_same_type_planets_when_allocating_then_no_cell_is_written_between_them() {
    let planets = crowded_system();
    let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

    for x in &planets {
        let row = matrix.row(&x.id).expect("every planet has a row");
        assert!(!row.contains_key(&x.id));
        for y in planets.iter().filter(|y| y.planet_type == x.planet_type) {
            assert!(!row.contains_key(&y.id), "{} -> {}", x.id, y.id);
        }
    }
}

#[test]
fn given_any_policy_when_allocating_then_usage_stays_within_capacity() {
    let planets = crowded_system();
    for policy in [
        CapacityPolicy::PerPlanet,
        CapacityPolicy::Global(0),
        CapacityPolicy::Global(33),
        CapacityPolicy::Global(1_000),
    ] {
        let matrix = compute_allocation(&planets, &policy);
        for planet in &planets {
            let used = mutual_used_units(&planets, &matrix, &planet.id);
            assert!(
                used <= u64::from(policy.capacity_of(planet)),
                "{policy:?}: {} used {used}",
                planet.id
            );
        }
    }
}

#[test]
fn given_identical_input_when_allocating_twice_then_serialized_matrices_match() {
    let planets = crowded_system();
    let first = compute_allocation(&planets, &CapacityPolicy::PerPlanet);
    let second = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn given_no_priorities_when_allocating_then_pairs_saturate_in_enumeration_order() {
    let planets = vec![
        Planet::new("a", "Alpha", PlanetType::Agro, 50),
        Planet::new("b", "Beta", PlanetType::Techno, 30),
        Planet::new("c", "Gamma", PlanetType::Minero, 40),
    ];

    let report = allocate(&planets, |planet| planet.trading_units);

    // (a,b) takes 30, (a,c) gets a's last 20, (b,c) has nothing left on b.
    assert_eq!(report.matrix.get("a", "b"), 30);
    assert_eq!(report.matrix.get("a", "c"), 20);
    assert_eq!(report.matrix.get("b", "c"), 0);
    assert_eq!(report.remaining_of("c"), 20);
    assert!(report.fair_share.rows().all(|(_, row)| row.is_empty()));
}

#[test]
fn given_reordered_input_when_allocating_then_enumeration_order_changes_the_plan() {
    let planets = vec![
        Planet::new("c", "Gamma", PlanetType::Minero, 40),
        Planet::new("b", "Beta", PlanetType::Techno, 30),
        Planet::new("a", "Alpha", PlanetType::Agro, 50),
    ];

    let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

    // (c,b) takes 30 first, then (c,a) gets the remaining 10.
    assert_eq!(matrix.get("b", "c"), 30);
    assert_eq!(matrix.get("a", "c"), 10);
    assert_eq!(matrix.get("a", "b"), 0);
}

#[test]
fn given_zero_capacity_planet_when_allocating_then_it_never_trades() {
    let planets = crowded_system();
    let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);

    assert_eq!(capacity(&planets, "p5"), 0);
    for planet in &planets {
        assert_eq!(matrix.pair_units("p5", &planet.id), 0);
    }
    assert_eq!(mutual_used_units(&planets, &matrix, "p5"), 0);
}

#[test]
fn given_remaining_capacity_when_reallocating_then_only_residual_pairs_trade() {
    let planets = crowded_system();
    let first = allocate(&planets, |planet| planet.trading_units);

    let second = allocate(&planets, |planet| first.remaining_of(&planet.id));

    for x in &planets {
        for y in &planets {
            let units = second.matrix.pair_units(&x.id, &y.id);
            assert!(units <= first.remaining_of(&x.id).min(first.remaining_of(&y.id)));
        }
    }

    // Phase B of the first run leaves no pair with capacity on both sides.
    assert_eq!(second.matrix.total_units(), 0);
    assert_eq!(second.remaining, first.remaining);
}

#[test]
fn given_partly_consumed_capacity_when_reallocating_then_residual_is_saturated() {
    let planets = vec![
        Planet::new("a", "Alpha", PlanetType::Agro, 50),
        Planet::new("b", "Beta", PlanetType::Techno, 30),
        Planet::new("c", "Gamma", PlanetType::Techno, 40),
    ];
    let first = allocate(&planets, |planet| planet.trading_units);
    assert_eq!(first.remaining_of("c"), 20);

    let topped_up = allocate(&planets, |planet| match planet.id.as_str() {
        "a" => 15,
        id => first.remaining_of(id),
    });

    assert_eq!(topped_up.matrix.get("a", "c"), 15);
    assert_eq!(topped_up.matrix.get("a", "b"), 0);
    assert_eq!(topped_up.remaining_of("c"), 5);
}
