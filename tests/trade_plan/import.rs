use planet_trade_planner::domain::{
    compute_allocation, export_planets_json, export_trade_matrix_json, parse_planets_json,
    parse_trade_matrix_json, AppState, CapacityPolicy, PersistedState,
};

use crate::support::crowded_system;

#[test]
fn given_exported_setup_when_reimporting_then_planets_and_plan_are_unchanged() {
    let planets = crowded_system();
    let exported = export_planets_json(&planets).expect("export setup");

    assert!(exported.contains("\"tradingUnits\""));
    assert!(exported.contains("\"tradePriorities\""));
    assert!(exported.contains("\"type\": \"Minero\""));

    let reimported = parse_planets_json(&exported, || unreachable!("ids are exported"))
        .expect("reimport setup");
    assert_eq!(reimported, planets);
    assert_eq!(
        compute_allocation(&reimported, &CapacityPolicy::PerPlanet),
        compute_allocation(&planets, &CapacityPolicy::PerPlanet)
    );
}

#[test]
fn given_computed_matrix_when_exported_then_reverse_cells_are_explicit_zeros() {
    let planets = crowded_system();
    let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);
    let exported = export_trade_matrix_json(&matrix).expect("export matrix");

    let raw: serde_json::Value = serde_json::from_str(&exported).expect("valid json");
    assert_eq!(raw["p2"]["p1"], serde_json::json!(0));
    assert_eq!(parse_trade_matrix_json(&exported).expect("reimport"), matrix);
}

#[test]
fn given_persisted_state_when_applied_then_recalculation_matches_fresh_state() {
    let mut original = AppState::default();
    original.replace_planets(crowded_system());
    original.settings.use_global_capacity = true;
    original.settings.global_capacity = 70;
    original.recalculate();

    let saved = serde_json::to_string(&original.to_persisted()).expect("serialize state");
    let persisted: PersistedState = serde_json::from_str(&saved).expect("deserialize state");

    let mut restored = AppState::default();
    restored.apply_persisted(persisted);
    restored.recalculate();

    assert_eq!(restored.settings, original.settings);
    assert_eq!(restored.trade_matrix, original.trade_matrix);
    assert_eq!(restored.fair_share, original.fair_share);
}
