use planet_trade_planner::domain::{
    compute_allocation, missed_trades, mutual_used_units, unused_units, utilization,
    CapacityPolicy, MissedTrade,
};

use crate::support::{capacity, reference_matrix, reference_planets};

#[test]
fn given_reference_matrix_when_measuring_usage_then_sent_and_received_are_summed() {
    let planets = reference_planets();
    let matrix = reference_matrix();

    assert_eq!(mutual_used_units(&planets, &matrix, "A"), 60);
    assert_eq!(mutual_used_units(&planets, &matrix, "B"), 25);
    assert_eq!(mutual_used_units(&planets, &matrix, "C"), 65);
}

#[test]
fn given_reference_matrix_when_measuring_unused_then_capacity_minus_usage() {
    let planets = reference_planets();
    let matrix = reference_matrix();
    let unused = |id: &str| unused_units(&planets, &matrix, id, |id| capacity(&planets, id));

    assert_eq!(unused("A"), 40);
    assert_eq!(unused("B"), 75);
    assert_eq!(unused("C"), 35);
}

#[test]
fn given_reference_matrix_when_listing_missed_trades_then_three_candidates_in_order() {
    let planets = reference_planets();
    let matrix = reference_matrix();
    let unused = |id: &str| unused_units(&planets, &matrix, id, |id| capacity(&planets, id));

    let missed = missed_trades(&planets, &matrix, unused);

    let expected = [("A", "B", 40), ("B", "C", 35), ("C", "A", 35)]
        .into_iter()
        .map(|(from, to, max_possible)| MissedTrade {
            from: from.to_string(),
            to: to.to_string(),
            max_possible,
        })
        .collect::<Vec<_>>();
    assert_eq!(missed, expected);
}

#[test]
fn given_reference_matrix_when_building_utilization_then_rows_follow_planet_order() {
    let planets = reference_planets();
    let matrix = reference_matrix();

    let rows = utilization(&planets, &matrix, |id| capacity(&planets, id));

    let summary = rows
        .iter()
        .map(|row| (row.planet_id.as_str(), row.used, row.unused))
        .collect::<Vec<_>>();
    assert_eq!(summary, vec![("A", 60, 40), ("B", 25, 75), ("C", 65, 35)]);
}

#[test]
fn given_saturated_allocation_when_listing_missed_trades_then_none_remain() {
    let planets = reference_planets();
    let matrix = compute_allocation(&planets, &CapacityPolicy::PerPlanet);
    let unused = |id: &str| unused_units(&planets, &matrix, id, |id| capacity(&planets, id));

    assert!(missed_trades(&planets, &matrix, unused).is_empty());
}
