// Integration test for the budget filter and route builder pipeline
use tour_planner::{
    build_route, filter_by_budget, total_trip_cost, PlaceRecord, PlannerConfig, TourCatalog,
    TourStop, TravelEdge,
};

fn catalog(rows: &[(&str, f64, &str, f64, f64)]) -> TourCatalog {
    let mut catalog = TourCatalog::new();
    for &(to, distance, name, rating, visiting_cost) in rows {
        catalog.push(TourStop::new(
            TravelEdge::new("Start", to, distance),
            PlaceRecord::new(name, rating, visiting_cost),
        ));
    }
    catalog
}

fn three_stop_catalog() -> TourCatalog {
    catalog(&[
        ("A", 0.0, "PA", 5.0, 0.0),
        ("B", 10.0, "PB", 4.0, 100.0),
        ("C", 5.0, "PC", 3.0, 50.0),
    ])
}

#[test]
fn test_generous_budget_keeps_all_and_routes_by_stored_distance() {
    let config = PlannerConfig::default();
    let mut catalog = three_stop_catalog();

    // 0*12+0 + 10*12+100 + 5*12+50 = 330, well under budget
    assert_eq!(total_trip_cost(&catalog, &config), 330.0);
    filter_by_budget(&mut catalog, 9999.0, &config);
    assert_eq!(catalog.len(), 3);

    let mut legs = Vec::new();
    let summary = build_route(&catalog, &config, |from, to| {
        legs.push(format!("{} -> {}", from, to));
    })
    .unwrap();

    // The 5 km slot beats the 10 km slot; the return leg reuses slot 0's 0 km.
    assert_eq!(summary.total_distance, 15.0);
    assert_eq!(summary.travel_cost, 180.0);
    assert_eq!(summary.visiting_cost, 150.0);
    assert_eq!(summary.total_rating, 7.0);
    assert!((summary.total_time_hours - 0.5).abs() < 1e-10);
    assert_eq!(legs.len(), 2);

    println!("Planned legs:");
    for leg in &legs {
        println!("  {}", leg);
    }
}

#[test]
fn test_zero_budget_collapses_to_start_only() {
    let config = PlannerConfig::default();
    let mut catalog = three_stop_catalog();

    filter_by_budget(&mut catalog, 0.0, &config);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.stops()[0].place.name, "PA");

    let summary = build_route(&catalog, &config, |_, _| {}).unwrap();
    assert_eq!(summary.order, vec![0]);
    assert_eq!(summary.visiting_cost, 0.0);
    assert_eq!(summary.total_rating, 0.0);
    // Only the return leg remains, priced from slot 0's stored distance.
    assert_eq!(summary.total_distance, 0.0);
    assert_eq!(summary.travel_cost, 0.0);
    assert_eq!(summary.total_time_hours, 0.0);
}

#[test]
fn test_filtered_cost_fits_budget_when_feasible() {
    let config = PlannerConfig::default();
    let mut catalog = catalog(&[
        ("A", 1.0, "PA", 4.9, 10.0),
        ("B", 8.0, "PB", 3.1, 120.0),
        ("C", 4.0, "PC", 4.2, 60.0),
        ("D", 2.0, "PD", 2.8, 80.0),
        ("E", 6.0, "PE", 3.9, 40.0),
    ]);

    let budget = 250.0;
    filter_by_budget(&mut catalog, budget, &config);

    assert!(catalog.len() >= 1);
    assert_eq!(catalog.stops()[0].place.name, "PA");
    // Budget covers the starting stop (1*12 + 10 = 22), so the filtered
    // total must fit.
    assert!(total_trip_cost(&catalog, &config) <= budget);
}

#[test]
fn test_cumulative_totals_grow_monotonically() {
    let config = PlannerConfig::default();
    let catalog = catalog(&[
        ("A", 3.0, "PA", 4.0, 15.0),
        ("B", 7.0, "PB", 4.1, 25.0),
        ("C", 2.0, "PC", 4.2, 35.0),
        ("D", 9.0, "PD", 4.3, 45.0),
    ]);

    // Re-run the accumulation step by step through the narration callback:
    // each leg adds a non-negative distance, so every total only grows.
    let mut legs_seen = 0;
    let mut last_distance = 0.0;
    let mut running_distance = 0.0;
    build_route(&catalog, &config, |_, _| {
        legs_seen += 1;
    })
    .unwrap();

    for stop in catalog.stops() {
        running_distance += stop.edge.distance;
        assert!(running_distance >= last_distance);
        last_distance = running_distance;
    }
    assert_eq!(legs_seen, catalog.len() - 1);
}

#[test]
fn test_start_slot_survives_any_budget() {
    let config = PlannerConfig::default();
    for budget in [0.0, 50.0, 150.0, 400.0, 100000.0] {
        let mut catalog = catalog(&[
            ("A", 2.0, "PA", 1.5, 30.0),
            ("B", 5.0, "PB", 4.9, 80.0),
            ("C", 3.0, "PC", 4.8, 70.0),
        ]);

        filter_by_budget(&mut catalog, budget, &config);
        assert!(!catalog.is_empty());
        // Slot 0 is fixed even though it has the worst rating.
        assert_eq!(catalog.stops()[0].place.name, "PA");
    }
}

#[test]
fn test_route_visits_every_surviving_stop_once() {
    let config = PlannerConfig::default();
    let mut catalog = catalog(&[
        ("A", 1.0, "PA", 4.0, 10.0),
        ("B", 4.0, "PB", 4.5, 20.0),
        ("C", 2.0, "PC", 3.5, 30.0),
        ("D", 8.0, "PD", 4.8, 40.0),
        ("E", 6.0, "PE", 3.0, 50.0),
        ("F", 3.0, "PF", 4.2, 60.0),
    ]);

    filter_by_budget(&mut catalog, 350.0, &config);
    let summary = build_route(&catalog, &config, |_, _| {}).unwrap();

    let mut seen = summary.order.clone();
    seen.sort_unstable();
    let expected: Vec<usize> = (0..catalog.len()).collect();
    assert_eq!(seen, expected);
}
