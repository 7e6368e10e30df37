// Budget filter: trims the catalog until the trip fits the budget

use crate::algorithms::PlannerConfig;
use crate::models::{Cost, TourCatalog, TourStop};
use std::cmp::Ordering;

/// Cost one stop contributes to the trip: its travel leg plus its entry fee
fn stop_cost(stop: &TourStop, config: &PlannerConfig) -> Cost {
    stop.edge.distance * config.cost_per_km + stop.place.visiting_cost
}

/// Total trip cost over every stop currently in the catalog
pub fn total_trip_cost(catalog: &TourCatalog, config: &PlannerConfig) -> Cost {
    catalog
        .stops()
        .iter()
        .map(|stop| stop_cost(stop, config))
        .sum()
}

/// Removes stops until the total trip cost fits the budget.
///
/// Slot 0 is the start of every route and is never reordered or removed,
/// whatever its rating. The remaining stops are sorted by ascending rating
/// and dropped from the back of the list until the running total fits the
/// budget or only the starting stop is left. A budget the single starting
/// stop alone cannot meet is accepted as the floor rather than rejected.
pub fn filter_by_budget(catalog: &mut TourCatalog, budget: Cost, config: &PlannerConfig) {
    let mut total = total_trip_cost(catalog, config);

    if catalog.len() > 1 {
        catalog.stops_mut()[1..].sort_by(|a, b| {
            a.place
                .rating
                .partial_cmp(&b.place.rating)
                .unwrap_or(Ordering::Equal)
        });
    }

    while total > budget && catalog.len() > 1 {
        if let Some(dropped) = catalog.pop() {
            total -= stop_cost(&dropped, config);
        }
    }
}
