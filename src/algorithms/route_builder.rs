// Route builder: greedy visiting order over the filtered catalog

use crate::algorithms::PlannerConfig;
use crate::models::{RouteSummary, TourCatalog};
use crate::PlannerError;

/// Builds the visiting order and totals for the catalog, read-only.
///
/// Starts at slot 0 and repeatedly moves to the unvisited stop with the
/// smallest recorded edge distance. The selection key is each stop's own
/// stored distance, not a live distance from the current position: the data
/// model carries one distance per slot and no pairwise matrix, so the stored
/// value is the only distance there is to compare.
///
/// `on_step` is invoked once per travel leg with the current and next stop
/// names as recorded in the edge data. After the last stop a return leg is
/// added, priced from slot 0's stored distance.
pub fn build_route(
    catalog: &TourCatalog,
    config: &PlannerConfig,
    mut on_step: impl FnMut(&str, &str),
) -> Result<RouteSummary, PlannerError> {
    let stops = catalog.stops();
    let count = stops.len();
    if count == 0 {
        return Err(PlannerError::EmptyCatalog);
    }

    let mut visited = vec![false; count];
    let mut current = 0;
    visited[0] = true;

    let mut order = Vec::with_capacity(count);
    order.push(0);

    let mut total_distance = 0.0;
    let mut total_time_hours = 0.0;
    let mut travel_cost = 0.0;
    let mut visiting_cost = 0.0;
    let mut total_rating = 0.0;

    for _ in 0..count - 1 {
        let mut nearest: Option<usize> = None;
        let mut nearest_distance = f64::MAX;

        for (j, stop) in stops.iter().enumerate() {
            if !visited[j] && stop.edge.distance < nearest_distance {
                nearest_distance = stop.edge.distance;
                nearest = Some(j);
            }
        }

        if let Some(next) = nearest {
            on_step(&stops[current].edge.to, &stops[next].edge.to);

            let leg = stops[next].edge.distance;
            total_distance += leg;
            total_time_hours += leg * config.time_per_km_minutes / 60.0;
            travel_cost += leg * config.cost_per_km;
            visiting_cost += stops[next].place.visiting_cost;
            total_rating += stops[next].place.rating;

            current = next;
            visited[current] = true;
            order.push(current);
        }
    }

    // Round trip: the return leg reuses the distance recorded at slot 0.
    let return_leg = stops[0].edge.distance;
    total_distance += return_leg;
    total_time_hours += return_leg * config.time_per_km_minutes / 60.0;
    travel_cost += return_leg * config.cost_per_km;

    Ok(RouteSummary {
        order,
        total_distance,
        total_time_hours,
        travel_cost,
        visiting_cost,
        total_rating,
    })
}
