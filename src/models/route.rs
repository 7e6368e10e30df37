// Route summary model for a completed tour

use crate::models::{Cost, Distance, Rating, Time};
use serde::{Deserialize, Serialize};

/// Aggregate totals for one planned tour, including the return leg.
///
/// Time totals are kept in hours; travel and visiting costs are reported
/// separately, and the rating is the sum over visited stops excluding the
/// start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Catalog indices in visiting order, starting at slot 0
    pub order: Vec<usize>,

    /// Total travel distance in kilometres, return leg included
    pub total_distance: Distance,

    /// Total travel time in hours
    pub total_time_hours: Time,

    /// Cost of the travel legs
    pub travel_cost: Cost,

    /// Sum of visiting costs of the stops reached after the start
    pub visiting_cost: Cost,

    /// Sum of ratings of the stops reached after the start
    pub total_rating: Rating,
}

impl RouteSummary {
    /// Total travel time in minutes
    pub fn total_time_minutes(&self) -> Time {
        self.total_time_hours * 60.0
    }

    /// Combined travel and visiting cost
    pub fn total_cost(&self) -> Cost {
        self.travel_cost + self.visiting_cost
    }
}
