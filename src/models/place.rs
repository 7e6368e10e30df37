// Place model representing a candidate stop's rating and entry cost

use crate::models::{Cost, Rating};
use serde::{Deserialize, Serialize};

/// One `name,rating,cost` row of a city's place file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Name of the place
    pub name: String,

    /// Visitor rating used when trimming to budget
    pub rating: Rating,

    /// Cost of visiting the place
    pub visiting_cost: Cost,
}

impl PlaceRecord {
    /// Creates a new place record
    pub fn new<S: Into<String>>(name: S, rating: Rating, visiting_cost: Cost) -> Self {
        Self {
            name: name.into(),
            rating,
            visiting_cost,
        }
    }
}
