// City link model from the inter-city distance table

use crate::models::Distance;
use serde::{Deserialize, Serialize};

/// One row of the city-links file: the road distance between two cities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLink {
    /// City the link starts from
    pub from_city: String,

    /// City the link leads to
    pub to_city: String,

    /// Distance between the two cities in kilometres
    pub distance: Distance,
}

impl CityLink {
    /// Creates a new city link
    pub fn new<S: Into<String>>(from_city: S, to_city: S, distance: Distance) -> Self {
        Self {
            from_city: from_city.into(),
            to_city: to_city.into(),
            distance,
        }
    }
}
