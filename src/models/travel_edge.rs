// Travel edge model representing the recorded leg for one catalog slot

use crate::models::Distance;
use serde::{Deserialize, Serialize};

/// One `from,to,distance` row of a city's travel file.
///
/// The distance is the kilometres recorded for this slot in the input data,
/// not a live distance from an arbitrary current position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEdge {
    /// Name of the origin stop
    pub from: String,

    /// Name of the destination stop
    pub to: String,

    /// Recorded travel distance in kilometres
    pub distance: Distance,
}

impl TravelEdge {
    /// Creates a new travel edge
    pub fn new<S: Into<String>>(from: S, to: S, distance: Distance) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}
