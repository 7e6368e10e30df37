// Tour catalog: the per-city list of candidate stops

use crate::models::{PlaceRecord, TravelEdge};
use crate::PlannerError;
use serde::{Deserialize, Serialize};

/// One catalog slot: a place together with its recorded travel leg.
///
/// The original data model keeps two parallel lists with a purely positional
/// contract between them; pairing the records here means any sort or removal
/// moves both halves atomically and alignment cannot be lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStop {
    pub edge: TravelEdge,
    pub place: PlaceRecord,
}

impl TourStop {
    /// Creates a new stop from its edge and place halves
    pub fn new(edge: TravelEdge, place: PlaceRecord) -> Self {
        Self { edge, place }
    }
}

/// Ordered list of candidate stops for one city-selection cycle.
///
/// Built once per city choice, trimmed in place by the budget filter, read
/// back by the route builder, and dropped when the next city is chosen.
/// Slot 0 is the starting stop for every route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourCatalog {
    stops: Vec<TourStop>,
}

impl TourCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Zips two aligned vectors into a catalog.
    ///
    /// The i-th edge describes the i-th place; lists of different lengths
    /// have lost that contract and are rejected.
    pub fn from_parts(
        edges: Vec<TravelEdge>,
        places: Vec<PlaceRecord>,
    ) -> Result<Self, PlannerError> {
        if edges.len() != places.len() {
            return Err(PlannerError::MisalignedCatalog {
                edges: edges.len(),
                places: places.len(),
            });
        }

        let stops = edges
            .into_iter()
            .zip(places)
            .map(|(edge, place)| TourStop::new(edge, place))
            .collect();

        Ok(Self { stops })
    }

    /// Appends a stop to the catalog
    pub fn push(&mut self, stop: TourStop) {
        self.stops.push(stop);
    }

    /// Number of stops currently in the catalog
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the catalog holds no stops
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Read-only view of the stops
    pub fn stops(&self) -> &[TourStop] {
        &self.stops
    }

    /// Mutable view of the stops, for in-place reordering
    pub fn stops_mut(&mut self) -> &mut [TourStop] {
        &mut self.stops
    }

    /// Removes and returns the last stop
    pub fn pop(&mut self) -> Option<TourStop> {
        self.stops.pop()
    }

    /// The starting stop, if any
    pub fn start(&self) -> Option<&TourStop> {
        self.stops.first()
    }
}
