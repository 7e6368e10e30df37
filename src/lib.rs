// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::budget_filter::{filter_by_budget, total_trip_cost};
pub use algorithms::route_builder::build_route;
pub use algorithms::PlannerConfig;
pub use error::PlannerError;
pub use models::{CityLink, PlaceRecord, RouteSummary, TourCatalog, TourStop, TravelEdge};
