// Models module - exports all model types

mod catalog;
mod city_link;
mod place;
mod route;
mod travel_edge;

// Re-export model types
pub use self::catalog::{TourCatalog, TourStop};
pub use self::city_link::CityLink;
pub use self::place::PlaceRecord;
pub use self::route::RouteSummary;
pub use self::travel_edge::TravelEdge;

// Common type aliases for improved code readability
pub type Distance = f64;
pub type Cost = f64;
pub type Time = f64;
pub type Rating = f64;
