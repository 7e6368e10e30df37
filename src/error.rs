// Crate-wide error type for catalog loading and planning

use thiserror::Error;

/// Errors surfaced while loading city data or planning a tour
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV row that could not be parsed into its record type
    #[error("{file}:{line}: malformed record: {reason}")]
    MalformedRecord {
        file: String,
        line: usize,
        reason: String,
    },

    /// The travel and place files yielded a different number of rows
    #[error("misaligned catalog: {edges} travel rows but {places} place rows")]
    MisalignedCatalog { edges: usize, places: usize },

    /// No usable stops were loaded, or a route was requested over zero stops
    #[error("catalog contains no stops")]
    EmptyCatalog,
}
