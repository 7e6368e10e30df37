pub mod budget_filter;
pub mod route_builder;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Planner tunables shared by the budget filter and the route builder.
///
/// Defaults: 12 Rs per km by car, 2 minutes of travel per km, at most 20
/// catalog slots per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Travel cost per kilometre
    pub cost_per_km: f64,

    /// Travel time per kilometre, in minutes
    pub time_per_km_minutes: f64,

    /// Upper bound on catalog slots read per city; extra rows are dropped
    pub max_places: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cost_per_km: 12.0,
            time_per_km_minutes: 2.0,
            max_places: 20,
        }
    }
}

impl PlannerConfig {
    /// Loads the config from a JSON file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(json_str) => match serde_json::from_str(&json_str) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
