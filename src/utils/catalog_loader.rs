// CSV ingestion for the per-city travel and place files

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::algorithms::PlannerConfig;
use crate::models::{PlaceRecord, TourCatalog, TravelEdge};
use crate::PlannerError;

/// Loads one city's catalog from its travel and place CSV files.
///
/// The travel file carries `from,to,distance` rows and the place file
/// `name,rating,cost` rows; row i of one describes row i of the other. Each
/// file's header line is skipped and at most `config.max_places` data rows
/// are read, extra rows being silently dropped. A malformed row, an empty
/// catalog, or files of different lengths abort the load with an error and
/// leave no partial state behind.
pub fn load_catalog(
    path_file: &str,
    place_file: &str,
    config: &PlannerConfig,
) -> Result<TourCatalog, PlannerError> {
    let edges = load_travel_edges(path_file, config.max_places)?;
    let places = load_places(place_file, config.max_places)?;

    let catalog = TourCatalog::from_parts(edges, places)?;
    if catalog.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }

    Ok(catalog)
}

fn load_travel_edges(file_name: &str, max_rows: usize) -> Result<Vec<TravelEdge>, PlannerError> {
    let mut edges = Vec::new();

    for (line_no, line) in data_rows(file_name)?.take(max_rows) {
        let line = line?;
        let parts: Vec<&str> = line.split(',').collect();

        if parts.len() < 3 {
            return Err(malformed(file_name, line_no, "expected from,to,distance"));
        }

        let distance = parts[2].trim().parse::<f64>().map_err(|e| {
            malformed(file_name, line_no, &format!("bad distance: {}", e))
        })?;

        edges.push(TravelEdge::new(
            parts[0].trim(),
            parts[1].trim(),
            distance,
        ));
    }

    Ok(edges)
}

fn load_places(file_name: &str, max_rows: usize) -> Result<Vec<PlaceRecord>, PlannerError> {
    let mut places = Vec::new();

    for (line_no, line) in data_rows(file_name)?.take(max_rows) {
        let line = line?;
        let parts: Vec<&str> = line.split(',').collect();

        if parts.len() < 3 {
            return Err(malformed(file_name, line_no, "expected name,rating,cost"));
        }

        let rating = parts[1].trim().parse::<f64>().map_err(|e| {
            malformed(file_name, line_no, &format!("bad rating: {}", e))
        })?;
        let visiting_cost = parts[2].trim().parse::<f64>().map_err(|e| {
            malformed(file_name, line_no, &format!("bad cost: {}", e))
        })?;

        places.push(PlaceRecord::new(parts[0].trim(), rating, visiting_cost));
    }

    Ok(places)
}

/// Opens a CSV file and yields its non-empty data lines with 1-based line
/// numbers, skipping the header.
fn data_rows(
    file_name: &str,
) -> Result<impl Iterator<Item = (usize, io::Result<String>)>, PlannerError> {
    let file = File::open(Path::new(file_name))?;
    let reader = io::BufReader::new(file);

    Ok(reader
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .skip(1)
        .filter(|(_, line)| match line {
            Ok(l) => !l.trim().is_empty(),
            Err(_) => true,
        }))
}

fn malformed(file: &str, line: usize, reason: &str) -> PlannerError {
    PlannerError::MalformedRecord {
        file: file.to_string(),
        line,
        reason: reason.to_string(),
    }
}
