// City links table and the next-city suggestion scan

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::algorithms::PlannerConfig;
use crate::models::{CityLink, Distance};
use crate::PlannerError;

/// Loads the inter-city distance table from a `from,to,distance` CSV.
///
/// Same conventions as the catalog files: one header line, at most
/// `config.max_places` rows.
pub fn load_city_links(
    file_name: &str,
    config: &PlannerConfig,
) -> Result<Vec<CityLink>, PlannerError> {
    let file = File::open(Path::new(file_name))?;
    let reader = io::BufReader::new(file);

    let mut links = Vec::new();

    for (i, line) in reader.lines().enumerate().skip(1) {
        if links.len() >= config.max_places {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            return Err(PlannerError::MalformedRecord {
                file: file_name.to_string(),
                line: i + 1,
                reason: "expected from,to,distance".to_string(),
            });
        }

        let distance = parts[2].trim().parse::<f64>().map_err(|e| {
            PlannerError::MalformedRecord {
                file: file_name.to_string(),
                line: i + 1,
                reason: format!("bad distance: {}", e),
            }
        })?;

        links.push(CityLink::new(parts[0].trim(), parts[1].trim(), distance));
    }

    Ok(links)
}

/// Finds the closest linked city from the one just visited.
///
/// Linear scan over the links whose origin matches; `None` when the table
/// holds no link out of the current city.
pub fn suggest_next_city<'a>(
    current_city: &str,
    links: &'a [CityLink],
) -> Option<(&'a str, Distance)> {
    let mut closest: Option<(&str, Distance)> = None;

    for link in links {
        if link.from_city != current_city {
            continue;
        }
        match closest {
            Some((_, best)) if link.distance >= best => {}
            _ => closest = Some((link.to_city.as_str(), link.distance)),
        }
    }

    closest
}
