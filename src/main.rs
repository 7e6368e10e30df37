use std::fs;
use std::io::{self, BufRead, Write};

use tour_planner::utils::catalog_loader::load_catalog;
use tour_planner::utils::city_links::{load_city_links, suggest_next_city};
use tour_planner::{build_route, filter_by_budget, PlannerConfig, RouteSummary};

const CITY_LINKS_FILE: &str = "data/CITY_LINKS.csv";
const CONFIG_FILE: &str = "planner_config.json";
const SUMMARY_FILE: &str = "tour_summary.json";

struct City {
    name: &'static str,
    tagline: &'static str,
    path_file: &'static str,
    place_file: &'static str,
}

const CITIES: [City; 3] = [
    City {
        name: "Bhubaneswar",
        tagline: "The Temple City",
        path_file: "data/BHUBANESWAR_PATH.csv",
        place_file: "data/BHUBANESWAR_PLACE.csv",
    },
    City {
        name: "Cuttack",
        tagline: "The Silver City",
        path_file: "data/CUTTACK_PATH.csv",
        place_file: "data/CUTTACK_PLACE.csv",
    },
    City {
        name: "Puri",
        tagline: "The Holy Beach City",
        path_file: "data/PURI_PATH.csv",
        place_file: "data/PURI_PLACE.csv",
    },
];

fn main() {
    let config = PlannerConfig::load_or_default(CONFIG_FILE);

    // Static data, loaded once outside the city loop
    let city_links = match load_city_links(CITY_LINKS_FILE, &config) {
        Ok(links) => links,
        Err(e) => {
            eprintln!("Could not load city links data: {}", e);
            return;
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(line) = read_line(&mut lines) else {
            break;
        };

        let city = match line.trim().parse::<usize>() {
            Ok(4) => {
                print_farewell();
                break;
            }
            Ok(n) if (1..=CITIES.len()).contains(&n) => &CITIES[n - 1],
            _ => {
                println!("Invalid choice. Please select a valid city or choose Exit.");
                continue;
            }
        };

        let mut catalog = match load_catalog(city.path_file, city.place_file, &config) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error reading CSV files for {}: {}", city.name, e);
                continue;
            }
        };

        print!("Enter your budget (in Rs): ");
        let _ = io::stdout().flush();
        let budget = match read_line(&mut lines).and_then(|l| l.trim().parse::<f64>().ok()) {
            Some(b) if b >= 0.0 => b,
            _ => {
                println!("Invalid budget, returning to the menu.");
                continue;
            }
        };

        filter_by_budget(&mut catalog, budget, &config);

        let start_name = match catalog.start() {
            Some(start) => start.edge.from.clone(),
            None => {
                eprintln!("No stops left to visit in {}.", city.name);
                continue;
            }
        };
        println!("Starting the path calculation from {}", start_name);

        let summary = match build_route(&catalog, &config, |current, next| {
            println!("Currently at: {}, Traveling to: {}", current, next);
        }) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("Could not build a route for {}: {}", city.name, e);
                continue;
            }
        };

        println!("\nReturning to {}", start_name);
        print_summary(&summary);
        save_summary(&summary);

        match suggest_next_city(city.name, &city_links) {
            Some((next_city, distance)) => {
                println!("\nYou have completed visiting your selected city.");
                println!(
                    "Next closest city is {} ({:.1} km away).",
                    next_city, distance
                );
            }
            None => println!("\nNo further city links found."),
        }

        print!("\nWould you like to explore another city? (Enter 1 for Yes, 4 for Exit): ");
        let _ = io::stdout().flush();
        match read_line(&mut lines) {
            Some(line) if line.trim() != "4" => {}
            _ => {
                print_farewell();
                break;
            }
        }
    }
}

fn print_menu() {
    println!("\n*****************************************************");
    println!("*      Welcome to the Odisha City Tour Planner!     *");
    println!("*****************************************************");
    println!("*    Select a city to start your adventure:         *");
    for (i, city) in CITIES.iter().enumerate() {
        println!("*    {}. {:<14} ({})", i + 1, city.name, city.tagline);
    }
    println!("*    4. Exit                                        *");
    println!("*****************************************************");
    print!("Enter the number corresponding to your choice(1/2/3/4) :");
    let _ = io::stdout().flush();
}

fn print_farewell() {
    println!("\n***********************************************************");
    println!("!!Exiting the tour planner. Thank you for visiting Odisha!!");
    println!("***********************************************************");
}

fn print_summary(summary: &RouteSummary) {
    println!("\nTotal travel distance: {:.1} km", summary.total_distance);
    println!(
        "Total travel time: {:.2} hours ({:.2} minutes)",
        summary.total_time_hours,
        summary.total_time_minutes()
    );
    println!("Total travel cost (by car): {:.2} Rs", summary.travel_cost);
    println!("Total visiting cost: {:.2} Rs", summary.visiting_cost);
    println!("Total place ratings sum: {:.2}", summary.total_rating);
}

fn save_summary(summary: &RouteSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json_str) => {
            if let Err(e) = fs::write(SUMMARY_FILE, json_str) {
                eprintln!("Failed to save summary to {}: {}", SUMMARY_FILE, e);
            }
        }
        Err(e) => eprintln!("Failed to serialize summary: {}", e),
    }
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next()?.ok()
}
