//! Demo: a simulated deployment of the tag positioning engine
//!
//! Configures three base stations, synthesizes RSSI readings for tags at
//! known ground-truth locations and prints the estimates next to the truth.

use std::collections::{HashMap, HashSet};

use tagloc::core::{DEFAULT_PATH_LOSS_EXPONENT, DEFAULT_REFERENCE_POWER};
use tagloc::{
    AnchorConfig, InMemoryPositionStore, Point, PositionService, StationConfig, UpdateOutcome,
    UpdateRequest,
};

/// Invert the path-loss model to get the RSSI a tag would report at `meters`
fn rssi_for_distance(meters: f64) -> i32 {
    (DEFAULT_REFERENCE_POWER - 10.0 * DEFAULT_PATH_LOSS_EXPONENT * meters.log10()).round() as i32
}

fn readings_for(truth: Point, stations: &AnchorConfig) -> HashMap<String, i32> {
    stations
        .values()
        .map(|s| {
            let distance = truth.distance_to(&Point::new(s.x, s.y));
            (s.label_id.clone(), rssi_for_distance(distance))
        })
        .collect()
}

fn main() {
    println!("=== Tag Positioning Demo ===\n");

    let stations: AnchorConfig = [
        (
            "base_station_1".to_string(),
            StationConfig { label_id: "base-1".to_string(), x: 0.0, y: 0.0 },
        ),
        (
            "base_station_2".to_string(),
            StationConfig { label_id: "base-2".to_string(), x: 10.0, y: 0.0 },
        ),
        (
            "base_station_3".to_string(),
            StationConfig { label_id: "base-3".to_string(), x: 0.0, y: 10.0 },
        ),
    ]
    .into_iter()
    .collect();

    let tags = [
        ("tag-1", Point::new(3.0, 4.0)),
        ("tag-2", Point::new(7.0, 2.0)),
        ("tag-3", Point::new(1.5, 8.0)),
    ];

    let directory: HashSet<String> = tags.iter().map(|(id, _)| id.to_string()).collect();
    let service = PositionService::new(InMemoryPositionStore::new(), directory);

    service
        .configure_anchors(stations.clone())
        .expect("demo anchor configuration is valid");
    println!("Configured {} base stations:", stations.len());
    for (slot, station) in &stations {
        println!("  {} -> {} at ({:.1}, {:.1})", slot, station.label_id, station.x, station.y);
    }

    println!("\nProcessing neighbor reports:");
    for (tag_id, truth) in tags {
        let request = UpdateRequest {
            id: tag_id.to_string(),
            neighbors: readings_for(truth, &stations),
        };
        match service.apply_update(&request) {
            Ok(UpdateOutcome::Updated(position)) => {
                let error = truth.distance_to(&position.point());
                println!(
                    "  {}: estimated ({:6.2}, {:6.2})  truth ({:4.1}, {:4.1})  error {:.2} m",
                    tag_id, position.x, position.y, truth.x, truth.y, error
                );
            }
            Ok(outcome) => println!("  {}: no estimate ({:?})", tag_id, outcome),
            Err(error) => println!("  {}: {}", tag_id, error),
        }
    }

    println!("\nStored positions (visualization feed):");
    let records = service.positions();
    let json = serde_json::to_string_pretty(&records).expect("records serialize");
    println!("{}", json);
}
