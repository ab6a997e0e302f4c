//! Test data generation utilities.
//!
//! This module provides small, deterministic observation tables, registries
//! and boundaries with known structure.

use pollenfield::{Boundary, Coordinate, LocationRegistry, Observation};
use std::collections::HashMap;
use std::path::Path;

/// Parse a `YYYY-MM-DD` date, panicking on bad input
pub fn date(s: &str) -> chrono::NaiveDate {
    pollenfield::series::parse_date(s).unwrap()
}

/// A registry with three made-up locations inside `[-100, -90] x [30, 40]`
pub fn small_registry() -> LocationRegistry {
    let mut locations = HashMap::new();
    locations.insert("A, XX".to_string(), Coordinate::new(32.0, -98.0).unwrap());
    locations.insert("B, XX".to_string(), Coordinate::new(38.0, -92.0).unwrap());
    locations.insert("C, YY".to_string(), Coordinate::new(35.0, -95.5).unwrap());
    LocationRegistry::new("test-1", locations)
}

/// A rectangle that contains every location of [`small_registry`]
pub fn small_boundary() -> Boundary {
    Boundary::rectangle(-100.0, 30.0, -90.0, 40.0)
}

/// `days` consecutive daily observations per location with a noisy seasonal shape
pub fn seasonal_table(locations: &[&str], days: usize) -> Vec<Observation> {
    let start = date("2024-03-01");
    let mut table = Vec::with_capacity(locations.len() * days);
    for day in 0..days {
        let d = start + chrono::Duration::days(day as i64);
        for (k, location) in locations.iter().enumerate() {
            let t = day as f64;
            let trend = 6.0 + 4.0 * (t / days as f64 * std::f64::consts::PI).sin();
            let noise = if (day + k) % 2 == 0 { 0.4 } else { -0.4 };
            table.push(Observation::new(d, *location, trend + noise + k as f64));
        }
    }
    table
}

/// Write observations as JSON lines in the ingestion format
pub fn write_observations_jsonl(path: &Path, table: &[Observation]) -> std::io::Result<()> {
    let lines: Vec<String> = table
        .iter()
        .map(|o| {
            serde_json::json!({
                "date": o.date.format("%Y-%m-%d").to_string(),
                "location": o.location,
                "index": o.value,
            })
            .to_string()
        })
        .collect();
    std::fs::write(path, lines.join("\n"))
}
