//! Loading of the pipeline inputs from disk.
//!
//! - observations: a JSON array or JSON lines of `{date, location, index}`
//! - location registry: see [`crate::registry`]
//! - region boundary: GeoJSON `Polygon` / `MultiPolygon`, bare or wrapped in
//!   a `Feature` / `FeatureCollection`

use chrono::NaiveDate;
use geo::{LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{PollenError, Result};
use crate::mask::Boundary;
use crate::registry::LocationRegistry;
use crate::series::{parse_date, Observation};

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    location: String,
    index: f64,
}

impl RawObservation {
    fn into_observation(self) -> Result<Observation> {
        let date = parse_date(&self.date)?;
        if !self.index.is_finite() || self.index < 0.0 {
            return Err(PollenError::Parse {
                message: format!(
                    "index for {} on {} must be a non-negative number, got {}",
                    self.location, self.date, self.index
                ),
            });
        }
        Ok(Observation::new(date, self.location, self.index))
    }
}

/// Parse observation records and resolve duplicates.
///
/// For repeated `(date, location)` pairs the first record wins.
pub fn parse_observations(content: &str) -> Result<Vec<Observation>> {
    let trimmed = content.trim_start();
    let raw: Vec<RawObservation> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line).map_err(|e| PollenError::Parse {
                    message: format!("line {}: {}", n + 1, e),
                })
            })
            .collect::<Result<_>>()?
    };

    let total = raw.len();
    let mut seen: HashSet<(NaiveDate, String)> = HashSet::with_capacity(total);
    let mut observations = Vec::with_capacity(total);
    for record in raw {
        let obs = record.into_observation()?;
        if seen.insert((obs.date, obs.location.clone())) {
            observations.push(obs);
        }
    }

    if observations.len() < total {
        debug!(
            duplicates = total - observations.len(),
            "Dropped duplicate (date, location) records"
        );
    }
    Ok(observations)
}

/// Load observations from a JSON or JSON-lines file
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let content = std::fs::read_to_string(path)?;
    let observations = parse_observations(&content)?;
    info!(
        path = %path.display(),
        records = observations.len(),
        "Loaded observations"
    );
    Ok(observations)
}

/// Keep observations with `start <= date <= end`; open ends are unbounded
pub fn filter_date_range(
    observations: &[Observation],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| start.map_or(true, |s| o.date >= s) && end.map_or(true, |e| o.date <= e))
        .cloned()
        .collect()
}

/// Load a location registry from its JSON file
pub fn load_registry(path: &Path) -> Result<LocationRegistry> {
    let content = std::fs::read_to_string(path)?;
    let registry = LocationRegistry::from_json_str(&content)?;
    info!(
        path = %path.display(),
        version = registry.version(),
        locations = registry.len(),
        "Loaded location registry"
    );
    Ok(registry)
}

type Ring = Vec<Vec<f64>>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeoJson {
    Polygon {
        coordinates: Vec<Ring>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Ring>>,
    },
    Feature {
        geometry: Option<Box<GeoJson>>,
    },
    FeatureCollection {
        features: Vec<GeoJson>,
    },
}

fn to_line_string(ring: &Ring) -> Result<LineString<f64>> {
    ring.iter()
        .map(|position| match position[..] {
            [lon, lat, ..] => Ok((lon, lat)),
            _ => Err(PollenError::Parse {
                message: "GeoJSON position needs at least two numbers".to_string(),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::from)
}

fn to_polygon(rings: &[Ring]) -> Result<Polygon<f64>> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(PollenError::Parse {
            message: "GeoJSON polygon has no rings".to_string(),
        });
    };
    let interiors = interiors
        .iter()
        .map(to_line_string)
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(to_line_string(exterior)?, interiors))
}

fn collect_polygons(geometry: &GeoJson, out: &mut Vec<Polygon<f64>>) -> Result<()> {
    match geometry {
        GeoJson::Polygon { coordinates } => out.push(to_polygon(coordinates)?),
        GeoJson::MultiPolygon { coordinates } => {
            for rings in coordinates {
                out.push(to_polygon(rings)?);
            }
        }
        GeoJson::Feature { geometry } => {
            if let Some(geometry) = geometry {
                collect_polygons(geometry, out)?;
            }
        }
        GeoJson::FeatureCollection { features } => {
            for feature in features {
                collect_polygons(feature, out)?;
            }
        }
    }
    Ok(())
}

/// Parse a GeoJSON boundary into a [`Boundary`]
pub fn parse_boundary(content: &str) -> Result<Boundary> {
    let geometry: GeoJson = serde_json::from_str(content)?;
    let mut polygons = Vec::new();
    collect_polygons(&geometry, &mut polygons)?;
    if polygons.is_empty() {
        return Err(PollenError::Parse {
            message: "boundary contains no polygons".to_string(),
        });
    }
    Ok(Boundary::from_multi_polygon(MultiPolygon::new(polygons)))
}

/// Load a GeoJSON boundary file
pub fn load_boundary(path: &Path) -> Result<Boundary> {
    let content = std::fs::read_to_string(path)?;
    let boundary = parse_boundary(&content)?;
    info!(
        path = %path.display(),
        polygons = boundary.shape().0.len(),
        "Loaded region boundary"
    );
    Ok(boundary)
}
