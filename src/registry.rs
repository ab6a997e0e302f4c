//! Location registry: location key to coordinate lookup.
//!
//! A registry is a read-only value handed to the frame sequencer, never a
//! global. Each registry carries a version string so that frames can be
//! traced back to the coordinate table that produced them.
//!
//! On disk a registry is JSON:
//!
//! ```json
//! { "version": "2024-03", "locations": { "ATLANTA, GA": [33.749, -84.388] } }
//! ```
//!
//! with coordinates given as `[latitude, longitude]`.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{PollenError, Result};

/// Version tag of the table compiled into the crate
pub const BUILTIN_VERSION: &str = "builtin-1";

/// A validated latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PollenError::invalid_parameter(
                "latitude",
                format!("must be within [-90, 90], got {}", latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PollenError::invalid_parameter(
                "longitude",
                format!("must be within [-180, 180], got {}", longitude),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    version: String,
    locations: BTreeMap<String, (f64, f64)>,
}

/// Versioned mapping from `"CITY, ST"` keys to coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRegistry {
    version: String,
    locations: HashMap<String, Coordinate>,
}

impl LocationRegistry {
    pub fn new(version: impl Into<String>, locations: HashMap<String, Coordinate>) -> Self {
        Self {
            version: version.into(),
            locations,
        }
    }

    /// Build from `(key, latitude, longitude)` entries, validating each one
    pub fn from_entries<'a, I>(version: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64, f64)>,
    {
        let locations = entries
            .into_iter()
            .map(|(key, lat, lon)| Ok((key.to_string(), Coordinate::new(lat, lon)?)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self::new(version, locations))
    }

    /// The table of US reporting cities shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_entries(BUILTIN_VERSION, builtin::LOCATIONS.iter().copied())
    }

    /// Parse the JSON registry format
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        if file.version.trim().is_empty() {
            return Err(PollenError::Parse {
                message: "registry version must not be empty".to_string(),
            });
        }
        Self::from_entries(
            file.version,
            file.locations
                .iter()
                .map(|(key, &(lat, lon))| (key.as_str(), lat, lon)),
        )
    }

    /// Serialize to the JSON registry format, keys sorted
    pub fn to_json_string(&self) -> Result<String> {
        let file = RegistryFile {
            version: self.version.clone(),
            locations: self
                .locations
                .iter()
                .map(|(k, c)| (k.clone(), (c.latitude, c.longitude)))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn lookup(&self, location: &str) -> Option<Coordinate> {
        self.locations.get(location).copied()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
