//! Configuration management for pollenfield.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PollenError, Result};
use crate::grid::{
    build_grid, Grid, DEFAULT_LAT_MAX, DEFAULT_LAT_MIN, DEFAULT_LON_MAX, DEFAULT_LON_MIN,
    DEFAULT_RESOLUTION,
};
use crate::interpolation::{get_interpolator, Interpolator};
use crate::series::parse_date;
use crate::smoothing::{get_smoother, Smoother, SmoothingParams};

/// Command-line arguments for pollenfield
#[derive(Parser, Debug)]
#[command(name = "pollenfield")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Observation records (JSON array or JSON lines)
    pub observations: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "POLLENFIELD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Smoothing method (moving_average, savitzky_golay, lowess, recursive_filter)
    #[arg(short, long, env = "POLLENFIELD_SMOOTHING")]
    pub smoothing: Option<String>,

    /// Interpolation method (nearest, linear, radial_basis, clough_tocher)
    #[arg(short, long, env = "POLLENFIELD_INTERPOLATION")]
    pub interpolation: Option<String>,

    /// Window width for moving average and Savitzky-Golay
    #[arg(long, env = "POLLENFIELD_WINDOW")]
    pub window: Option<usize>,

    /// Polynomial order for Savitzky-Golay
    #[arg(long, env = "POLLENFIELD_POLYORDER")]
    pub polyorder: Option<usize>,

    /// Neighbourhood fraction for LOWESS
    #[arg(long, env = "POLLENFIELD_FRAC")]
    pub frac: Option<f64>,

    /// Grid cell size in degrees
    #[arg(short, long, env = "POLLENFIELD_RESOLUTION")]
    pub resolution: Option<f64>,

    /// Location registry JSON (defaults to the built-in table)
    #[arg(long, env = "POLLENFIELD_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// GeoJSON region boundary (no masking when absent)
    #[arg(short, long, env = "POLLENFIELD_BOUNDARY")]
    pub boundary: Option<PathBuf>,

    /// Output file for frame records (stdout when absent)
    #[arg(short, long, env = "POLLENFIELD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long, env = "POLLENFIELD_START_DATE")]
    pub start_date: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long, env = "POLLENFIELD_END_DATE")]
    pub end_date: Option<String>,

    /// Output mode: one frame per date, or a single frame of totals
    #[arg(short, long, env = "POLLENFIELD_MODE", value_enum)]
    pub mode: Option<OutputMode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "POLLENFIELD_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// What the pipeline emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One frame per distinct date
    Frames,
    /// A single frame of per-location totals over the date range
    Total,
}

/// Evaluation grid bounds and resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_lon_min")]
    pub lon_min: f64,
    #[serde(default = "default_lon_max")]
    pub lon_max: f64,
    #[serde(default = "default_lat_min")]
    pub lat_min: f64,
    #[serde(default = "default_lat_max")]
    pub lat_max: f64,
    #[serde(default = "default_resolution")]
    pub resolution: f64,
}

impl GridConfig {
    pub fn build(&self) -> Result<Grid> {
        build_grid(
            self.lon_min,
            self.lon_max,
            self.lat_min,
            self.lat_max,
            self.resolution,
        )
    }
}

/// Temporal smoothing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Method name; no smoothing when absent
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default = "default_window")]
    pub window: usize,

    #[serde(default = "default_polyorder")]
    pub polyorder: usize,

    #[serde(default = "default_frac")]
    pub frac: f64,
}

impl SmoothingConfig {
    pub fn params(&self) -> SmoothingParams {
        SmoothingParams {
            window: self.window,
            polyorder: self.polyorder,
            frac: self.frac,
        }
    }

    /// The configured smoother, `None` when smoothing is off
    pub fn smoother(&self) -> Result<Option<Box<dyn Smoother>>> {
        self.method
            .as_deref()
            .map(|name| get_smoother(name, &self.params()))
            .transpose()
    }
}

/// Spatial interpolation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationConfig {
    #[serde(default = "default_interpolation")]
    pub method: String,
}

impl InterpolationConfig {
    pub fn interpolator(&self) -> Result<Box<dyn Interpolator>> {
        get_interpolator(&self.method)
    }
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub observations: Option<PathBuf>,

    #[serde(default)]
    pub registry: Option<PathBuf>,

    #[serde(default)]
    pub boundary: Option<PathBuf>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Inclusive, `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: Option<String>,

    /// Inclusive, `YYYY-MM-DD`
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default = "default_mode")]
    pub mode: OutputMode,
}

impl DataConfig {
    /// Parsed `(start_date, end_date)`
    pub fn date_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
        let start = self.start_date.as_deref().map(parse_date).transpose()?;
        let end = self.end_date.as_deref().map(parse_date).transpose()?;
        Ok((start, end))
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub smoothing: SmoothingConfig,

    #[serde(default)]
    pub interpolation: InterpolationConfig,

    #[serde(default)]
    pub data: DataConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        config.apply_args(args);
        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.grid = other.grid;
        self.interpolation = other.interpolation;
        self.log_level = other.log_level;

        self.smoothing.window = other.smoothing.window;
        self.smoothing.polyorder = other.smoothing.polyorder;
        self.smoothing.frac = other.smoothing.frac;
        if other.smoothing.method.is_some() {
            self.smoothing.method = other.smoothing.method;
        }

        let data = other.data;
        self.data.mode = data.mode;
        self.data.observations = data.observations.or(self.data.observations.take());
        self.data.registry = data.registry.or(self.data.registry.take());
        self.data.boundary = data.boundary.or(self.data.boundary.take());
        self.data.output = data.output.or(self.data.output.take());
        self.data.start_date = data.start_date.or(self.data.start_date.take());
        self.data.end_date = data.end_date.or(self.data.end_date.take());
    }

    /// Override with command-line arguments and environment variables
    fn apply_args(&mut self, args: Args) {
        if args.observations.is_some() {
            self.data.observations = args.observations;
        }
        if args.smoothing.is_some() {
            self.smoothing.method = args.smoothing;
        }
        if let Some(method) = args.interpolation {
            self.interpolation.method = method;
        }
        if let Some(window) = args.window {
            self.smoothing.window = window;
        }
        if let Some(polyorder) = args.polyorder {
            self.smoothing.polyorder = polyorder;
        }
        if let Some(frac) = args.frac {
            self.smoothing.frac = frac;
        }
        if let Some(resolution) = args.resolution {
            self.grid.resolution = resolution;
        }
        if args.registry.is_some() {
            self.data.registry = args.registry;
        }
        if args.boundary.is_some() {
            self.data.boundary = args.boundary;
        }
        if args.output.is_some() {
            self.data.output = args.output;
        }
        if args.start_date.is_some() {
            self.data.start_date = args.start_date;
        }
        if args.end_date.is_some() {
            self.data.end_date = args.end_date;
        }
        if let Some(mode) = args.mode {
            self.data.mode = mode;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
    }

    /// Validate the configuration.
    ///
    /// Method names and their parameters are checked by constructing the
    /// methods, so anything accepted here will also be accepted by the engines.
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(PollenError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.grid.build().map_err(|e| PollenError::Config {
            message: format!("Invalid grid: {}", e),
        })?;

        self.smoothing.smoother().map_err(|e| PollenError::Config {
            message: format!("Invalid smoothing: {}", e),
        })?;

        self.interpolation
            .interpolator()
            .map_err(|e| PollenError::Config {
                message: format!("Invalid interpolation: {}", e),
            })?;

        let (start, end) = self.data.date_range().map_err(|e| PollenError::Config {
            message: format!("Invalid date range: {}", e),
        })?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(PollenError::Config {
                    message: format!("start_date {} is after end_date {}", start, end),
                });
            }
        }

        if self.data.observations.is_none() {
            return Err(PollenError::Config {
                message: "No observations file given".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            smoothing: SmoothingConfig::default(),
            interpolation: InterpolationConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            lon_min: default_lon_min(),
            lon_max: default_lon_max(),
            lat_min: default_lat_min(),
            lat_max: default_lat_max(),
            resolution: default_resolution(),
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            method: None,
            window: default_window(),
            polyorder: default_polyorder(),
            frac: default_frac(),
        }
    }
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            method: default_interpolation(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            observations: None,
            registry: None,
            boundary: None,
            output: None,
            start_date: None,
            end_date: None,
            mode: default_mode(),
        }
    }
}

// Default value functions for serde
fn default_lon_min() -> f64 {
    DEFAULT_LON_MIN
}

fn default_lon_max() -> f64 {
    DEFAULT_LON_MAX
}

fn default_lat_min() -> f64 {
    DEFAULT_LAT_MIN
}

fn default_lat_max() -> f64 {
    DEFAULT_LAT_MAX
}

fn default_resolution() -> f64 {
    DEFAULT_RESOLUTION
}

fn default_window() -> usize {
    5
}

fn default_polyorder() -> usize {
    2
}

fn default_frac() -> f64 {
    0.1
}

fn default_interpolation() -> String {
    "nearest".to_string()
}

fn default_mode() -> OutputMode {
    OutputMode::Frames
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn valid() -> Config {
        let mut config = Config::default();
        config.data.observations = Some(PathBuf::from("observations.jsonl"));
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.grid.lon_min, -125.0);
        assert_eq!(config.grid.lat_max, 50.0);
        assert_eq!(config.grid.resolution, 0.15);
        assert_eq!(config.smoothing.method, None);
        assert_eq!(config.smoothing.window, 5);
        assert_eq!(config.interpolation.method, "nearest");
        assert_eq!(config.data.mode, OutputMode::Frames);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = valid();
        let mut config2 = Config::default();

        config2.smoothing.method = Some("kalman".to_string());
        config2.interpolation.method = "rbf".to_string();
        config2.grid.resolution = 0.5;

        config1.merge(config2);

        assert_eq!(config1.smoothing.method.as_deref(), Some("kalman"));
        assert_eq!(config1.interpolation.method, "rbf");
        assert_eq!(config1.grid.resolution, 0.5);
        // Paths not set in the other config survive
        assert_eq!(
            config1.data.observations,
            Some(PathBuf::from("observations.jsonl"))
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"smoothing": {"method": "savgol", "window": 7}, "data": {"mode": "total"}}"#)
                .unwrap();
        assert_eq!(config.smoothing.window, 7);
        assert_eq!(config.smoothing.polyorder, 2);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.data.mode, OutputMode::Total);
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        assert!(valid().validate().is_ok());

        // Missing observations
        assert!(Config::default().validate().is_err());

        // Test invalid log level
        let mut config = valid();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        // Test invalid interpolation method
        let mut config = valid();
        config.interpolation.method = "kriging".to_string();
        assert!(config.validate().is_err());

        // Smoothing parameters are checked against the chosen method
        let mut config = valid();
        config.smoothing.method = Some("savgol".to_string());
        config.smoothing.window = 4;
        assert!(config.validate().is_err());

        // Test bad grid
        let mut config = valid();
        config.grid.resolution = 0.0;
        assert!(config.validate().is_err());

        let mut config = valid();
        config.grid.lon_min = config.grid.lon_max;
        assert!(config.validate().is_err());

        // Test date range
        let mut config = valid();
        config.data.start_date = Some("2024-02-01".to_string());
        config.data.end_date = Some("2024-01-01".to_string());
        assert!(config.validate().is_err());

        let mut config = valid();
        config.data.start_date = Some("yesterday".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_args_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"interpolation": {"method": "linear"}, "smoothing": {"method": "lowess", "frac": 0.3}, "log_level": "debug"}"#,
        )
        .unwrap();

        let args = Args::parse_from([
            "pollenfield",
            "obs.jsonl",
            "--config",
            path.to_str().unwrap(),
            "--interpolation",
            "clough_tocher",
        ]);
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.interpolation.method, "clough_tocher");
        assert_eq!(config.smoothing.method.as_deref(), Some("lowess"));
        assert_eq!(config.smoothing.frac, 0.3);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data.observations, Some(PathBuf::from("obs.jsonl")));
        assert!(config.validate().is_ok());
    }
}
