//! # pollenfield
//!
//! Continuous pollen-index fields from sparse city observations.
//!
//! This library turns daily per-city pollen-index measurements into smooth
//! per-city trends and into gridded spatial fields over a geographic region,
//! one field per date.
//!
//! ## Key Features
//!
//! - **Temporal smoothing**: moving average, Savitzky-Golay, LOWESS and a
//!   constant-velocity recursive (Kalman-style) filter behind one trait
//! - **Spatial interpolation**: nearest neighbour, Delaunay-linear,
//!   multiquadric radial basis and Clough-Tocher cubic patches
//! - **Region masking**: point-in-polygon masking against any (multi-)polygon
//! - **Lazy frames**: fields are produced one date at a time, in date order
//!
//! ## Pipeline
//!
//! observations → [`smoothing::smooth_table`] → [`sequencer::sequence`]
//! (group by date, resolve locations through a [`LocationRegistry`]) →
//! [`interpolation::interpolate`] on a [`Grid`] → [`mask::RegionMask`] →
//! [`sequencer::Frame`].

pub mod config;
pub mod data_loader;
pub mod error;
pub mod grid;
pub mod interpolation;
mod linalg;
pub mod logging;
pub mod mask;
pub mod registry;
pub mod sequencer;
pub mod series;
pub mod smoothing;

pub use config::Config;
pub use error::{PollenError, Result};
pub use grid::{build_grid, Field, Grid};
pub use interpolation::{get_interpolator, interpolate, Interpolator, SamplePoint};
pub use logging::{
    generate_run_id, init_tracing, log_error, log_input_stats, log_operation_end,
    log_operation_start, log_timed_operation,
};
pub use mask::{mask, Boundary, RegionMask};
pub use registry::{Coordinate, LocationRegistry};
pub use sequencer::{sequence, Frame, Frames};
pub use series::{Observation, TimeSeries};
pub use smoothing::{get_smoother, smooth, Smoother, SmoothingParams};
