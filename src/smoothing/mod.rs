//! Temporal smoothing of per-location time series.
//!
//! Each method lives in its own module and implements [`Smoother`]. Method
//! parameters are validated when the smoother is constructed, so a smoother
//! that exists is always well-configured; only checks that depend on the
//! series itself (such as its length) happen at smoothing time.

pub mod lowess;
pub mod moving_average;
pub mod recursive;
pub mod savitzky_golay;

use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{PollenError, Result};
use crate::series::{Observation, TimeSeries};

pub use lowess::Lowess;
pub use moving_average::MovingAverage;
pub use recursive::{FilterState, RecursiveFilter};
pub use savitzky_golay::SavitzkyGolay;

/// Trait for smoothing methods
pub trait Smoother: Send + Sync {
    /// Smooth `values`, returning a new sequence aligned 1:1 by position.
    ///
    /// Positions the method cannot estimate are `NaN`.
    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>>;

    /// Get the name of this smoothing method
    fn name(&self) -> &str;
}

/// Tuning values consumed by the smoothing methods
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingParams {
    /// Window width for moving average and Savitzky-Golay
    pub window: usize,
    /// Polynomial order for Savitzky-Golay
    pub polyorder: usize,
    /// Neighbourhood fraction for LOWESS
    pub frac: f64,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            window: 5,
            polyorder: 2,
            frac: 0.1,
        }
    }
}

/// Get a smoother by name
pub fn get_smoother(name: &str, params: &SmoothingParams) -> Result<Box<dyn Smoother>> {
    match name.to_lowercase().as_str() {
        "moving_average" | "sma" => Ok(Box::new(MovingAverage::new(params.window)?)),
        "savitzky_golay" | "savgol" => Ok(Box::new(SavitzkyGolay::new(
            params.window,
            params.polyorder,
        )?)),
        "lowess" => Ok(Box::new(Lowess::new(params.frac)?)),
        "recursive_filter" | "kalman" => Ok(Box::new(RecursiveFilter::default())),
        _ => Err(PollenError::UnknownMethod {
            kind: "smoothing".to_string(),
            name: name.to_string(),
        }),
    }
}

/// Smooth one series; the input is left untouched.
pub fn smooth(series: &TimeSeries, smoother: &dyn Smoother) -> Result<Vec<f64>> {
    smoother.smooth(series.values())
}

/// Smooth every location's series independently and return a new table.
///
/// The output is aligned with `observations` by position: row `i` of the
/// result is row `i` of the input with its value replaced by the smoothed
/// one. Locations are processed in parallel.
pub fn smooth_table(
    observations: &[Observation],
    smoother: &dyn Smoother,
) -> Result<Vec<Observation>> {
    let mut by_location: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, obs) in observations.iter().enumerate() {
        by_location.entry(obs.location.as_str()).or_default().push(i);
    }

    let groups: Vec<(&str, Vec<usize>)> = by_location
        .into_iter()
        .map(|(location, mut rows)| {
            rows.sort_by_key(|&i| observations[i].date);
            (location, rows)
        })
        .collect();

    let smoothed: Vec<(Vec<usize>, Vec<f64>)> = groups
        .into_par_iter()
        .map(|(location, rows)| -> Result<(Vec<usize>, Vec<f64>)> {
            let series = TimeSeries::new(
                rows.iter()
                    .map(|&i| (observations[i].date, observations[i].value))
                    .collect(),
            )
            .map_err(|e| match e {
                PollenError::InvalidParameter { message, .. } => PollenError::InvalidParameter {
                    param: "observations".to_string(),
                    message: format!("{}: {}", location, message),
                },
                other => other,
            })?;
            let values = smooth(&series, smoother)?;
            debug!(
                location = location,
                samples = values.len(),
                method = smoother.name(),
                "Smoothed series"
            );
            Ok((rows, values))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = observations.to_vec();
    for (rows, values) in smoothed {
        for (i, value) in rows.into_iter().zip(values) {
            out[i].value = value;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::parse_date;

    #[test]
    fn test_get_smoother_names() {
        let params = SmoothingParams::default();
        assert_eq!(get_smoother("sma", &params).unwrap().name(), "moving_average");
        assert_eq!(get_smoother("Savgol", &params).unwrap().name(), "savitzky_golay");
        assert_eq!(get_smoother("lowess", &params).unwrap().name(), "lowess");
        assert_eq!(get_smoother("kalman", &params).unwrap().name(), "recursive_filter");
        assert_eq!(
            get_smoother("recursive_filter", &params).unwrap().name(),
            "recursive_filter"
        );
    }

    #[test]
    fn test_unknown_smoother() {
        let result = get_smoother("median", &SmoothingParams::default());
        assert!(matches!(result, Err(PollenError::UnknownMethod { .. })));
    }

    #[test]
    fn test_invalid_params_rejected_at_construction() {
        let params = SmoothingParams {
            window: 4,
            ..Default::default()
        };
        assert!(matches!(
            get_smoother("savgol", &params),
            Err(PollenError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_smooth_table_keeps_alignment() {
        let d = |s: &str| parse_date(s).unwrap();
        // Interleaved and out of date order on purpose
        let table = vec![
            Observation::new(d("2024-01-02"), "A", 4.0),
            Observation::new(d("2024-01-01"), "B", 1.0),
            Observation::new(d("2024-01-01"), "A", 2.0),
            Observation::new(d("2024-01-02"), "B", 1.0),
        ];
        let original = table.clone();

        let smoother = MovingAverage::new(1).unwrap();
        let out = smooth_table(&table, &smoother).unwrap();
        assert_eq!(out, original);
        assert_eq!(table, original);

        let smoother = RecursiveFilter::default();
        let out = smooth_table(&table, &smoother).unwrap();
        assert_eq!(out.len(), 4);
        // First sample of each series is reproduced exactly
        assert_eq!(out[2].value, 2.0);
        assert_eq!(out[1].value, 1.0);
        assert_eq!(out[3].value, 1.0);
        assert_eq!(out[0].location, "A");
    }

    #[test]
    fn test_smooth_table_rejects_duplicate_dates() {
        let d = parse_date("2024-01-01").unwrap();
        let table = vec![Observation::new(d, "A", 1.0), Observation::new(d, "A", 2.0)];
        let smoother = MovingAverage::new(1).unwrap();
        assert!(smooth_table(&table, &smoother).is_err());
    }
}
