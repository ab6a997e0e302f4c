//! Constant-velocity state-space filter.
//!
//! The latent state is `[level, trend]`, advanced with a unit time step
//! between consecutive samples whatever the real gap between their dates.
//! Smoothing is a fold over the series carrying a [`FilterState`]: each step
//! predicts from the motion model, corrects with the new sample and emits the
//! corrected level. Every output depends on all earlier samples, so a single
//! series must be processed strictly in order.

use super::Smoother;
use crate::error::Result;

/// Process noise added to both state components per step
const PROCESS_NOISE: f64 = 0.1;
/// Measurement noise variance
const MEASUREMENT_NOISE: f64 = 5.0;
/// Initial state covariance, as a multiple of the identity
const INITIAL_COVARIANCE: f64 = 100.0;

/// Filter state carried between steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub level: f64,
    pub trend: f64,
    /// Row-major 2x2 state covariance
    pub covariance: [[f64; 2]; 2],
}

impl FilterState {
    /// Start at `level` with no trend and a wide covariance
    pub fn initial(level: f64) -> Self {
        Self {
            level,
            trend: 0.0,
            covariance: [[INITIAL_COVARIANCE, 0.0], [0.0, INITIAL_COVARIANCE]],
        }
    }

    /// Advance one unit step with `x = F x`, `P = F P F' + Q`, `F = [[1, 1], [0, 1]]`
    pub fn predict(self) -> Self {
        let [[p00, p01], [p10, p11]] = self.covariance;
        Self {
            level: self.level + self.trend,
            trend: self.trend,
            covariance: [
                [p00 + p01 + p10 + p11 + PROCESS_NOISE, p01 + p11],
                [p10 + p11, p11 + PROCESS_NOISE],
            ],
        }
    }

    /// Correct with a measurement of the level (`H = [1, 0]`)
    pub fn update(self, measurement: f64) -> Self {
        let [[p00, p01], [p10, p11]] = self.covariance;
        let innovation = measurement - self.level;
        let s = p00 + MEASUREMENT_NOISE;
        let k0 = p00 / s;
        let k1 = p10 / s;
        Self {
            level: self.level + k0 * innovation,
            trend: self.trend + k1 * innovation,
            covariance: [
                [(1.0 - k0) * p00, (1.0 - k0) * p01],
                [p10 - k1 * p00, p11 - k1 * p01],
            ],
        }
    }

    /// One predict/update cycle
    pub fn step(self, measurement: f64) -> Self {
        self.predict().update(measurement)
    }
}

/// Kalman-style level/trend smoother with fixed noise constants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecursiveFilter;

impl RecursiveFilter {
    /// Run the filter and return every intermediate state
    pub fn states(&self, values: &[f64]) -> Vec<FilterState> {
        let Some(&first) = values.first() else {
            return Vec::new();
        };
        values
            .iter()
            .scan(FilterState::initial(first), |state, &z| {
                *state = state.step(z);
                Some(*state)
            })
            .collect()
    }
}

impl Smoother for RecursiveFilter {
    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>> {
        Ok(self.states(values).into_iter().map(|s| s.level).collect())
    }

    fn name(&self) -> &str {
        "recursive_filter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_series_is_fixed_point() {
        let out = RecursiveFilter.smooth(&[4.0; 10]).unwrap();
        assert_eq!(out, vec![4.0; 10]);
    }

    #[test]
    fn test_first_step() {
        let states = RecursiveFilter.states(&[2.0, 6.0]);
        assert_eq!(states.len(), 2);
        // Prediction from the initial state has zero innovation
        assert_eq!(states[0].level, 2.0);
        assert_eq!(states[0].trend, 0.0);

        // P after first predict: [[200.1, 100], [100, 100.1]]
        let p00 = 200.1 * 5.0 / 205.1;
        assert!((states[0].covariance[0][0] - p00).abs() < 1e-9);

        // Second sample pulls level up and starts a positive trend
        assert!(states[1].level > 2.0 && states[1].level < 6.0);
        assert!(states[1].trend > 0.0);
    }

    #[test]
    fn test_tracks_linear_ramp() {
        let values: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();
        let states = RecursiveFilter.states(&values);
        let last = states.last().unwrap();
        assert!((last.level - 99.5).abs() < 0.5);
        assert!((last.trend - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_empty_series() {
        assert!(RecursiveFilter.smooth(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let values = vec![1.0, 5.0, 2.0];
        let copy = values.clone();
        let _ = RecursiveFilter.smooth(&values).unwrap();
        assert_eq!(values, copy);
    }
}
