//! Centered moving average.
//!
//! Positions where the full window does not fit are left undefined rather
//! than padded, so coverage narrows by half a window at each end.

use super::Smoother;
use crate::error::{PollenError, Result};

/// Centered moving average of a fixed width
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(PollenError::invalid_parameter(
                "window",
                "moving average window must be at least 1",
            ));
        }
        Ok(Self { window })
    }
}

impl Smoother for MovingAverage {
    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>> {
        let n = values.len();
        let w = self.window;
        // Even widths lean one sample towards the past
        let before = w / 2;
        let after = w - 1 - before;

        let out = (0..n)
            .map(|i| {
                if i < before || i + after >= n {
                    return f64::NAN;
                }
                let window = &values[i - before..=i + after];
                window.iter().sum::<f64>() / w as f64
            })
            .collect();
        Ok(out)
    }

    fn name(&self) -> &str {
        "moving_average"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_one_is_identity() {
        let values = vec![3.0, 1.5, 7.25, 0.0, 2.0];
        let out = MovingAverage::new(1).unwrap().smooth(&values).unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn test_centered_window_with_undefined_edges() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let out = MovingAverage::new(5).unwrap().smooth(&values).unwrap();
        assert_eq!(out.len(), values.len());
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 3.0);
        assert_eq!(out[3], 4.0);
        assert_eq!(out[4], 5.0);
        assert!(out[5].is_nan());
        assert!(out[6].is_nan());
    }

    #[test]
    fn test_even_window() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let out = MovingAverage::new(2).unwrap().smooth(&values).unwrap();
        assert!(out[0].is_nan());
        assert_eq!(out[1], 1.5);
        assert_eq!(out[3], 3.5);
    }

    #[test]
    fn test_window_longer_than_series() {
        let out = MovingAverage::new(5).unwrap().smooth(&[1.0, 2.0]).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(MovingAverage::new(0).is_err());
    }
}
