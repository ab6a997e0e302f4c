//! Savitzky-Golay smoothing.
//!
//! Each interior sample is replaced by the value at the window centre of a
//! least-squares polynomial fitted over the surrounding window. The first and
//! last half-windows are taken from a single polynomial fitted to the first
//! (respectively last) full window, so the output keeps the input length.

use super::Smoother;
use crate::error::{PollenError, Result};
use crate::linalg::{polyfit, polyval};

/// Polynomial least-squares smoother over a sliding window
#[derive(Debug, Clone, PartialEq)]
pub struct SavitzkyGolay {
    window: usize,
    polyorder: usize,
    coefficients: Vec<f64>,
}

impl SavitzkyGolay {
    /// `window` must be odd and strictly greater than `polyorder`
    pub fn new(window: usize, polyorder: usize) -> Result<Self> {
        if window % 2 == 0 {
            return Err(PollenError::invalid_parameter(
                "window",
                format!("Savitzky-Golay window must be odd, got {}", window),
            ));
        }
        if window <= polyorder {
            return Err(PollenError::invalid_parameter(
                "polyorder",
                format!(
                    "polyorder ({}) must be less than window ({})",
                    polyorder, window
                ),
            ));
        }

        let coefficients = convolution_coefficients(window, polyorder)?;
        Ok(Self {
            window,
            polyorder,
            coefficients,
        })
    }

    /// Weights applied to a window to get its smoothed centre value
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Fill `out[range]` from a polynomial fitted to `values[start..start + window]`
    fn fit_edge(
        &self,
        values: &[f64],
        start: usize,
        range: std::ops::Range<usize>,
        out: &mut [f64],
    ) -> Result<()> {
        let half = (self.window / 2) as f64;
        let xs: Vec<f64> = (0..self.window).map(|k| k as f64 - half).collect();
        let coeffs = polyfit(&xs, &values[start..start + self.window], self.polyorder)
            .ok_or_else(|| PollenError::invalid_parameter("polyorder", "edge fit is singular"))?;
        for i in range {
            out[i] = polyval(&coeffs, (i - start) as f64 - half);
        }
        Ok(())
    }
}

/// Centre weights: the smoothed value at offset 0 of a fit to a unit impulse
/// at each window position.
fn convolution_coefficients(window: usize, polyorder: usize) -> Result<Vec<f64>> {
    let half = (window / 2) as f64;
    let xs: Vec<f64> = (0..window).map(|k| k as f64 - half).collect();
    (0..window)
        .map(|j| {
            let mut impulse = vec![0.0; window];
            impulse[j] = 1.0;
            polyfit(&xs, &impulse, polyorder)
                .map(|c| c[0])
                .ok_or_else(|| PollenError::invalid_parameter("polyorder", "fit is singular"))
        })
        .collect()
}

impl Smoother for SavitzkyGolay {
    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>> {
        let n = values.len();
        if self.window > n {
            return Err(PollenError::invalid_parameter(
                "window",
                format!(
                    "Savitzky-Golay window ({}) exceeds series length ({})",
                    self.window, n
                ),
            ));
        }

        let half = self.window / 2;
        let mut out = vec![0.0; n];

        for i in half..n - half {
            out[i] = self
                .coefficients
                .iter()
                .zip(&values[i - half..=i + half])
                .map(|(c, v)| c * v)
                .sum();
        }

        self.fit_edge(values, 0, 0..half, &mut out)?;
        self.fit_edge(values, n - self.window, n - half..n, &mut out)?;

        Ok(out)
    }

    fn name(&self) -> &str {
        "savitzky_golay"
    }
}
