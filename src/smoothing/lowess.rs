//! Locally weighted scatterplot smoothing.
//!
//! The independent variable is the sample's position in the series
//! (0, 1, 2, ...), not its calendar date, so uneven date spacing does not
//! affect the weights.
//!
//! Each point gets a local linear fit over its `floor(frac * n)` nearest
//! neighbours with tricube distance weights, followed by bisquare robustness
//! reweighting passes (Cleveland, 1979).

use super::Smoother;
use crate::error::{PollenError, Result};

/// Number of robustness reweighting passes after the initial fit
const ROBUSTNESS_ITERATIONS: usize = 3;

/// Local linear regression smoother
#[derive(Debug, Clone, PartialEq)]
pub struct Lowess {
    frac: f64,
}

impl Lowess {
    /// `frac` is the share of the series used as each point's neighbourhood, in `(0, 1]`
    pub fn new(frac: f64) -> Result<Self> {
        if !(frac > 0.0 && frac <= 1.0) {
            return Err(PollenError::invalid_parameter(
                "frac",
                format!("LOWESS fraction must be in (0, 1], got {}", frac),
            ));
        }
        Ok(Self { frac })
    }

    fn neighbourhood_size(&self, n: usize) -> usize {
        ((self.frac * n as f64 + 1e-10).floor() as usize).clamp(2.min(n), n)
    }
}

#[inline]
fn tricube(u: f64) -> f64 {
    if u >= 1.0 {
        0.0
    } else {
        let t = 1.0 - u * u * u;
        t * t * t
    }
}

#[inline]
fn bisquare(u: f64) -> f64 {
    if u.abs() >= 1.0 {
        0.0
    } else {
        let t = 1.0 - u * u;
        t * t
    }
}

/// One pass of local linear fits with the given robustness weights
fn fit_pass(y: &[f64], k: usize, robustness: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut fitted = Vec::with_capacity(n);
    let mut lo = 0usize;

    for i in 0..n {
        let xi = i as f64;
        // Slide the k-wide window while its far end is closer than its near end
        while lo + k < n && xi - lo as f64 > (lo + k) as f64 - xi {
            lo += 1;
        }
        let hi = lo + k - 1;
        let radius = (xi - lo as f64).max(hi as f64 - xi);
        let weight = |j: usize| {
            let distance = if radius > 0.0 {
                tricube((j as f64 - xi).abs() / radius)
            } else {
                1.0
            };
            distance * robustness[j]
        };

        let mut sw = 0.0;
        let mut sx = 0.0;
        let mut sy = 0.0;
        for j in lo..=hi {
            let xj = j as f64;
            let w = weight(j);
            sw += w;
            sx += w * xj;
            sy += w * y[j];
        }

        if sw <= 0.0 {
            fitted.push(y[i]);
            continue;
        }

        let x_mean = sx / sw;
        let y_mean = sy / sw;
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for j in lo..=hi {
            let xj = j as f64;
            let w = weight(j);
            sxx += w * (xj - x_mean) * (xj - x_mean);
            sxy += w * (xj - x_mean) * (y[j] - y_mean);
        }

        let value = if sxx > 1e-12 * radius.max(1.0).powi(2) {
            y_mean + sxy / sxx * (xi - x_mean)
        } else {
            y_mean
        };
        fitted.push(value);
    }

    fitted
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        0.5 * (values[n / 2 - 1] + values[n / 2])
    }
}

impl Smoother for Lowess {
    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>> {
        let n = values.len();
        if n < 2 {
            return Ok(values.to_vec());
        }

        let k = self.neighbourhood_size(n);
        let magnitude = values.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
        let mut robustness = vec![1.0; n];
        let mut fitted = fit_pass(values, k, &robustness);

        for _ in 0..ROBUSTNESS_ITERATIONS {
            let residuals: Vec<f64> = values.iter().zip(&fitted).map(|(y, f)| y - f).collect();
            let mut abs_residuals: Vec<f64> = residuals.iter().map(|r| r.abs()).collect();
            let scale = median(&mut abs_residuals);
            if scale <= 1e-12 * magnitude {
                break;
            }
            for (w, r) in robustness.iter_mut().zip(&residuals) {
                *w = bisquare(r / (6.0 * scale));
            }
            fitted = fit_pass(values, k, &robustness);
        }

        Ok(fitted)
    }

    fn name(&self) -> &str {
        "lowess"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproduces_line() {
        let values: Vec<f64> = (0..30).map(|i| 2.0 + 0.5 * i as f64).collect();
        let out = Lowess::new(0.3).unwrap().smooth(&values).unwrap();
        for (o, v) in out.iter().zip(&values) {
            assert!((o - v).abs() < 1e-9, "{} vs {}", o, v);
        }
    }

    #[test]
    fn test_damps_outlier() {
        let mut values: Vec<f64> = (0..40).map(|i| if i % 2 == 0 { 2.9 } else { 3.1 }).collect();
        values[20] = 12.0;
        let out = Lowess::new(0.25).unwrap().smooth(&values).unwrap();
        assert_eq!(out.len(), 40);
        assert!(out[20] < 4.0, "outlier survived: {}", out[20]);
        assert!((out[5] - 3.0).abs() < 0.2);
    }

    const SERIES: [f64; 8] = [1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 9.0, 7.0];

    #[test]
    fn test_first_pass_matches_tricube_fit() {
        // k = 4; at i = 2 the window is 0..=3 with radius 2, so the weights
        // are 0, 343/512, 1, 343/512 and the fit is (1024 + 2744) / 1198
        let expected = [
            342046583.0 / 251631245.0,
            2565.0 / 1198.0,
            1884.0 / 599.0,
            2309.0 / 599.0,
            5821.0 / 1198.0,
            7531.0 / 1198.0,
            9067.0 / 1198.0,
            382422189.0 / 50326249.0,
        ];
        let out = fit_pass(&SERIES, 4, &[1.0; 8]);
        for (o, e) in out.iter().zip(expected) {
            assert!((o - e).abs() < 1e-12, "{} vs {}", o, e);
        }
    }

    #[test]
    fn test_robust_fit_reference() {
        let expected = [
            1.3388786247956928,
            2.1413719219464618,
            3.156602076722014,
            3.8434184535694245,
            4.859195243706189,
            6.271861286502206,
            7.465521747333568,
            7.550211766480562,
        ];
        let out = Lowess::new(0.5).unwrap().smooth(&SERIES).unwrap();
        assert_eq!(out.len(), expected.len());
        for (o, e) in out.iter().zip(expected) {
            assert!((o - e).abs() < 1e-9, "{} vs {}", o, e);
        }
    }

    #[test]
    fn test_deterministic() {
        let values: Vec<f64> = (0..50).map(|i| ((i * 7) % 11) as f64).collect();
        let lowess = Lowess::new(0.1).unwrap();
        let a = lowess.smooth(&values).unwrap();
        let b = lowess.smooth(&values).unwrap();
        assert_eq!(
            a.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            b.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_short_series() {
        let lowess = Lowess::new(0.1).unwrap();
        assert!(lowess.smooth(&[]).unwrap().is_empty());
        assert_eq!(lowess.smooth(&[4.0]).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_invalid_fraction() {
        assert!(Lowess::new(0.0).is_err());
        assert!(Lowess::new(1.5).is_err());
        assert!(Lowess::new(f64::NAN).is_err());
    }
}
