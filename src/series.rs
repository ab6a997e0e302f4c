//! Observation records and per-location time series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PollenError, Result};

/// One daily measurement for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub location: String,
    /// Pollen index; non-negative for raw input, `NaN` where smoothing left
    /// the value undefined
    #[serde(rename = "index")]
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, location: impl Into<String>, value: f64) -> Self {
        Self {
            date,
            location: location.into(),
            value,
        }
    }
}

/// Date-ordered values for a single location.
///
/// Dates are strictly increasing. Gaps between dates are kept as they are;
/// no missing days are filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Build a series, rejecting unordered or repeated dates
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        if let Some(pair) = points.windows(2).find(|w| w[0].0 >= w[1].0) {
            return Err(PollenError::invalid_parameter(
                "series",
                format!(
                    "dates must be strictly increasing, found {} followed by {}",
                    pair[0].0, pair[1].0
                ),
            ));
        }
        let (dates, values) = points.into_iter().unzip();
        Ok(Self { dates, values })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| PollenError::Parse {
        message: format!("invalid date '{}': {}", s, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_series_accepts_gaps() {
        let series = TimeSeries::new(vec![
            (d("2024-03-01"), 1.0),
            (d("2024-03-04"), 2.0),
            (d("2024-03-05"), 3.0),
        ])
        .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.dates(),
            &[d("2024-03-01"), d("2024-03-04"), d("2024-03-05")]
        );
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_series_rejects_unordered_dates() {
        let result = TimeSeries::new(vec![(d("2024-03-02"), 1.0), (d("2024-03-01"), 2.0)]);
        assert!(matches!(result, Err(PollenError::InvalidParameter { .. })));

        let result = TimeSeries::new(vec![(d("2024-03-01"), 1.0), (d("2024-03-01"), 2.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(d("2024-01-02").to_string(), "2024-01-02");
        assert!(parse_date("01/02/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_canonical_form_orders_like_dates() {
        let a = d("2023-12-31");
        let b = d("2024-01-01");
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }
}
