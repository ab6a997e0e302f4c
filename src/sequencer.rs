//! Frame sequencing: smoothed observations to a date-ordered series of
//! masked fields.
//!
//! Grouping by date is done up front; the fields themselves are computed one
//! at a time as the [`Frames`] iterator is advanced, so at most one field is
//! alive per consumer step and a consumer may stop early without paying for
//! the remaining dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};
use crate::interpolation::{interpolate, Interpolator, SamplePoint};
use crate::mask::RegionMask;
use crate::registry::LocationRegistry;
use crate::series::Observation;

/// Usable sample points for one date
#[derive(Debug, Clone, PartialEq)]
pub struct DateSamples {
    pub date: NaiveDate,
    pub points: Vec<SamplePoint>,
}

/// One date's samples and its (masked) field
#[derive(Debug, Clone)]
pub struct Frame {
    pub date: NaiveDate,
    pub points: Vec<SamplePoint>,
    pub field: Field,
}

/// Serializable form of a [`Frame`], undefined cells as `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub date: String,
    /// `[lon, lat, value]` per sample
    pub points: Vec<[f64; 3]>,
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<Vec<Option<f64>>>,
}

impl From<&Frame> for FrameRecord {
    fn from(frame: &Frame) -> Self {
        let (rows, cols) = frame.field.dim();
        Self {
            date: frame.date.format("%Y-%m-%d").to_string(),
            points: frame
                .points
                .iter()
                .map(|p| [p.lon, p.lat, p.value])
                .collect(),
            rows,
            cols,
            values: frame
                .field
                .rows()
                .into_iter()
                .map(|row| {
                    row.iter()
                        .map(|&v| if v.is_nan() { None } else { Some(v) })
                        .collect()
                })
                .collect(),
        }
    }
}

/// Group observations by date, ascending, resolving locations to points.
///
/// Observations whose location is missing from `registry`, or whose value is
/// not finite, are dropped. Within a date the first observation for a
/// location wins and points keep their input order. Dates whose observations
/// were all dropped still get an (empty) group.
pub fn group_by_date(table: &[Observation], registry: &LocationRegistry) -> Vec<DateSamples> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Observation>> = BTreeMap::new();
    for obs in table {
        by_date.entry(obs.date).or_default().push(obs);
    }

    by_date
        .into_iter()
        .map(|(date, observations)| {
            let mut seen: HashSet<&str> = HashSet::new();
            let mut unknown = 0usize;
            let mut points = Vec::with_capacity(observations.len());

            for obs in observations {
                if !seen.insert(obs.location.as_str()) {
                    continue;
                }
                let Some(coord) = registry.lookup(&obs.location) else {
                    debug!(date = %date, location = %obs.location, "Dropping unknown location");
                    unknown += 1;
                    continue;
                };
                if !obs.value.is_finite() {
                    debug!(date = %date, location = %obs.location, "Dropping undefined value");
                    continue;
                }
                points.push(SamplePoint::new(coord.longitude, coord.latitude, obs.value));
            }

            if unknown > 0 {
                warn!(
                    date = %date,
                    dropped = unknown,
                    registry = registry.version(),
                    "Observations without coordinates were dropped"
                );
            }
            DateSamples { date, points }
        })
        .collect()
}

/// Lazy, date-ordered sequence of frames
pub struct Frames<'a> {
    groups: std::vec::IntoIter<DateSamples>,
    grid: &'a Grid,
    interpolator: &'a dyn Interpolator,
    mask: Option<&'a RegionMask>,
}

impl<'a> Frames<'a> {
    fn render(&self, samples: DateSamples) -> Result<Frame> {
        if samples.points.is_empty() {
            return Err(PollenError::InsufficientData {
                message: format!("no usable sample points for {}", samples.date),
            });
        }

        let field = interpolate(&samples.points, self.grid, self.interpolator)?;
        let field = match self.mask {
            Some(mask) => mask.apply(&field)?,
            None => field,
        };
        debug!(
            date = %samples.date,
            points = samples.points.len(),
            method = self.interpolator.name(),
            "Rendered frame"
        );

        Ok(Frame {
            date: samples.date,
            points: samples.points,
            field,
        })
    }
}

impl Iterator for Frames<'_> {
    /// A failed date yields an error; later dates are still available
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        let samples = self.groups.next()?;
        Some(self.render(samples))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.groups.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}

/// Sequence smoothed observations into frames, one per distinct date.
pub fn sequence<'a>(
    table: &[Observation],
    registry: &LocationRegistry,
    grid: &'a Grid,
    interpolator: &'a dyn Interpolator,
    mask: Option<&'a RegionMask>,
) -> Frames<'a> {
    Frames {
        groups: group_by_date(table, registry).into_iter(),
        grid,
        interpolator,
        mask,
    }
}

/// Sum each location's values over the whole table into one sample per
/// location, ordered by location key.
///
/// Unknown locations and undefined values are skipped.
pub fn accumulate_totals(table: &[Observation], registry: &LocationRegistry) -> Vec<SamplePoint> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for obs in table.iter().filter(|o| o.value.is_finite()) {
        *totals.entry(obs.location.as_str()).or_default() += obs.value;
    }

    totals
        .into_iter()
        .filter_map(|(location, total)| {
            registry
                .lookup(location)
                .map(|c| SamplePoint::new(c.longitude, c.latitude, total))
        })
        .collect()
}
