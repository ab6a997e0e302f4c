//! pollenfield - gridded pollen-index fields from city observations
//!
//! Loads observations, smooths each location's series, interpolates every
//! date onto the grid and writes the masked frames as JSON lines.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use tracing::{info, warn};

use pollenfield::config::OutputMode;
use pollenfield::data_loader::{filter_date_range, load_boundary, load_observations, load_registry};
use pollenfield::interpolation::interpolate;
use pollenfield::mask::RegionMask;
use pollenfield::sequencer::{accumulate_totals, sequence, Frame, FrameRecord};
use pollenfield::smoothing::smooth_table;
use pollenfield::{
    init_tracing, log_error, log_input_stats, log_operation_end, log_operation_start,
    log_timed_operation, Config, LocationRegistry, PollenError,
};

fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_tracing(&config.log_level);

    info!("Starting pollenfield v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration before touching any input
    config.validate().map_err(|e| {
        log_error(&e, "configuration");
        e
    })?;

    let start = Instant::now();
    log_operation_start("pipeline", Some(config.interpolation.method.as_str()));
    let result = run(&config);
    log_operation_end("pipeline", start, result.is_ok());
    result
}

fn run(config: &Config) -> Result<()> {
    let grid = config.grid.build()?;
    let interpolator = config.interpolation.interpolator()?;
    let smoother = config.smoothing.smoother()?;
    let (start_date, end_date) = config.data.date_range()?;

    let observations_path = config
        .data
        .observations
        .as_deref()
        .context("No observations file given")?;
    let observations = load_observations(observations_path).with_context(|| {
        format!(
            "Failed to load observations from {}",
            observations_path.display()
        )
    })?;
    let observations = filter_date_range(&observations, start_date, end_date);

    let registry = match &config.data.registry {
        Some(path) => load_registry(path)
            .with_context(|| format!("Failed to load registry from {}", path.display()))?,
        None => LocationRegistry::builtin()?,
    };

    let region = match &config.data.boundary {
        Some(path) => {
            let boundary = load_boundary(path)
                .with_context(|| format!("Failed to load boundary from {}", path.display()))?;
            let region = RegionMask::new(&grid, &boundary)?;
            info!(
                inside = region.inside_count(),
                cells = grid.len(),
                "Region mask ready"
            );
            Some(region)
        }
        None => None,
    };

    let locations: std::collections::HashSet<&str> =
        observations.iter().map(|o| o.location.as_str()).collect();
    let dates: std::collections::HashSet<_> = observations.iter().map(|o| o.date).collect();
    log_input_stats(
        observations.len(),
        locations.len(),
        dates.len(),
        registry.version(),
    );

    let table = match &smoother {
        Some(smoother) => log_timed_operation("smoothing", || {
            smooth_table(&observations, smoother.as_ref())
        })?,
        None => observations,
    };

    let mut writer: Box<dyn Write> = match &config.data.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match config.data.mode {
        OutputMode::Frames => {
            let (mut written, mut skipped) = (0usize, 0usize);
            let frames = sequence(
                &table,
                &registry,
                &grid,
                interpolator.as_ref(),
                region.as_ref(),
            );
            for frame in frames {
                match frame {
                    Ok(frame) => {
                        write_frame(&mut writer, &frame)?;
                        written += 1;
                    }
                    Err(
                        e @ (PollenError::InsufficientData { .. }
                        | PollenError::DegenerateGeometry { .. }),
                    ) => {
                        log_error(&e, "frame skipped");
                        skipped += 1;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            if skipped > 0 {
                warn!(skipped = skipped, "Some dates produced no frame");
            }
            info!(frames = written, "Frames written");
        }
        OutputMode::Total => {
            let date = table
                .iter()
                .map(|o| o.date)
                .max()
                .context("No observations in the selected date range")?;
            let points = accumulate_totals(&table, &registry);
            let locations = points.len();
            let field = log_timed_operation("interpolate_totals", || {
                interpolate(&points, &grid, interpolator.as_ref())
            })?;
            let field = match &region {
                Some(region) => region.apply(&field)?,
                None => field,
            };
            write_frame(&mut writer, &Frame { date, points, field })?;
            info!(locations = locations, "Total frame written");
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_frame(writer: &mut dyn Write, frame: &Frame) -> Result<()> {
    serde_json::to_writer(&mut *writer, &FrameRecord::from(frame))?;
    writeln!(writer)?;
    Ok(())
}
