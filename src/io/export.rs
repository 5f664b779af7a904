//! CSV export for per-tick power telemetry.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Column header for CSV telemetry export.
const HEADER: &str = "run,seed,tick,power_kw";

/// Per-tick power series of one completed run, tagged for export.
#[derive(Debug, Clone)]
pub struct RunSeries {
    /// Seed the run was constructed with.
    pub seed: u64,
    /// Site power at each tick in kW, one entry per tick.
    pub power_by_tick: Vec<f64>,
}

/// Exports the power series of all runs to a CSV file at the given path.
///
/// Writes a header row followed by one data row per (run, tick).
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(runs: &[RunSeries], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(runs, buf)
}

/// Writes the power series of all runs as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(runs: &[RunSeries], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (run_idx, run) in runs.iter().enumerate() {
        for (tick, power_kw) in run.power_by_tick.iter().enumerate() {
            wtr.write_record(&[
                run_idx.to_string(),
                run.seed.to_string(),
                tick.to_string(),
                format!("{power_kw:.2}"),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
