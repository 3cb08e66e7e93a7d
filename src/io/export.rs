//! CSV export for circuit tick results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::TickResult;

/// Schema v1 column header for CSV telemetry export.
const HEADER: &str = "tick,generation,discharge_capacity,supply,demand,consumed,\
                      from_generation,from_batteries,charged,\
                      powered,unpowered,stored_total";

/// Exports tick results to a CSV file at the given path.
///
/// Writes a header row followed by one data row per tick. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(results: &[TickResult], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, buf)
}

/// Writes tick results as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(results: &[TickResult], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for r in results {
        wtr.write_record(&[
            r.tick.to_string(),
            format!("{:.4}", r.generation),
            format!("{:.4}", r.discharge_capacity),
            format!("{:.4}", r.supply),
            format!("{:.4}", r.demand),
            format!("{:.4}", r.consumed),
            format!("{:.4}", r.from_generation),
            format!("{:.4}", r.from_batteries),
            format!("{:.4}", r.charged),
            r.powered_consumers.to_string(),
            r.unpowered_consumers.to_string(),
            format!("{:.4}", r.stored_total),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
