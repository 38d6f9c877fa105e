//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::types::DispatchResult;

/// Column header for CSV plan export.
const HEADER: &str = "name,type,marginal_cost,p";

/// Exports a production plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per plant in merit order.
/// Power is rounded to one decimal, matching the JSON plan.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(result: &DispatchResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(result, buf)
}

/// Writes a production plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(result: &DispatchResult, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (commitment, allocation) in result.commitments.iter().zip(result.plan()) {
        wtr.write_record([
            allocation.name,
            commitment.kind.to_string(),
            format!("{:.2}", commitment.marginal_cost),
            format!("{:.1}", allocation.p),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
