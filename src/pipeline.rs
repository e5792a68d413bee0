//! End-to-end run: load, renumber, write, report.

use std::io::Write;

use tracing::info;

use crate::config::Config;
use crate::error::{RenumberError, Result};
use crate::loader::load_rows;
use crate::renumber::renumber;
use crate::report::{Summary, write_report};
use crate::table::Table;
use crate::writer::write_file;

/// Run every step once with `config`, printing the summary to `out`.
///
/// Stops at the first failure. The output file is written before the
/// summary is printed, so a report failure leaves a complete file.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Summary> {
    let input = Table::from_rows(load_rows(&config.input_path)?)?;
    let output = renumber(&input, config.min_fields);
    write_file(&config.output_path, &output)?;

    let summary = Summary::new(&input, &output);
    info!(
        input = summary.input_rows,
        retained = summary.retained_rows,
        dropped = summary.dropped_rows(),
        "renumbering complete"
    );

    write_report(out, &summary, &output, config.preview_rows)
        .map_err(RenumberError::Report)?;
    Ok(summary)
}
