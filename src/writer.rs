//! CSV writing.
//!
//! Fields are quoted only when they need to be. Rows are separated by the
//! platform's native line ending. A row with no fields is written as an
//! empty line.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Terminator;
use tracing::info;

use crate::error::{RenumberError, Result};
use crate::table::Table;

#[cfg(windows)]
const LINE_TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(windows)]
const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: Terminator = Terminator::Any(b'\n');
#[cfg(not(windows))]
const LINE_ENDING: &[u8] = b"\n";

/// Serialize `table`, header first, to any writer.
pub fn write_table<W: Write>(mut writer: W, table: &Table) -> Result<()> {
    let mut rows = table.iter().peekable();
    while rows.peek().is_some() {
        {
            let mut wtr = csv::WriterBuilder::new()
                .flexible(true)
                .terminator(LINE_TERMINATOR)
                .from_writer(&mut writer);
            while let Some(row) = rows.next_if(|row| !row.is_empty()) {
                wtr.write_record(row.fields())?;
            }
            wtr.flush().map_err(csv::Error::from)?;
        }

        // The csv writer emits `""` for a record with no fields.
        while rows.next_if(|row| row.is_empty()).is_some() {
            writer.write_all(LINE_ENDING).map_err(csv::Error::from)?;
        }
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file.
///
/// The parent directory must already exist. A failure part way through
/// can leave a truncated file behind.
pub fn write_file(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| RenumberError::io(path, e))?;
    write_table(file, table).map_err(|e| e.at_path(path))?;
    info!(path = %path.display(), rows = table.data_len(), "wrote csv");
    Ok(())
}
