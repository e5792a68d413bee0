//! CSV loading.
//!
//! The whole file is read into memory. Rows keep whatever field count
//! they have in the file; filtering happens later in the renumberer.
//!
//! Two details of the raw text survive loading: a leading UTF-8 byte
//! order mark stays at the start of the first field, and a blank line
//! becomes a row with no fields.

use std::fs;
use std::io::Read;
use std::iter::Peekable;
use std::path::Path;

use tracing::info;

use crate::error::{RenumberError, Result};
use crate::row::Row;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Byte offsets of blank lines that sit outside quoted fields.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A quote opens a quoted
/// field only at the start of a field, and `""` inside one is an escape.
fn blank_line_offsets(bytes: &[u8]) -> Vec<u64> {
    let mut offsets = Vec::new();
    let mut in_quotes = false;
    let mut line_start = true;
    let mut field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
        } else {
            match b {
                b'\r' | b'\n' => {
                    if line_start {
                        offsets.push(i as u64);
                    }
                    if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_start = true;
                    field_start = true;
                }
                b'"' if field_start => {
                    in_quotes = true;
                    line_start = false;
                    field_start = false;
                }
                b',' => {
                    line_start = false;
                    field_start = true;
                }
                _ => {
                    line_start = false;
                    field_start = false;
                }
            }
        }
        i += 1;
    }
    offsets
}

/// Push an empty row for every blank line that starts before `end`.
fn drain_blank_lines(
    rows: &mut Vec<Row>,
    blanks: &mut Peekable<impl Iterator<Item = u64>>,
    end: u64,
) {
    while blanks.next_if(|&offset| offset < end).is_some() {
        rows.push(Row::default());
    }
}

/// Put the byte order mark back at the front of the first field.
fn restore_bom(rows: &mut Vec<Row>) {
    let first = if rows.is_empty() {
        Row::default()
    } else {
        rows.remove(0)
    };
    let mut fields = first.into_fields();
    match fields.first_mut() {
        Some(field) => field.insert(0, '\u{feff}'),
        None => fields.push('\u{feff}'.to_string()),
    }
    rows.insert(0, Row::new(fields));
}

/// Parse every row of in-memory CSV text, header included.
///
/// Fields must be valid UTF-8; a row that is not fails the whole parse.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Row>> {
    let (has_bom, body) = match bytes.strip_prefix(BOM) {
        Some(rest) => (true, rest),
        None => (false, bytes),
    };

    let mut blanks = blank_line_offsets(body).into_iter().peekable();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record)? {
        // Blank lines before this record ended came before it.
        drain_blank_lines(&mut rows, &mut blanks, rdr.position().byte());
        rows.push(Row::from(&record));
    }
    rows.extend(blanks.map(|_| Row::default()));

    if has_bom {
        restore_bom(&mut rows);
    }
    Ok(rows)
}

/// Parse every row of a CSV stream, header included.
pub fn read_rows<R: Read>(mut reader: R) -> Result<Vec<Row>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(csv::Error::from)?;
    parse_rows(&bytes)
}

/// Read every row of the CSV file at `path`, header included.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| RenumberError::io(path, e))?;
    let rows = parse_rows(&bytes).map_err(|e| e.at_path(path))?;
    info!(path = %path.display(), rows = rows.len(), "loaded csv");
    Ok(rows)
}
