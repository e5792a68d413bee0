//! In-memory table: a header row followed by data rows.

use crate::error::{RenumberError, Result};
use crate::row::Row;

/// A fully loaded CSV table.
///
/// The header is kept apart from the data rows so it can be passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Row,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Split a raw row sequence into header and data rows.
    ///
    /// Fails with [`RenumberError::EmptyInput`] when there is no header.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let mut rows = rows.into_iter();
        let header = rows.next().ok_or(RenumberError::EmptyInput)?;
        Ok(Self {
            header,
            rows: rows.collect(),
        })
    }

    pub fn header(&self) -> &Row {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn data_len(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows including the header.
    pub fn total_len(&self) -> usize {
        self.rows.len() + 1
    }

    /// All rows, header first.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }

    /// The header and up to `n` data rows, paired with their table position.
    pub fn head(&self, n: usize) -> impl Iterator<Item = (usize, &Row)> {
        self.iter().enumerate().take(n + 1)
    }

    /// The last `n` rows of the table (header included when the table is
    /// short), paired with their table position.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = (usize, &Row)> {
        let start = self.total_len().saturating_sub(n);
        self.iter().enumerate().skip(start)
    }
}
