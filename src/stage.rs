//! Row stage trait and implementations.
//!
//! Each `RowStage` takes one data row and either passes a (possibly
//! rewritten) row on or drops it. Stages may keep state across rows,
//! as `AssignIdStage` does with its counter.

use crate::row::Row;

/// A stage that processes data rows one at a time.
pub trait RowStage {
    /// Process a single row, returning the row to pass on, or `None` to
    /// drop it.
    fn process(&mut self, row: Row) -> Option<Row>;

    /// The display name of this stage.
    fn name(&self) -> &str;
}

/// MINFIELDS n - keeps rows with at least `n` fields.
pub struct MinFieldsStage {
    min: usize,
}

impl MinFieldsStage {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl RowStage for MinFieldsStage {
    fn process(&mut self, row: Row) -> Option<Row> {
        if row.len() >= self.min { Some(row) } else { None }
    }

    fn name(&self) -> &str {
        "MINFIELDS"
    }
}

/// ASSIGNID - overwrites field 0 with a running 1-based counter.
///
/// The counter only advances for rows that reach this stage, so rows
/// dropped upstream leave no gap.
pub struct AssignIdStage {
    next: usize,
}

impl AssignIdStage {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for AssignIdStage {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStage for AssignIdStage {
    fn process(&mut self, row: Row) -> Option<Row> {
        let id = self.next;
        self.next += 1;
        Some(row.with_identifier(id))
    }

    fn name(&self) -> &str {
        "ASSIGNID"
    }
}

/// The renumbering chain: drop short rows, then assign identifiers.
pub fn renumber_stages(min_fields: usize) -> Vec<Box<dyn RowStage>> {
    vec![
        Box::new(MinFieldsStage::new(min_fields)),
        Box::new(AssignIdStage::new()),
    ]
}
