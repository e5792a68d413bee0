//! Identifier renumbering.
//!
//! Pushes each data row through the stage chain in input order. The
//! header never enters the chain and is copied to the new table as is.

use tracing::debug;

use crate::row::Row;
use crate::stage::{RowStage, renumber_stages};
use crate::table::Table;

/// Push one row through every stage, stopping at the first stage that
/// drops it.
fn push_through_stages(row: Row, stages: &mut [Box<dyn RowStage>]) -> Option<Row> {
    let mut current = row;
    for stage in stages.iter_mut() {
        current = stage.process(current)?;
    }
    Some(current)
}

/// Run rows through a stage chain, keeping the rows that survive.
pub fn execute(
    rows: impl IntoIterator<Item = Row>,
    stages: &mut [Box<dyn RowStage>],
) -> Vec<Row> {
    rows.into_iter()
        .filter_map(|row| push_through_stages(row, stages))
        .collect()
}

/// Build a new table whose data rows are the rows of `table` with at
/// least `min_fields` fields, identifiers renumbered from 1.
///
/// ```
/// use school_renumber::{Row, Table, renumber};
///
/// let table = Table::new(
///     Row::from_fields(["id", "name", "a", "b", "c", "d", "e"]),
///     vec![
///         Row::from_fields(["5", "Oak Elementary", "A", "B", "C", "D", "E"]),
///         Row::from_fields(["x", "y"]),
///         Row::from_fields(["9", "Pine High", "A", "B", "C", "D", "E"]),
///     ],
/// );
///
/// let fixed = renumber(&table, 7);
/// assert_eq!(fixed.data_len(), 2);
/// assert_eq!(fixed.rows()[0].identifier(), Some("1"));
/// assert_eq!(fixed.rows()[1].fields()[1], "Pine High");
/// ```
pub fn renumber(table: &Table, min_fields: usize) -> Table {
    let mut stages = renumber_stages(min_fields);
    let names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
    debug!(stages = ?names, "renumbering");

    let rows = execute(table.rows().iter().cloned(), &mut stages);
    debug!(input = table.data_len(), retained = rows.len(), "renumbered");
    Table::new(table.header().clone(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_FIELDS;

    fn school(id: &str, name: &str) -> Row {
        Row::from_fields([id, name, "A", "B", "C", "D", "E"])
    }

    fn header() -> Row {
        Row::from_fields(["id", "name", "c2", "c3", "c4", "c5", "c6"])
    }

    #[test]
    fn test_drops_short_rows_and_renumbers() {
        let table = Table::new(
            header(),
            vec![
                school("5", "Oak Elementary"),
                Row::from_fields(["x", "y"]),
                school("9", "Pine High"),
            ],
        );
        let fixed = renumber(&table, MIN_FIELDS);
        assert_eq!(fixed.header(), table.header());
        assert_eq!(
            fixed.rows(),
            &[school("1", "Oak Elementary"), school("2", "Pine High")]
        );
    }

    #[test]
    fn test_header_only() {
        let table = Table::new(header(), vec![]);
        let fixed = renumber(&table, MIN_FIELDS);
        assert_eq!(fixed, table);
    }

    #[test]
    fn test_header_is_not_filtered() {
        let table = Table::new(Row::from_fields(["id"]), vec![school("3", "Elm")]);
        let fixed = renumber(&table, MIN_FIELDS);
        assert_eq!(fixed.header().fields(), &["id"]);
        assert_eq!(fixed.data_len(), 1);
    }

    #[test]
    fn test_identifiers_are_gapless() {
        let rows = (0..50)
            .map(|i| {
                if i % 3 == 0 {
                    Row::from_fields(["short"])
                } else {
                    school(&(100 - i).to_string(), "S")
                }
            })
            .collect::<Vec<_>>();
        let short = rows.iter().filter(|r| r.len() < MIN_FIELDS).count();
        let table = Table::new(header(), rows);

        let fixed = renumber(&table, MIN_FIELDS);
        assert_eq!(fixed.data_len(), table.data_len() - short);
        for (i, row) in fixed.rows().iter().enumerate() {
            assert_eq!(row.identifier(), Some((i + 1).to_string().as_str()));
        }
    }

    #[test]
    fn test_other_fields_unchanged() {
        let original =
            Row::from_fields(["77", "Cedar, \"West\"", "", "B", "C", "D", "E", "extra"]);
        let table = Table::new(header(), vec![original.clone()]);
        let fixed = renumber(&table, MIN_FIELDS);
        let out = &fixed.rows()[0];
        assert_eq!(out.len(), original.len());
        assert_eq!(&out.fields()[1..], &original.fields()[1..]);
    }

    #[test]
    fn test_canonical_table_is_fixed_point() {
        let table = Table::new(
            header(),
            vec![school("1", "Oak"), school("2", "Pine"), school("3", "Elm")],
        );
        let fixed = renumber(&table, MIN_FIELDS);
        assert_eq!(fixed, table);
        assert_eq!(renumber(&fixed, MIN_FIELDS), fixed);
    }

    #[test]
    fn test_execute_with_empty_chain_passes_everything() {
        let rows = vec![Row::from_fields(["a"]), Row::from_fields(["b"])];
        let mut stages: Vec<Box<dyn RowStage>> = Vec::new();
        let out = execute(rows.clone(), &mut stages);
        assert_eq!(out, rows);
    }
}
