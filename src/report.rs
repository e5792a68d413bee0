//! Human-readable run summary.

use std::io::{self, Write};

use crate::table::Table;

/// Row counts for one run. Header rows are never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Data rows read from the input file.
    pub input_rows: usize,
    /// Data rows that passed the field-count rule.
    pub retained_rows: usize,
    /// Data rows written to the output file.
    pub output_rows: usize,
}

impl Summary {
    pub fn new(input: &Table, output: &Table) -> Self {
        Self {
            input_rows: input.data_len(),
            retained_rows: output.data_len(),
            output_rows: output.data_len(),
        }
    }

    /// Data rows dropped for having too few fields.
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.retained_rows
    }
}

/// Print the counts followed by the first and last `preview` rows of the
/// output table, each prefixed with its position in the table.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &Summary,
    output: &Table,
    preview: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "Renumbering complete: processed {} school records",
        summary.retained_rows
    )?;
    writeln!(out, "Original file: {} rows", summary.input_rows)?;
    writeln!(out, "Fixed file: {} rows", summary.output_rows)?;

    writeln!(out, "\nFirst {preview} rows after renumbering:")?;
    for (i, row) in output.head(preview) {
        writeln!(out, "{i}: {row}")?;
    }

    writeln!(out, "\nLast {preview} rows after renumbering:")?;
    for (i, row) in output.tail(preview) {
        writeln!(out, "{i}: {row}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;

    fn table_with(n: usize) -> Table {
        let rows = (1..=n)
            .map(|i| Row::from_fields([i.to_string(), format!("School {i}")]))
            .collect();
        Table::new(Row::from_fields(["id", "name"]), rows)
    }

    fn render(summary: &Summary, table: &Table) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, summary, table, 10).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let input = table_with(5);
        let output = table_with(3);
        let summary = Summary::new(&input, &output);
        assert_eq!(summary.input_rows, 5);
        assert_eq!(summary.retained_rows, 3);
        assert_eq!(summary.output_rows, 3);
        assert_eq!(summary.dropped_rows(), 2);
    }

    #[test]
    fn test_report_counts_and_previews() {
        let output = table_with(20);
        let summary = Summary {
            input_rows: 22,
            retained_rows: 20,
            output_rows: 20,
        };
        let text = render(&summary, &output);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Renumbering complete: processed 20 school records");
        assert_eq!(lines[1], "Original file: 22 rows");
        assert_eq!(lines[2], "Fixed file: 20 rows");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "First 10 rows after renumbering:");
        assert_eq!(lines[5], r#"0: ["id", "name"]"#);
        assert_eq!(lines[15], r#"10: ["10", "School 10"]"#);
        assert_eq!(lines[16], "");
        assert_eq!(lines[17], "Last 10 rows after renumbering:");
        assert_eq!(lines[18], r#"11: ["11", "School 11"]"#);
        assert_eq!(lines.last(), Some(&r#"20: ["20", "School 20"]"#));
        assert_eq!(lines.len(), 28);
    }

    #[test]
    fn test_report_header_only_table() {
        let output = table_with(0);
        let summary = Summary::new(&output, &output);
        let text = render(&summary, &output);
        assert!(text.contains("processed 0 school records"));
        assert_eq!(text.matches(r#"0: ["id", "name"]"#).count(), 2);
    }
}
