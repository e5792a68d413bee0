//! CSV row type.
//!
//! A `Row` is one parsed line of the input: an ordered list of field
//! strings with no typed schema. Field 0 of a data row is its identifier.

use std::fmt;

/// One row of a CSV table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Create a row from owned fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Create a row from anything that yields string-like fields.
    ///
    /// ```
    /// use school_renumber::Row;
    ///
    /// let row = Row::from_fields(["5", "Oak Elementary"]);
    /// assert_eq!(row.identifier(), Some("5"));
    /// ```
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The identifier field (field 0), if the row has any fields.
    pub fn identifier(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Return this row with field 0 replaced by `id`.
    ///
    /// All other fields are kept as they are. An empty row gains a single
    /// identifier field.
    pub fn with_identifier(mut self, id: usize) -> Self {
        let id = id.to_string();
        match self.fields.first_mut() {
            Some(first) => *first = id,
            None => self.fields.push(id),
        }
        self
    }
}

impl From<&csv::StringRecord> for Row {
    fn from(record: &csv::StringRecord) -> Self {
        Self::from_fields(record.iter())
    }
}

impl fmt::Display for Row {
    /// Bracketed list of quoted fields, e.g. `["1", "Oak Elementary"]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field:?}")?;
        }
        f.write_str("]")
    }
}
