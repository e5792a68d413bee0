//! Error type for the renumbering run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a renumbering run.
///
/// Rows with too few fields are not errors; they are dropped by the
/// renumberer without being reported here.
#[derive(Debug, Error)]
pub enum RenumberError {
    /// Opening, reading, or writing a file failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV reader or writer failed, including invalid UTF-8 input.
    #[error("CSV error on '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV failure on an in-memory reader or writer.
    #[error("CSV error: {0}")]
    Stream(#[from] csv::Error),

    /// Printing the summary failed.
    #[error("failed to write summary: {0}")]
    Report(#[source] io::Error),

    /// The input held no rows at all, so there is no header.
    #[error("input is empty: expected at least a header row")]
    EmptyInput,
}

impl RenumberError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a path to a stream-level CSV error.
    pub(crate) fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Stream(source) => Self::Csv {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenumberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = RenumberError::io(
            "assets/data/School.csv",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("assets/data/School.csv"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_at_path_leaves_other_variants_alone() {
        let err = RenumberError::EmptyInput.at_path("x.csv");
        assert!(matches!(err, RenumberError::EmptyInput));
    }
}
