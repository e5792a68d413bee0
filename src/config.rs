//! Run configuration.
//!
//! Paths are fixed; the binary always runs with `Config::default()`.

use std::path::PathBuf;

/// School records read by the binary.
pub const INPUT_PATH: &str = "assets/data/School.csv";

/// Renumbered copy written by the binary.
pub const OUTPUT_PATH: &str = "assets/data/School_fixed.csv";

/// Data rows with fewer fields than this are dropped.
pub const MIN_FIELDS: usize = 7;

/// Rows shown at each end of the summary preview.
pub const PREVIEW_ROWS: usize = 10;

/// Settings for one renumbering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub min_fields: usize,
    pub preview_rows: usize,
}

impl Config {
    /// Default settings with different input and output files.
    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            min_fields: MIN_FIELDS,
            preview_rows: PREVIEW_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("assets/data/School.csv"));
        assert_eq!(
            config.output_path,
            PathBuf::from("assets/data/School_fixed.csv")
        );
        assert_eq!(config.min_fields, 7);
        assert_eq!(config.preview_rows, 10);
    }

    #[test]
    fn test_with_paths_keeps_rules() {
        let config = Config::with_paths("in.csv", "out.csv");
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.min_fields, MIN_FIELDS);
    }
}
