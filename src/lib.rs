//! # school-renumber
//!
//! Renumbers the identifier column of a school CSV file.
//!
//! The first row of the input is a header and is copied through as is.
//! Every data row with at least seven fields gets a new identifier in
//! field 0, counting from 1 over the rows that are kept. Shorter rows are
//! dropped. The result is written to a new CSV file and a short summary is
//! printed for manual checking.
//!
//! ## Example
//!
//! ```
//! use school_renumber::{MIN_FIELDS, Table, read_rows, renumber, write_table};
//!
//! let input = "id,name,a,b,c,d,e\n\
//!              5,Oak Elementary,A,B,C,D,E\n\
//!              x,y\n\
//!              9,Pine High,A,B,C,D,E\n";
//!
//! let table = Table::from_rows(read_rows(input.as_bytes())?)?;
//! let fixed = renumber(&table, MIN_FIELDS);
//!
//! let mut out = Vec::new();
//! write_table(&mut out, &fixed)?;
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(
//!     text.lines().collect::<Vec<_>>(),
//!     vec![
//!         "id,name,a,b,c,d,e",
//!         "1,Oak Elementary,A,B,C,D,E",
//!         "2,Pine High,A,B,C,D,E",
//!     ]
//! );
//! # Ok::<(), school_renumber::RenumberError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod renumber;
pub mod report;
pub mod row;
pub mod stage;
pub mod table;
pub mod writer;

pub use config::{Config, INPUT_PATH, MIN_FIELDS, OUTPUT_PATH, PREVIEW_ROWS};
pub use error::{RenumberError, Result};
pub use loader::{load_rows, parse_rows, read_rows};
pub use pipeline::run;
pub use renumber::{execute, renumber};
pub use report::{Summary, write_report};
pub use row::Row;
pub use stage::{AssignIdStage, MinFieldsStage, RowStage, renumber_stages};
pub use table::Table;
pub use writer::{write_file, write_table};
