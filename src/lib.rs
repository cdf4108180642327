#![forbid(unsafe_code)]
//! CSV text editing: a lenient parser, a quoting serializer and the grid
//! model they share, plus the desktop editor built on them.
//!
//! ```
//! use csvflow::backend::{parser::CsvParser, writer::CsvWriter};
//!
//! let mut grid = CsvParser::parse("name,note\r\nAda,\"likes \"\"commas\"\", too\"\r\n");
//! grid.set_cell(1, 2, "extra");
//! assert_eq!(
//!     CsvWriter::serialize(&grid),
//!     "name,note\nAda,\"likes \"\"commas\"\", too\",extra"
//! );
//! ```

pub mod backend;
pub mod gui;
pub mod logging;

pub use crate::backend::{
    editor::{Editor, ViewMode},
    error::Error,
    grid::Grid,
    parser::CsvParser,
    writer::CsvWriter,
};
