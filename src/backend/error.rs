//! Error types for the CSV backend.
//!
//! Parsing and serializing are total, so these only surface at the
//! boundaries: decoding bytes that are not text, and file I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input type: expected {expected}, found {found}")]
    InvalidInputType {
        expected: &'static str,
        found: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an `InvalidInputType` error for input that was expected to be text.
    pub fn not_text(found: impl Into<String>) -> Self {
        Error::InvalidInputType {
            expected: "UTF-8 text",
            found: found.into(),
        }
    }
}
