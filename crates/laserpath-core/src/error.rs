//! Error handling for LaserPath
//!
//! Provides the error types shared by every stage of the pipeline:
//! - Parse errors (malformed command fields)
//! - I/O errors (missing or unreadable command sources)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Command parse error type
///
/// Raised when a field of a command line cannot be turned into a number.
/// The whole command is rejected; none of its fields are applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Field value is not a valid decimal number
    #[error("Invalid value for '{field}' at line {line_number}: {value:?}")]
    InvalidNumber {
        /// The line number where the field was found (1-based).
        line_number: u32,
        /// The field marker (`S`, `X`, `Y` or `F`).
        field: char,
        /// The raw text following the marker.
        value: String,
    },

    /// Field marker present without any value
    #[error("Missing value for '{field}' at line {line_number}")]
    MissingValue {
        /// The line number where the field was found (1-based).
        line_number: u32,
        /// The field marker (`S`, `X`, `Y` or `F`).
        field: char,
    },

    /// Point key does not follow the `X<value>Y<value>` form
    #[error("Invalid point key: {key:?}")]
    InvalidKey {
        /// The offending key text.
        key: String,
    },
}

impl ParseError {
    /// Line the error refers to, if any
    pub fn line_number(&self) -> Option<u32> {
        match self {
            Self::InvalidNumber { line_number, .. } | Self::MissingValue { line_number, .. } => {
                Some(*line_number)
            }
            Self::InvalidKey { .. } => None,
        }
    }
}

/// Main error type for LaserPath
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Command parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
