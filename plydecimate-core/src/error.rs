//! Error types for plydecimate

use thiserror::Error;

/// Main error type for plydecimate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed header at line {line}: {message}")]
    MalformedHeader { line: usize, message: String },

    #[error("Unsupported property type: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("Truncated data in element '{element}': record {record} of {expected} is incomplete")]
    TruncatedData {
        element: String,
        record: usize,
        expected: usize,
    },

    #[error("Malformed record {record} in element '{element}': {message}")]
    MalformedRecord {
        element: String,
        record: usize,
        message: String,
    },

    #[error("Unknown element: '{name}'")]
    UnknownElement { name: String },

    #[error("Element '{name}' has no records to sample from")]
    EmptyElement { name: String },

    #[error("Duplicate element: '{name}'")]
    DuplicateElement { name: String },

    #[error("Record does not match schema of element '{element}': {message}")]
    SchemaMismatch { element: String, message: String },

    #[error("Retention fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),
}

impl Error {
    pub(crate) fn schema_mismatch(element: &str, message: impl Into<String>) -> Self {
        Error::SchemaMismatch {
            element: element.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for plydecimate operations
pub type Result<T> = std::result::Result<T, Error>;
