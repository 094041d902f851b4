//! Error types for stay-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StayError {
    /// A reservation date field is not a valid calendar date.
    #[error("Invalid date: {value:?}")]
    InvalidDate { value: String },

    /// A reservation date field is absent or null.
    #[error("Missing date: {field}")]
    MissingDate { field: &'static str },

    /// A reservation record at position `index` could not be normalized.
    #[error("Invalid reservation at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<StayError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StayError>;
