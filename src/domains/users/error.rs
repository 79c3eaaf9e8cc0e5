//! Users domain error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating caller-supplied record fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or empty.
    #[error("Missing or empty field: {0}")]
    MissingField(&'static str),

    /// The email field does not look like an email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Errors raised by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but is not a valid JSON array of records.
    #[error("Corrupt store file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing records back to JSON failed.
    #[error("Failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An I/O error while reading or writing the backing file.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a corrupt-store error for the given file.
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while turning generated text into a new record.
#[derive(Debug, Error)]
pub enum GenerationParseError {
    /// The generation collaborator returned something other than text.
    #[error("Generation did not produce text content (got {0})")]
    NotText(String),

    /// The (fence-stripped) text is not valid JSON.
    #[error("Generated text is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON parsed but does not describe a valid record.
    #[error("Generated record is invalid: {0}")]
    InvalidRecord(#[from] ValidationError),

    /// The generation request itself failed.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}
