//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a document cannot be turned into a publish request.
pub enum PublishError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PublishError {
    pub(crate) fn no_metadata_block() -> Self {
        PublishError::Format("no metadata block found".to_string())
    }

    pub(crate) fn missing_title() -> Self {
        PublishError::Validation("missing title".to_string())
    }
}

#[derive(Error, Debug)]
/// Error type returned when the article API could not be reached or rejected the request.
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
