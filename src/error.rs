//! Error types for the hrdrift ingestion pipeline

use thiserror::Error;

/// Errors that can occur while ingesting an activity file
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("No file present in drop")]
    EmptyDrop,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("A drop is already being processed")]
    DropInProgress,

    #[error("Failed to read file: {0}")]
    ReadFailed(String),

    #[error("Malformed activity JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Failed to fetch activity streams: {0}")]
    FetchFailed(String),
}

impl IngestError {
    /// Whether the error rejects the drop interaction itself, before any
    /// file content has been examined. Rejections are surfaced to the user
    /// as a blocking alert; validation failures go to the developer log.
    pub fn is_drop_rejection(&self) -> bool {
        matches!(
            self,
            IngestError::EmptyDrop
                | IngestError::UnsupportedMediaType(_)
                | IngestError::DropInProgress
        )
    }
}
