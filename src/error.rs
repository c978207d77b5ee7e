// Error types for statistics decoding and reporting

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The top-level record is not a JSON object
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
