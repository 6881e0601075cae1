//! Error types for the yearline ecosystem.

use thiserror::Error;

/// Errors that can occur in yearline operations.
#[derive(Error, Debug)]
pub enum YearlineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid color '{0}'. Expected #rrggbb")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for yearline operations.
pub type YearlineResult<T> = Result<T, YearlineError>;
