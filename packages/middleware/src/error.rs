//! Error types for the doctitle middleware

use thiserror::Error;

/// Result type for doctitle middleware operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the doctitle middleware
#[derive(Debug, Error)]
pub enum Error {
    /// Errors related to JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised by the title controller
    #[error("Title error: {0}")]
    Title(#[from] doctitle_core::Error),

    /// Configuration values that parse but cannot be used
    #[error("Invalid configuration: {0}")]
    Config(String),
}
