//! Result and error types for Aprobar.

use thiserror::Error;

/// Result type for Aprobar operations
pub type AprobarResult<T> = Result<T, AprobarError>;

/// Errors that can occur in Aprobar
#[derive(Debug, Error)]
pub enum AprobarError {
    /// Execution-result artifact could not be loaded
    #[error("Failed to load execution result: {message}")]
    ResultLoad {
        /// Error message
        message: String,
    },

    /// Coverage arithmetic is undefined for the given statistics
    #[error("Coverage computation failed: {message}")]
    Computation {
        /// Error message
        message: String,
    },

    /// Report could not be rendered or persisted
    #[error("Report generation failed: {message}")]
    Report {
        /// Error message
        message: String,
    },

    /// Image comparison error
    #[error("Image comparison failed: {message}")]
    ImageComparison {
        /// Error message
        message: String,
    },

    /// Fixture file error
    #[error("Fixture error: {message}")]
    Fixture {
        /// Error message
        message: String,
    },

    /// Suite settings error
    #[error("Settings error: {message}")]
    Settings {
        /// Error message
        message: String,
    },

    /// Documentation generation error
    #[error("Documentation generation failed: {message}")]
    DocGeneration {
        /// Error message
        message: String,
    },

    /// Seed database did not become reachable in time
    #[error("Database not reachable after {seconds}s")]
    DatabaseTimeout {
        /// Seconds waited before giving up
        seconds: u64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite error
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
