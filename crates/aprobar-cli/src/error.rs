//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Coverage validation failed
    #[error("Coverage validation failed: {message}")]
    CoverageValidation {
        /// Error message
        message: String,
    },

    /// Image comparison did not meet the threshold
    #[error("Comparison failed: {message}")]
    Comparison {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Aprobar library error
    #[error("{0}")]
    Aprobar(#[from] aprobar::AprobarError),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a coverage validation error
    #[must_use]
    pub fn coverage_validation(message: impl Into<String>) -> Self {
        Self::CoverageValidation {
            message: message.into(),
        }
    }

    /// Create a comparison error
    #[must_use]
    pub fn comparison(message: impl Into<String>) -> Self {
        Self::Comparison {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_coverage_validation_error() {
        let err = CliError::coverage_validation("below minimum");
        assert!(err.to_string().contains("Coverage validation"));
    }

    #[test]
    fn test_comparison_error() {
        let err = CliError::comparison("too different");
        assert!(err.to_string().contains("Comparison"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_aprobar_error_from() {
        let lib_err = aprobar::AprobarError::Computation {
            message: "no tests".to_string(),
        };
        let cli_err: CliError = lib_err.into();
        assert!(cli_err.to_string().contains("Coverage computation"));
    }
}
