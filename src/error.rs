//! Custom error types and handling
//!
//! Visibility resolution itself never fails. These errors come from the host
//! side: loading configuration, reading a viewer snapshot, compiling the
//! shortcode pattern.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid viewer context: {0}")]
    InvalidViewer(#[from] serde_json::Error),

    #[error("Invalid shortcode pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIGURATION_ERROR",
            Self::InvalidViewer(_) => "INVALID_VIEWER",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
