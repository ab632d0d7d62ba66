//! Core error types for the feedback service.
//!
//! Subsystem crates define their own error enums; this module holds the
//! errors shared by everything that touches configuration or the answer model.

use thiserror::Error;

/// Errors from constructing shared answer-model values.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading config or secrets
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required secret is not configured
    #[error("missing secret: {0}")]
    MissingSecret(&'static str),
}

/// Result type alias using `FeedbackError`.
pub type Result<T> = std::result::Result<T, FeedbackError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
