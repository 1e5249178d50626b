//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Telemetry initialization failed: {0}")]
    TelemetryInit(String),
}

/// Semantic validation errors for configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Log level directive is empty")]
    EmptyLogLevel,

    #[error("Invalid log level directive '{directive}': {reason}")]
    InvalidLogLevel { directive: String, reason: String },
}
