//! Handler layer configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CQS_HANDLERS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cqs_handlers::config::HandlerConfig;
//!
//! let config = HandlerConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.telemetry.init().expect("Failed to install tracing subscriber");
//! ```

mod error;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use telemetry::{LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root configuration
///
/// Every section has defaults, so loading succeeds with no environment set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandlerConfig {
    /// Tracing configuration (filter directive, output format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl HandlerConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CQS_HANDLERS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CQS_HANDLERS__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level = "debug"`
    /// - `CQS_HANDLERS__TELEMETRY__FORMAT=json` -> `telemetry.format = Json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CQS_HANDLERS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telemetry.validate()?;
        Ok(())
    }
}
