//! Telemetry configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Tracing subscriber configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive, e.g. `info,cqs_handlers=trace`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl TelemetryConfig {
    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }

    /// Builds the filter described by `log_level`.
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        let directive = self.log_level.trim();
        if directive.is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        EnvFilter::try_new(directive).map_err(|e| ValidationError::InvalidLogLevel {
            directive: directive.to_string(),
            reason: e.to_string(),
        })
    }

    /// Install the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the filter is invalid or a global subscriber
    /// is already installed.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        let result = match self.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        result.map_err(|e| ConfigError::TelemetryInit(e.to_string()))
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,cqs_handlers=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_defaults() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info,cqs_handlers=debug");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let config = TelemetryConfig {
            log_level: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogLevel));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = TelemetryConfig {
            log_level: "cqs_handlers=notalevel".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn test_log_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: LogFormat,
        }

        let json: Wrapper = config::Config::builder()
            .set_override("format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(json.format, LogFormat::Json);
    }
}
