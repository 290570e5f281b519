//! Configuration validation module.
//!
//! Collects every problem in a configuration before failing, so a bad
//! deployment reports all of them at once.

use crate::{AppConfig, PaginationConfig};
use japi_core::TelemetryConfig;
use thiserror::Error;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// Default page size must be at least 1.
    #[error("Invalid pagination default_limit: {value} (must be at least 1)")]
    InvalidPageLimit { value: u64 },
    /// Application name must not be blank.
    #[error("Application name cannot be blank")]
    BlankAppName,
    /// Log level is invalid.
    #[error("Invalid log level: '{value}' (valid: trace, debug, info, warn, error)")]
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    #[error("Invalid log format: '{value}' (valid: pretty, json)")]
    InvalidLogFormat { value: String },
}

/// Result of configuration validation containing all errors found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Adds an error to the result.
    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the validation errors.
    pub fn errors(&self) -> &[ConfigValidationError] {
        &self.errors
    }

    /// Converts to Result, returning Err with all errors if any exist.
    pub fn into_result(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        Self::check(config).into_result()
    }

    /// Runs every rule and returns the collected outcome.
    pub fn check(config: &AppConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if config.app.name.trim().is_empty() {
            result.add_error(ConfigValidationError::BlankAppName);
        }
        Self::validate_pagination(&config.pagination, &mut result);
        Self::validate_observability(&config.observability, &mut result);

        result
    }

    /// Validates pagination configuration.
    fn validate_pagination(config: &PaginationConfig, result: &mut ValidationResult) {
        // a zero page size cannot produce a last page
        if config.default_limit == 0 {
            result.add_error(ConfigValidationError::InvalidPageLimit {
                value: config.default_limit,
            });
        }
    }

    /// Validates observability configuration.
    fn validate_observability(config: &TelemetryConfig, result: &mut ValidationResult) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            result.add_error(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        let config = AppConfig::default();
        assert!(ConfigValidator::validate(&config).is_ok());
        assert!(ConfigValidator::check(&config).is_valid());
    }

    #[test]
    fn test_zero_page_limit() {
        let mut config = AppConfig::default();
        config.pagination.default_limit = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::InvalidPageLimit { value: 0 }]);
    }

    #[test]
    fn test_blank_app_name() {
        let mut config = AppConfig::default();
        config.app.name = "   ".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::BlankAppName));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = AppConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        config.observability.log_format = "Json".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_settings() {
        let mut config = AppConfig::default();
        config.observability.log_level = "verbose".to_string();
        config.observability.log_format = "xml".to_string();

        let result = ConfigValidator::check(&config);
        assert!(!result.is_valid());
        assert!(result.errors().iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidLogLevel { value } if value == "verbose"
        )));
        assert!(result.errors().iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidLogFormat { value } if value == "xml"
        )));
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = AppConfig::default();
        config.app.name = String::new();
        config.pagination.default_limit = 0;
        config.observability.log_level = "loud".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_format_validation_errors() {
        let errors = vec![
            ConfigValidationError::InvalidPageLimit { value: 0 },
            ConfigValidationError::InvalidLogLevel {
                value: "loud".to_string(),
            },
        ];

        let output = format_validation_errors(&errors);
        assert!(output.contains("1. Invalid pagination default_limit: 0"));
        assert!(output.contains("2. Invalid log level: 'loud'"));
    }
}
