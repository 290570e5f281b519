//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use japi_core::{JsonApiError, JsonApiResult};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "JAPI_ENVIRONMENT";

/// Prefix of environment variable overrides (`JAPI__PAGINATION__DEFAULT_LIMIT`).
pub const ENV_PREFIX: &str = "JAPI";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{dir}/default.toml` - Default values
    /// 2. `{dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{dir}/local.toml` - Local overrides
    /// 4. Environment variables with `JAPI__` prefix
    pub fn new(config_dir: impl Into<PathBuf>) -> JsonApiResult<Self> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Returns the current configuration.
    pub fn get(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The current configuration is kept if the new one fails to load.
    pub fn reload(&self) -> JsonApiResult<()> {
        let new_config = Self::load_config(&self.config_dir)?;
        *self.config.write() = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by key path, e.g.
    /// `pagination.default_limit`.
    pub fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = serde_json::to_value(&*self.config.read()).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> JsonApiResult<AppConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        info!(
            config_dir = %config_dir.display(),
            "Loading configuration for environment: {}", environment
        );

        let mut builder = Config::builder();
        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_japi_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_japi_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> JsonApiResult<()> {
        if config.app.environment == "production" && config.observability.log_level.eq_ignore_ascii_case("trace") {
            warn!("Trace logging enabled in production");
        }

        ConfigValidator::validate(config)
            .map_err(|errors| JsonApiError::configuration(format_validation_errors(&errors)))
    }
}

fn config_error_to_japi_error(err: ConfigError) -> JsonApiError {
    JsonApiError::configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use japi_core::LinkStyle;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_empty_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(dir.path()).unwrap();
        assert_eq!(loader.get(), AppConfig::default());
    }

    #[test]
    fn test_default_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            r#"
            [app]
            name = "catalog"

            [pagination]
            default_limit = 50
            link_style = "object"
            "#,
        );

        let config = ConfigLoader::new(dir.path()).unwrap().get();
        assert_eq!(config.app.name, "catalog");
        assert_eq!(config.pagination.default_limit, 50);
        assert_eq!(config.pagination.link_style, LinkStyle::Object);
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[pagination]\ndefault_limit = 50\n");
        write(&dir, "local.toml", "[pagination]\ndefault_limit = 5\n");

        let loader = ConfigLoader::new(dir.path()).unwrap();
        assert_eq!(loader.get_value::<u64>("pagination.default_limit"), Some(5));
        assert_eq!(loader.get_value::<String>("pagination.link_style"), Some("plain".to_string()));
        assert_eq!(loader.get_value::<u64>("pagination.missing"), None);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[pagination]\ndefault_limit = 0\n");

        let err = ConfigLoader::new(dir.path()).err().unwrap();
        assert!(matches!(err, JsonApiError::Configuration(ref msg) if msg.contains("default_limit")));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[pagination\n");

        let err = ConfigLoader::new(dir.path()).err().unwrap();
        assert!(matches!(err, JsonApiError::Configuration(_)));
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[pagination]\ndefault_limit = 50\n");
        let loader = ConfigLoader::new(dir.path()).unwrap();

        write(&dir, "default.toml", "[pagination]\ndefault_limit = 75\n");
        loader.reload().unwrap();
        assert_eq!(loader.get().pagination.default_limit, 75);

        // a broken file leaves the last good configuration in place
        write(&dir, "default.toml", "[pagination]\ndefault_limit = 0\n");
        assert!(loader.reload().is_err());
        assert_eq!(loader.get().pagination.default_limit, 75);
    }
}
