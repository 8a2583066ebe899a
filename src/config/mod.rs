//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SHELF_FINDER` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use shelf_finder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog at {}", config.catalog.path().display());
//! ```

mod catalog;
mod error;
mod export;
mod logging;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Product catalog location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Shopping list export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SHELF_FINDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SHELF_FINDER__CATALOG__PATH=data/store.yaml` -> `catalog.path`
    /// - `SHELF_FINDER__LOGGING__JSON=true` -> `logging.json = true`
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
                    .prefix("SHELF_FINDER")
                    .separator("__")
                    .try_parsing(true),
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
        self.catalog.validate()?;
        self.logging.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SHELF_FINDER__CATALOG__PATH",
        "SHELF_FINDER__LOGGING__FILTER",
        "SHELF_FINDER__LOGGING__JSON",
        "SHELF_FINDER__EXPORT__DIRECTORY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.catalog.path, "products.json");
        assert_eq!(config.export.directory, "shopping_lists");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SHELF_FINDER__CATALOG__PATH", "data/store.yaml");
        env::set_var("SHELF_FINDER__LOGGING__JSON", "true");
        env::set_var("SHELF_FINDER__EXPORT__DIRECTORY", "/tmp/lists");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.path, "data/store.yaml");
        assert!(config.logging.json);
        assert_eq!(config.export.directory, "/tmp/lists");
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SHELF_FINDER__CATALOG__PATH", "products.txt");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedCatalogFormat(_))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
