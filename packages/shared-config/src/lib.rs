//! Shared configuration types for Catalog services
//!
//! This crate provides the environment-driven configuration shared by the
//! API binary and its integration tests.

mod database;
mod error;
mod store;

pub use database::{MongoConfig, DEFAULT_MONGODB_DATABASE, DEFAULT_MONGODB_URL};
pub use error::{ConfigError, ConfigResult};
pub use store::StoreBackend;

use std::env;

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// MongoDB configuration
    pub mongo: MongoConfig,

    /// Backing store selection (from CATALOG_STORE)
    pub store: StoreBackend,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log filter directive (from RUST_LOG, falling back to LOG_LEVEL)
    pub log_level: Option<String>,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            mongo: MongoConfig::from_env()?,
            store: get_env_or_default("CATALOG_STORE", "mongodb").parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .ok()
                .filter(|level| !level.trim().is_empty()),
        })
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "anything".parse::<Environment>().unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(format!("{}", Environment::Production), "production");
        assert_eq!(format!("{}", Environment::Staging), "staging");
        assert_eq!(format!("{}", Environment::Development), "development");
    }

    #[test]
    fn test_common_config_defaults() {
        temp_env::with_vars(
            [
                ("CATALOG_STORE", None::<&str>),
                ("ENVIRONMENT", None),
                ("RUST_LOG", None),
                ("LOG_LEVEL", None),
            ],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::MongoDb);
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.log_level, None);
            },
        );
    }

    #[test]
    fn test_common_config_memory_store() {
        temp_env::with_var("CATALOG_STORE", Some("memory"), || {
            let config = CommonConfig::from_env().unwrap();
            assert_eq!(config.store, StoreBackend::Memory);
        });
    }

    #[test]
    fn test_parse_env_invalid_value() {
        temp_env::with_var("CATALOG_TEST_NUMBER", Some("ten"), || {
            let err = parse_env("CATALOG_TEST_NUMBER", 10u32).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue(ref name, _) if name == "CATALOG_TEST_NUMBER")
            );
        });
    }

    #[test]
    fn test_log_level_falls_back_to_log_level_var() {
        temp_env::with_vars(
            [("RUST_LOG", None::<&str>), ("LOG_LEVEL", Some("warn"))],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert_eq!(config.log_level.as_deref(), Some("warn"));
            },
        );
        temp_env::with_vars(
            [("RUST_LOG", Some("catalog_api=trace")), ("LOG_LEVEL", Some("warn"))],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert_eq!(config.log_level.as_deref(), Some("catalog_api=trace"));
            },
        );
    }
}
