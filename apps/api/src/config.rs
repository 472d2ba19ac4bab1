//! API server configuration

use std::env;

use anyhow::{bail, Context, Result};
use catalog_shared_config::{CommonConfig, Environment, MongoConfig, StoreBackend};

/// Port the server listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 4001;

/// Tracing filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_FILTER: &str = "catalog_api=debug,tower_http=debug";

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 4001)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production mode, this function requires:
    /// - `MONGODB_URL`: Must be explicitly set (no localhost default)
    /// - `CATALOG_STORE`: Must not select the in-memory store
    ///
    /// In development/staging mode, sensible defaults are used for convenience.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;

        if common.environment.is_production() {
            Self::validate_mongodb_url()?;
            Self::validate_store(common.store)?;
        }

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("Invalid PORT value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Validate that MONGODB_URL is explicitly set in production
    fn validate_mongodb_url() -> Result<()> {
        match env::var("MONGODB_URL") {
            Ok(url) if !url.is_empty() => Ok(()),
            _ => {
                bail!(
                    "MONGODB_URL environment variable is required in production. \
                     Please set your MongoDB connection string."
                );
            }
        }
    }

    /// The in-memory store loses every write on restart
    fn validate_store(store: StoreBackend) -> Result<()> {
        if store == StoreBackend::Memory {
            bail!("CATALOG_STORE=memory is not allowed in production");
        }
        Ok(())
    }

    // Convenience accessors for common config fields

    /// Get MongoDB configuration
    pub fn mongo(&self) -> &MongoConfig {
        &self.common.mongo
    }

    /// Get the selected store backend
    pub fn store(&self) -> StoreBackend {
        self.common.store
    }

    /// Tracing filter directive from `RUST_LOG` or `LOG_LEVEL`
    pub fn log_filter(&self) -> &str {
        self.common
            .log_level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}
