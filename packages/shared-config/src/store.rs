//! Store backend selection

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Which backing store the services run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// MongoDB collections (`categories`, `products`)
    #[default]
    MongoDb,
    /// Seeded in-process store, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" | "in-memory" | "fake" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue(
                "CATALOG_STORE".to_string(),
                format!("unknown store backend '{}'", other),
            )),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MongoDb => write!(f, "mongodb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}
