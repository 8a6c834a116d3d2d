use crate::core::{Catalog, CatalogError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    /// Thumbnail request timeout in seconds.
    pub timeout: u64,
    pub concurrent_probes: usize,
    pub portfolio: Catalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: format!("showreel/{}", env!("CARGO_PKG_VERSION")),
            timeout: 30,
            concurrent_probes: 4,
            portfolio: Catalog::default(),
        }
    }
}

impl Config {
    /// Reads `path` when given, otherwise uses the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                info!("Loading config from {}", path.display());
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.portfolio.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
