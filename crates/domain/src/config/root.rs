use serde::{Deserialize, Serialize};

use super::cache::RecordsCacheConfig;
use super::errors::ConfigError;

const LOCAL_CONFIG_PATH: &str = "zonecache.toml";

/// Main configuration structure for zonecache
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zone records cache configuration (sharding)
    #[serde(default)]
    pub records_cache: RecordsCacheConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonecache.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shards = self.records_cache.shard_amount;
        if shards < 2 || !shards.is_power_of_two() {
            return Err(ConfigError::Validation(format!(
                "shard_amount must be a power of two greater than 1, got {}",
                shards
            )));
        }

        Ok(())
    }
}
