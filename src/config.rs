use dotenv::dotenv;
use std::env;
use thiserror::Error;

use crate::utils::DEFAULT_LOG_FILTER;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STORE_SHARDS must be a power of two greater than 1, got '{0}'")]
    InvalidShardAmount(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Shards per collection. `None` lets the map pick its default.
    pub store_shards: Option<usize>,
    /// Default filter for `init_logger`; `RUST_LOG` still overrides it.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_shards: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Carrega `.env` (se existir) e lê a configuração do ambiente
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let store_shards = env::var("STORE_SHARDS")
            .ok()
            .map(|raw| parse_shard_amount(&raw))
            .transpose()?;
        let log_filter = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            store_shards,
            log_filter,
        })
    }
}

fn parse_shard_amount(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 1 && n.is_power_of_two() => Ok(n),
        _ => Err(ConfigError::InvalidShardAmount(raw.to_string())),
    }
}
