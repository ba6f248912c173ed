//! Environment-driven configuration for store hosts.
//!
//! Resolution order per value: environment variable, then default.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "PORTFOLIO_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "PORTFOLIO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PORTFOLIO_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "portfolio.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Env,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{LOG_LEVEL_ENV}: {message}"),
            Self::RelativeLogDir(value) => {
                write!(f, "{LOG_DIR_ENV} must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for opening a store and its logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: ConfigValue<PathBuf>,
    pub log_level: ConfigValue<&'static str>,
    /// `None` disables file logging.
    pub log_dir: Option<ConfigValue<PathBuf>>,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = match read(DB_PATH_ENV) {
            Some(path) => ConfigValue {
                value: PathBuf::from(path),
                source: ConfigSource::Env,
            },
            None => ConfigValue {
                value: PathBuf::from(DEFAULT_DB_FILE_NAME),
                source: ConfigSource::Default,
            },
        };

        let log_level = match read(LOG_LEVEL_ENV) {
            Some(level) => ConfigValue {
                value: normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?,
                source: ConfigSource::Env,
            },
            None => ConfigValue {
                value: default_log_level(),
                source: ConfigSource::Default,
            },
        };

        let log_dir = match read(LOG_DIR_ENV) {
            Some(dir) => {
                let path = PathBuf::from(&dir);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativeLogDir(dir));
                }
                Some(ConfigValue {
                    value: path,
                    source: ConfigSource::Env,
                })
            }
            None => None,
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ConfigSource, StoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.db_path.value, PathBuf::from("portfolio.db"));
        assert_eq!(config.db_path.source, ConfigSource::Default);
        assert_eq!(config.log_level.source, ConfigSource::Default);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn env_values_override_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "/data/site.db"),
            (LOG_LEVEL_ENV, " WARNING "),
        ]))
        .unwrap();
        assert_eq!(config.db_path.value, PathBuf::from("/data/site.db"));
        assert_eq!(config.db_path.source, ConfigSource::Env);
        assert_eq!(config.log_level.value, "warn");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = StoreConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "   ")])).unwrap();
        assert_eq!(config.db_path.source, ConfigSource::Default);
    }

    #[test]
    fn invalid_level_and_relative_dir_are_rejected() {
        let level_err = StoreConfig::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "loud")])).unwrap_err();
        assert!(matches!(level_err, ConfigError::InvalidLogLevel(_)));

        let dir_err = StoreConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "logs")])).unwrap_err();
        assert_eq!(dir_err, ConfigError::RelativeLogDir("logs".to_string()));
    }
}
