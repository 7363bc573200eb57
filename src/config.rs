//! Configuration loading.
//!
//! The configuration file is optional TOML. Every key has a default, so an
//! absent file yields [`Config::default`]. The path comes from `--config` or
//! the `SMART_DASHBOARD_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::fields::SortKey;
use crate::pipeline::DEFAULT_PAGE_SIZE;

pub const CONFIG_ENV: &str = "SMART_DASHBOARD_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub page_size: usize,
    pub default_sort: SortKey,
    /// Where the terminal UI writes its log. Without it the UI does not log.
    pub log_file: Option<PathBuf>,
    pub login: LoginConfig,
}

/// Values pre-filled on the login screen. They are not checked against anything.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginConfig {
    pub email: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::Name,
            log_file: None,
            login: LoginConfig::default(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        LoginConfig {
            email: "admin@gmail.com".to_string(),
            password: "password".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl Config {
    /// Load from `explicit`, else from the environment variable, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit.map(Path::to_path_buf).or_else(config_path_from_env);
        let config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Config::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be > 0".to_string(),
            });
        }
        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "log_file",
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.default_sort, SortKey::Name);
        assert_eq!(config.login.email, "admin@gmail.com");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn partial_login_section_keeps_other_default() {
        let config = Config::from_toml("[login]\nemail = \"ops@example.com\"\n").unwrap();
        assert_eq!(config.login.email, "ops@example.com");
        assert_eq!(config.login.password, "password");
    }

    #[test]
    fn zero_page_size_rejected() {
        let config = Config::from_toml("page_size = 0").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "page_size", .. })
        ));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(Config::from_toml("colour = \"red\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn sort_key_parses_kebab_case() {
        let config = Config::from_toml("default_sort = \"priority\"").unwrap();
        assert_eq!(config.default_sort, SortKey::Priority);
    }
}
