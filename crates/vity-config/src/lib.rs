//! # vity-config
//!
//! Configuration for Vity, in two parts:
//!
//! - The API key file `~/.config/vity/.env` ([`ApiKeyFile`]). Its presence means
//!   "configured"; `OPENAI_API_KEY` in the environment overrides its value.
//! - Layered settings loaded with figment ([`VityConfig`]).
//!
//! Settings sources (in priority order, highest wins):
//! 1. Environment variables (`VITY_*` prefix, `__` as separator)
//! 2. User-level `~/.config/vity/config.toml`
//! 3. Built-in defaults
//!
//! # Usage
//!
//! ```no_run
//! use vity_config::{ApiKeyFile, VityConfig, resolve_api_key};
//!
//! let config = VityConfig::load().expect("config");
//! let key = resolve_api_key(&ApiKeyFile::default_location().expect("home"));
//! println!("model: {} (key configured: {})", config.model, key.is_ok());
//! ```

mod api_key;
mod error;

pub use api_key::{API_KEY_VAR, ApiKeyFile, resolve_api_key};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings keys accepted from `VITY_*` environment variables. Session markers
/// share the prefix and must not leak into settings.
const ENV_KEYS: [&str; 6] = [
    "model",
    "base_url",
    "timeout_secs",
    "history_file",
    "profile_file",
    "data_dir",
];

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VityConfig {
    /// Chat-completions model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (anything OpenAI-compatible).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout for a model call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Shell persistent-history file. Defaults to `~/.bash_history`.
    #[serde(default)]
    pub history_file: Option<PathBuf>,

    /// Shell profile receiving the integration block. Defaults to `~/.bashrc`.
    #[serde(default)]
    pub profile_file: Option<PathBuf>,

    /// Root for session logs and chats. Defaults to `~/.local/share/vity`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for VityConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            history_file: None,
            profile_file: None,
            data_dir: None,
        }
    }
}

impl VityConfig {
    /// Load settings from all sources and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] for unreadable sources and
    /// [`ConfigError::InvalidValue`] for out-of-range values.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = config_dir().map(|dir| dir.join("config.toml")) {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        figment.merge(Env::prefixed("VITY_").split("__").only(&ENV_KEYS))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn history_file_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".bash_history")))
    }

    #[must_use]
    pub fn profile_file_path(&self) -> Option<PathBuf> {
        self.profile_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".bashrc")))
    }

    #[must_use]
    pub fn data_dir_path(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(|| {
            dirs::home_dir().map(|home| home.join(".local").join("share").join("vity"))
        })
    }
}

/// `~/.config/vity`, home of the key file and `config.toml`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("vity"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VityConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = VityConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "timeout_secs"
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = VityConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_paths_override_home_defaults() {
        let config = VityConfig {
            profile_file: Some(PathBuf::from("/tmp/profile")),
            ..Default::default()
        };
        assert_eq!(config.profile_file_path(), Some(PathBuf::from("/tmp/profile")));
    }
}
