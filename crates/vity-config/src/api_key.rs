//! The `~/.config/vity/.env` key file.
//!
//! Holds a single `OPENAI_API_KEY=<value>` line. Its presence alone means
//! "configured". The file is parsed with dotenvy but never loaded into the
//! process environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable (and key-file entry) carrying the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const KEY_FILE_NAME: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyFile {
    path: PathBuf,
}

impl ApiKeyFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.config/vity/.env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] if the home directory is unknown.
    pub fn default_location() -> Result<Self, ConfigError> {
        crate::config_dir()
            .map(|dir| Self::new(dir.join(KEY_FILE_NAME)))
            .ok_or(ConfigError::NoHomeDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether setup has happened. Content is not inspected.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the key from the file, if present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyFile`] if the file exists but cannot be parsed.
    pub fn read(&self) -> Result<Option<String>, ConfigError> {
        if !self.exists() {
            return Ok(None);
        }

        let key_file_error = |reason: String| ConfigError::KeyFile {
            path: self.path.clone(),
            reason,
        };
        let entries =
            dotenvy::from_path_iter(&self.path).map_err(|e| key_file_error(e.to_string()))?;
        for entry in entries {
            let (key, value) = entry.map_err(|e| key_file_error(e.to_string()))?;
            if key == API_KEY_VAR && !value.trim().is_empty() {
                return Ok(Some(value.trim().to_string()));
            }
        }
        Ok(None)
    }

    /// Write the key file, creating `~/.config/vity` as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty key and
    /// [`ConfigError::Io`] on filesystem failure.
    pub fn write(&self, api_key: &str) -> Result<(), ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: API_KEY_VAR.to_string(),
                reason: "API key is required".to_string(),
            });
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, format!("{API_KEY_VAR}={api_key}\n")).map_err(|source| {
            ConfigError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }
        Ok(())
    }

    /// Delete the key file. Returns `false` if there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be removed.
    pub fn remove(&self) -> Result<bool, ConfigError> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(true)
    }
}

/// Resolve the API key: `OPENAI_API_KEY` from the environment, then the key file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] if neither source has a key.
pub fn resolve_api_key(file: &ApiKeyFile) -> Result<String, ConfigError> {
    resolve_api_key_with(std::env::var(API_KEY_VAR).ok(), file)
}

fn resolve_api_key_with(
    env_value: Option<String>,
    file: &ApiKeyFile,
) -> Result<String, ConfigError> {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Ok(value.trim().to_string());
    }
    file.read()?.ok_or(ConfigError::MissingApiKey)
}
