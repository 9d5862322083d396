//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// No API key in the environment or the key file.
    #[error("OpenAI API key is not configured; set OPENAI_API_KEY or run `vity do` to set it up")]
    MissingApiKey,

    /// The key file exists but could not be read or parsed.
    #[error("failed to read key file {path}: {reason}")]
    KeyFile { path: PathBuf, reason: String },

    /// Filesystem failure while writing or removing configuration.
    #[error("config io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The home directory could not be determined.
    #[error("home directory not found")]
    NoHomeDir,

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
