use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize chat history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Recoverable conditions: the caller continues with an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryWarning {
    /// The terminal log named on the command line does not exist.
    TerminalLogNotFound(PathBuf),
    /// The chat file exists but is not a valid transcript. It is left as-is
    /// until the next save overwrites it.
    ChatFileMalformed { path: PathBuf, reason: String },
}

impl fmt::Display for HistoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TerminalLogNotFound(path) => {
                write!(f, "history file '{}' not found", path.display())
            }
            Self::ChatFileMalformed { path, .. } => write!(
                f,
                "chat file '{}' contains invalid JSON, starting fresh",
                path.display()
            ),
        }
    }
}
