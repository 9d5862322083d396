use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile file not found: {0}")]
    ProfileMissing(PathBuf),
    #[error("failed to start capture command '{program}': {source}")]
    CaptureSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("a recording session is already active (log: {0})")]
    AlreadyRecording(PathBuf),
    #[error("no recording session is active")]
    NotRecording,
}
