//! The recording session as an explicit value.
//!
//! A session only exists as environment markers on the recorded subshell. The
//! CLI edge turns those markers into a [`Session`] once; core logic never reads
//! the environment itself.

use std::fmt;
use std::path::{Path, PathBuf};

/// Path of the terminal log being captured.
pub const ACTIVE_LOG_VAR: &str = "VITY_ACTIVE_LOG";
/// Path of the chat transcript paired with the active log.
pub const ACTIVE_CHAT_VAR: &str = "VITY_ACTIVE_CHAT";
/// Recording indicator shown in the prompt.
pub const RECORDING_VAR: &str = "VITY_RECORDING";
/// Prompt in effect before the recording started.
pub const SAVED_PROMPT_VAR: &str = "VITY_OLD_PS1";
/// Shell prompt variable.
pub const PROMPT_VAR: &str = "PS1";

/// Prompt prefix while recording.
pub const RECORDING_INDICATOR: &str = "🔴";

/// ```text
/// Idle --start--> Recording --capture exits--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Recording => f.write_str("recording"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub active_log_path: Option<PathBuf>,
    pub active_chat_path: Option<PathBuf>,
    pub recording: bool,
    pub saved_prompt: Option<String>,
}

impl Session {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn recording(log_path: PathBuf, chat_path: PathBuf, saved_prompt: Option<String>) -> Self {
        Self {
            active_log_path: Some(log_path),
            active_chat_path: Some(chat_path),
            recording: true,
            saved_prompt,
        }
    }

    /// Rebuild a session from environment markers.
    ///
    /// An active log path alone is enough to count as recording.
    pub fn from_markers<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut session = Self::idle();
        for (key, value) in vars {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                ACTIVE_LOG_VAR => session.active_log_path = Some(PathBuf::from(value)),
                ACTIVE_CHAT_VAR => session.active_chat_path = Some(PathBuf::from(value)),
                SAVED_PROMPT_VAR => session.saved_prompt = Some(value),
                _ => {}
            }
        }
        session.recording = session.active_log_path.is_some();
        session
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.recording {
            SessionState::Recording
        } else {
            SessionState::Idle
        }
    }

    /// Markers to export into the recorded subshell.
    ///
    /// Empty when idle: an idle session never sets markers.
    #[must_use]
    pub fn markers(&self) -> Vec<(&'static str, String)> {
        let (Some(log), Some(chat)) = (&self.active_log_path, &self.active_chat_path) else {
            return Vec::new();
        };
        if !self.recording {
            return Vec::new();
        }

        let saved = self.saved_prompt.clone().unwrap_or_default();
        vec![
            (ACTIVE_LOG_VAR, log.to_string_lossy().into_owned()),
            (ACTIVE_CHAT_VAR, chat.to_string_lossy().into_owned()),
            (RECORDING_VAR, RECORDING_INDICATOR.to_string()),
            (SAVED_PROMPT_VAR, saved.clone()),
            (PROMPT_VAR, format!("{RECORDING_INDICATOR} {saved}")),
        ]
    }

    /// Context files for `do`/`chat` routing: both paths, and only while the
    /// log actually exists on disk.
    #[must_use]
    pub fn context_files(&self) -> Option<(&Path, &Path)> {
        match (&self.active_log_path, &self.active_chat_path) {
            (Some(log), Some(chat)) if self.recording && log.is_file() => {
                Some((log.as_path(), chat.as_path()))
            }
            _ => None,
        }
    }
}
