//! # vity-history
//!
//! File I/O for everything Vity remembers between invocations:
//! - Terminal logs written by the capture subprocess (read-only here)
//! - Chat transcripts, rewritten wholesale on every turn
//! - The shell's persistent history file, appended one line per command
//!
//! Missing or malformed inputs degrade to empty values and surface as a
//! [`HistoryWarning`] next to the value instead of an error. No locking is
//! performed; every file is treated as single-writer.

mod chat;
mod error;
mod shell_history;
mod terminal_log;

pub use chat::{load_chat_history, save_chat_history};
pub use error::{HistoryError, HistoryWarning};
pub use shell_history::{GENERATED_SUFFIX, append_shell_history_line};
pub use terminal_log::load_terminal_log;

/// A value loaded with a fallback policy, plus the warning raised when the
/// fallback kicked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    pub warning: Option<HistoryWarning>,
}

impl<T> Loaded<T> {
    pub(crate) const fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub(crate) fn degraded(value: T, warning: HistoryWarning) -> Self {
        tracing::warn!(%warning, "falling back to empty value");
        Self {
            value,
            warning: Some(warning),
        }
    }
}
