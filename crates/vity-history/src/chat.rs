use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use vity_core::ChatHistory;

use crate::Loaded;
use crate::error::{HistoryError, HistoryWarning};

/// Load a chat transcript.
///
/// A missing file is a first use and yields an empty history silently. Content
/// that does not parse as a transcript yields an empty history and a warning;
/// the file itself is not touched.
///
/// # Errors
///
/// Returns [`HistoryError::Read`] for read failures other than "not found".
pub fn load_chat_history(path: &Path) -> Result<Loaded<ChatHistory>, HistoryError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no chat history yet");
            return Ok(Loaded::clean(ChatHistory::new()));
        }
        Err(source) => {
            return Err(HistoryError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_slice::<ChatHistory>(&bytes) {
        Ok(history) => {
            tracing::debug!(
                path = %path.display(),
                messages = history.len(),
                "loaded chat history"
            );
            Ok(Loaded::clean(history))
        }
        Err(error) => Ok(Loaded::degraded(
            ChatHistory::new(),
            HistoryWarning::ChatFileMalformed {
                path: path.to_path_buf(),
                reason: error.to_string(),
            },
        )),
    }
}

/// Overwrite `path` with the full transcript, pretty-printed with two-space
/// indentation.
///
/// This is a wholesale rewrite, not an append: the whole transcript is held in
/// memory and written every turn, and concurrent writers race (last one wins).
///
/// # Errors
///
/// Returns [`HistoryError::Write`] if the file cannot be written.
pub fn save_chat_history(path: &Path, history: &ChatHistory) -> Result<(), HistoryError> {
    let rendered = serde_json::to_string_pretty(history)?;
    fs::write(path, rendered).map_err(|source| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), messages = history.len(), "saved chat history");
    Ok(())
}
