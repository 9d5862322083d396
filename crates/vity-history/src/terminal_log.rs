use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::Loaded;
use crate::error::{HistoryError, HistoryWarning};

/// Read a terminal log whole. A missing file yields `""` and a warning; any
/// other read failure is an error.
///
/// # Errors
///
/// Returns [`HistoryError::Read`] for failures other than "not found".
pub fn load_terminal_log(path: &Path) -> Result<Loaded<String>, HistoryError> {
    match fs::read(path) {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded terminal log");
            // Capture output carries raw terminal bytes; keep whatever decodes.
            Ok(Loaded::clean(String::from_utf8_lossy(&bytes).into_owned()))
        }
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(Loaded::degraded(
            String::new(),
            HistoryWarning::TerminalLogNotFound(path.to_path_buf()),
        )),
        Err(source) => Err(HistoryError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_is_empty_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.log");

        let loaded = load_terminal_log(&path).unwrap();
        assert!(loaded.value.is_empty());
        assert_eq!(
            loaded.warning,
            Some(HistoryWarning::TerminalLogNotFound(path))
        );
    }

    #[test]
    fn existing_log_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        fs::write(&path, "Script started\n$ make\nmake: *** No rule\n").unwrap();

        let loaded = load_terminal_log(&path).unwrap();
        assert_eq!(loaded.value, "Script started\n$ make\nmake: *** No rule\n");
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn non_utf8_bytes_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.log");
        fs::write(&path, b"ok\xff\n").unwrap();

        let loaded = load_terminal_log(&path).unwrap();
        assert!(loaded.value.starts_with("ok"));
    }

    #[test]
    fn directory_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_terminal_log(dir.path()).is_err());
    }
}
