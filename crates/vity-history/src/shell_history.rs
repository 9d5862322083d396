use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::HistoryError;

/// Annotation appended to every injected history line.
pub const GENERATED_SUFFIX: &str = " # Vity generated";

/// Append `line` plus [`GENERATED_SUFFIX`] to the shell's persistent history.
///
/// Returns `false` without touching anything when the history file does not
/// exist; Vity never creates it.
///
/// # Errors
///
/// Returns [`HistoryError::Write`] if the existing file cannot be appended to.
pub fn append_shell_history_line(history_file: &Path, line: &str) -> Result<bool, HistoryError> {
    if !history_file.exists() {
        tracing::debug!(path = %history_file.display(), "shell history file absent; skipping");
        return Ok(false);
    }

    let write_error = |source| HistoryError::Write {
        path: history_file.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .append(true)
        .open(history_file)
        .map_err(write_error)?;
    writeln!(file, "{line}{GENERATED_SUFFIX}").map_err(write_error)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn appends_annotated_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bash_history");
        fs::write(&path, "cd /tmp\n").unwrap();

        assert!(append_shell_history_line(&path, "ls -la # list files").unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "cd /tmp\nls -la # list files # Vity generated\n"
        );
    }

    #[test]
    fn missing_history_file_is_a_silent_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bash_history");

        assert!(!append_shell_history_line(&path, "ls").unwrap());
        assert!(!path.exists());
    }
}
