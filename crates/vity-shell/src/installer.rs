//! Idempotent insertion and removal of the integration block.
//!
//! A block runs from a line whose trimmed content is [`INTEGRATION_MARKER`]
//! through the next line whose trimmed content is exactly [`BLOCK_END`]. The
//! removal is line-based and does not understand shell syntax: a lone `}` line
//! inside a block ends the removal early.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::ShellError;
use crate::script::{BLOCK_END, INTEGRATION_MARKER, integration_block};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ReinstallReport {
    /// Number of marker lines dropped before reinstalling.
    pub removed_blocks: usize,
    pub outcome: InstallOutcome,
}

/// Append the integration block to `profile` unless the marker is already there.
///
/// # Errors
///
/// Returns [`ShellError::ProfileMissing`] if `profile` does not exist; the file
/// is never created.
pub fn install(profile: &Path) -> Result<InstallOutcome, ShellError> {
    if !profile.exists() {
        return Err(ShellError::ProfileMissing(profile.to_path_buf()));
    }

    let content = fs::read_to_string(profile)?;
    if has_marker_line(&content) {
        tracing::debug!(profile = %profile.display(), "integration already present");
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    let mut file = OpenOptions::new().append(true).open(profile)?;
    write!(file, "\n\n{}", integration_block())?;
    tracing::debug!(profile = %profile.display(), "integration block appended");
    Ok(InstallOutcome::Installed)
}

/// Whether some line of `content` is exactly the marker once trimmed. A marker
/// mentioned inside another line does not count.
fn has_marker_line(content: &str) -> bool {
    content
        .lines()
        .any(|line| line.trim() == INTEGRATION_MARKER)
}

/// Strip every integration block from `profile`, then install a fresh one.
///
/// Lines outside the removed blocks are written back verbatim and in order.
///
/// # Errors
///
/// Returns [`ShellError::ProfileMissing`] if `profile` does not exist.
pub fn reinstall(profile: &Path) -> Result<ReinstallReport, ShellError> {
    if !profile.exists() {
        return Err(ShellError::ProfileMissing(profile.to_path_buf()));
    }

    let content = fs::read_to_string(profile)?;
    let (cleaned, removed_blocks) = remove_blocks(&content);
    if removed_blocks > 0 {
        tracing::debug!(
            profile = %profile.display(),
            removed_blocks,
            "removed existing integration"
        );
    }
    fs::write(profile, cleaned)?;

    let outcome = install(profile)?;
    Ok(ReinstallReport {
        removed_blocks,
        outcome,
    })
}

/// Drop every block from `content`, returning the remaining text and how many
/// marker lines were seen.
#[must_use]
pub fn remove_blocks(content: &str) -> (String, usize) {
    let mut kept = Vec::new();
    let mut inside_block = false;
    let mut removed = 0usize;

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed == INTEGRATION_MARKER {
            inside_block = true;
            removed += 1;
            continue;
        }
        if inside_block {
            if trimmed == BLOCK_END {
                inside_block = false;
            }
            continue;
        }
        kept.push(line);
    }

    (kept.join("\n"), removed)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn remove_blocks_without_marker_is_identity() {
        let content = "export A=1\nif true; then\n}\nfi\n";
        assert_eq!(remove_blocks(content), (content.to_string(), 0));
    }

    #[test]
    fn remove_blocks_drops_marker_through_closing_line() {
        let content = "before\n# Vity shell integration\nvity() {\n  echo x\n}\nafter";
        assert_eq!(remove_blocks(content), ("before\nafter".to_string(), 1));
    }

    #[test]
    fn indented_marker_and_brace_still_match() {
        let content = "a\n  # Vity shell integration  \nbody\n   }   \nb";
        assert_eq!(remove_blocks(content).0, "a\nb");
    }

    #[test]
    fn unterminated_block_drops_rest_of_file() {
        let content = "keep\n# Vity shell integration\nvity() {\n  echo x";
        assert_eq!(remove_blocks(content).0, "keep");
    }

    #[test]
    fn crlf_lines_are_matched_after_trim() {
        let content = "keep\r\n# Vity shell integration\r\nbody\r\n}\r\nalso";
        assert_eq!(remove_blocks(content).0, "keep\r\nalso");
    }
}
