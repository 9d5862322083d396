//! # vity-shell
//!
//! Everything that touches the user's shell:
//! - Idempotent install/reinstall of the integration block in a profile file
//! - The recording session state machine around the terminal-capture subprocess
//!
//! The capture subprocess owns the terminal for the whole session, so the
//! recorder is blocking and uses `std::process` directly.

mod error;
mod installer;
mod recorder;
mod script;

pub use error::ShellError;
pub use installer::{InstallOutcome, ReinstallReport, install, reinstall, remove_blocks};
pub use recorder::{CaptureCommand, RecordingSummary, SessionPaths, SessionRecorder};
pub use script::{BLOCK_END, INTEGRATION_MARKER, integration_block};
