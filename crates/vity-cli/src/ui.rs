use std::sync::OnceLock;

use crate::cli::GlobalFlags;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub quiet: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs { quiet: flags.quiet });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { quiet: false })
}

/// Progress chatter on stdout, dropped in quiet mode.
pub fn status(message: &str) {
    if !prefs().quiet {
        println!("{message}");
    }
}

/// Non-fatal problem, always shown.
pub fn warn(message: impl std::fmt::Display) {
    eprintln!("⚠️  Warning: {message}");
}
