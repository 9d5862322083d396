//! `vity record`.

use anyhow::Context;
use vity_core::session::{PROMPT_VAR, RECORDING_INDICATOR};
use vity_shell::{CaptureCommand, SessionRecorder};

use crate::bootstrap;

pub fn handle() -> anyhow::Result<()> {
    let current = super::session_from_env();
    if let Some(log) = &current.active_log_path {
        anyhow::bail!(
            "a recording session is already active (log: {}); type 'exit' to stop it first",
            log.display()
        );
    }

    let config = bootstrap::load_config()?;
    let data_dir = config
        .data_dir_path()
        .context("cannot locate data directory: home directory unknown")?;
    let saved_prompt =
        std::env::var_os(PROMPT_VAR).map(|prompt| prompt.to_string_lossy().into_owned());

    print!("{}", opening_banner());

    let mut recorder = SessionRecorder::new(data_dir, CaptureCommand::script());
    let summary = recorder.record(saved_prompt)?;
    tracing::debug!(
        log = %summary.paths.log.display(),
        exit_code = ?summary.exit_code,
        "capture finished"
    );

    print!("{}", closing_banner());
    Ok(())
}

/// Terminal title plus instructions, shown before the capture starts.
fn opening_banner() -> String {
    format!(
        "\x1b]0;{RECORDING_INDICATOR} RECORDING - Vity Session\x07\
         {RECORDING_INDICATOR} Starting recording session\n\
         📝 Use 'vity do' or 'vity chat' for contextual help\n\
         🛑 Type 'exit' to stop recording\n"
    )
}

/// The terminal title is left as the session set it.
fn closing_banner() -> String {
    String::from("🟢 Recording session ended\n")
}
