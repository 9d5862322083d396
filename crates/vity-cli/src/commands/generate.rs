//! `vity do` and `vity chat`.

use anyhow::Context;
use vity_config::VityConfig;
use vity_core::{ChatHistory, InteractionMode, extract_command, extract_reply};
use vity_history::{
    Loaded, append_shell_history_line, load_chat_history, load_terminal_log, save_chat_history,
};
use vity_llm::OpenAiClient;

use crate::bootstrap;
use crate::cli::{GlobalFlags, PromptArgs};
use crate::ui;

/// What a finished turn shows and records.
#[derive(Debug, PartialEq, Eq)]
struct Presentation {
    /// Line printed to stdout.
    printed: String,
    /// Line for the shell history file, if any.
    history_line: Option<String>,
}

pub async fn handle(
    mode: InteractionMode,
    args: &PromptArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if InteractionMode::from(flags.mode) != mode {
        tracing::debug!(%mode, "subcommand overrides --mode");
    }

    let config = bootstrap::load_config()?;
    let api_key = bootstrap::ensure_api_key()?;

    let terminal_log = match &flags.history_file {
        Some(path) => surface(load_terminal_log(path)?),
        None => String::new(),
    };
    let history = match &flags.chat_file {
        Some(path) => surface(load_chat_history(path)?),
        None => ChatHistory::new(),
    };

    ui::status("🤖 Vity is thinking...");
    let client = OpenAiClient::new(&config, api_key)?;
    let updated = vity_core::generate(&client, &terminal_log, history, &args.text(), mode)
        .await
        .context("failed to get a reply from the model")?;

    if let Some(presentation) = present(mode, &updated) {
        println!("{}", presentation.printed);
        if let Some(line) = presentation.history_line {
            record_in_shell_history(&config, &line)?;
        }
    }

    if let Some(path) = &flags.chat_file {
        save_chat_history(path, &updated)?;
    }
    Ok(())
}

fn surface<T>(loaded: Loaded<T>) -> T {
    if let Some(warning) = loaded.warning {
        ui::warn(warning);
    }
    loaded.value
}

fn present(mode: InteractionMode, history: &ChatHistory) -> Option<Presentation> {
    match mode {
        InteractionMode::Do => extract_command(history).map(|command| {
            let canonical = command.canonical();
            Presentation {
                printed: format!("Command: {canonical}"),
                history_line: command.has_comment().then_some(canonical),
            }
        }),
        InteractionMode::Chat => extract_reply(history).map(|reply| Presentation {
            printed: reply.to_string(),
            history_line: None,
        }),
    }
}

fn record_in_shell_history(config: &VityConfig, line: &str) -> anyhow::Result<()> {
    let Some(path) = config.history_file_path() else {
        tracing::debug!("no home directory; skipping shell history");
        return Ok(());
    };
    if !append_shell_history_line(&path, line)? {
        tracing::debug!(path = %path.display(), "shell history file absent; skipping");
    }
    Ok(())
}
