//! System prompts per interaction mode.

use vity_core::{InteractionMode, ModelRequest};

const DO_PROMPT: &str = "You are Vity, a terminal assistant. Turn the user's request into a single \
shell command for their current environment. Reply with a JSON object \
{\"command\": string, \"comment\": string} where `command` is the exact command line to run \
and `comment` is a short plain-language description of what it does. Never wrap the command \
in markdown.";

const CHAT_PROMPT: &str = "You are Vity, a terminal assistant. Answer questions about the \
user's terminal session, shell usage and programming concisely. Prefer short answers with \
runnable examples.";

/// System message for `request`, with the terminal log appended verbatim when
/// a recording is in progress.
pub fn system_message(request: &ModelRequest) -> String {
    let base = match request.mode {
        InteractionMode::Do => DO_PROMPT,
        InteractionMode::Chat => CHAT_PROMPT,
    };
    if request.has_terminal_context() {
        format!(
            "{base}\n\nRecorded terminal session (most recent output last):\n{}",
            request.terminal_log
        )
    } else {
        base.to_string()
    }
}
