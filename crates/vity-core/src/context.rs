//! Context assembly and the model-client seam.
//!
//! The model input is the prior transcript (role-tagged), the terminal log
//! verbatim as session context, and the new user utterance tagged with the
//! requested mode. Nothing is truncated or summarized: the full log and the
//! full transcript travel on every call.

use std::future::Future;

use crate::chat::{ChatHistory, ChatMessage};
use crate::enums::{InteractionMode, Role};
use crate::errors::CoreError;

/// Assembled model input. Opaque to the assembler; the client decides how to
/// render it for its provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub mode: InteractionMode,
    /// Recorded terminal output, verbatim. Empty when no session is active.
    pub terminal_log: String,
    /// Prior transcript followed by the new user turn.
    pub messages: ChatHistory,
}

impl ModelRequest {
    /// The new user turn (always the last message).
    #[must_use]
    pub fn user_message(&self) -> Option<&ChatMessage> {
        self.messages
            .last()
            .filter(|message| message.role == Role::User)
    }

    #[must_use]
    pub fn has_terminal_context(&self) -> bool {
        !self.terminal_log.trim().is_empty()
    }
}

/// A language-model backend: takes the assembled context, returns one reply.
pub trait ModelClient {
    type Error: std::error::Error + Send + Sync + 'static;

    fn respond(
        &self,
        request: &ModelRequest,
    ) -> impl Future<Output = Result<ChatMessage, Self::Error>> + Send;
}

/// Build the model input from the terminal log, the prior transcript and the
/// new user text.
#[must_use]
pub fn assemble(
    terminal_log: &str,
    history: ChatHistory,
    user_text: &str,
    mode: InteractionMode,
) -> ModelRequest {
    let mut messages = history;
    messages.push(ChatMessage::user(user_text));
    ModelRequest {
        mode,
        terminal_log: terminal_log.to_string(),
        messages,
    }
}

/// Assemble context, call the model, and return the updated transcript.
///
/// The returned history is the assembled one plus exactly one `assistant`
/// message. On failure nothing is returned, so callers persist nothing.
///
/// # Errors
///
/// Returns [`CoreError::ModelCallFailed`] if the client fails and
/// [`CoreError::UnexpectedRole`] if it answers with a non-assistant message.
pub async fn generate<C: ModelClient + Sync>(
    client: &C,
    terminal_log: &str,
    history: ChatHistory,
    user_text: &str,
    mode: InteractionMode,
) -> Result<ChatHistory, CoreError> {
    let request = assemble(terminal_log, history, user_text, mode);
    tracing::debug!(
        %mode,
        prior_messages = request.messages.len() - 1,
        terminal_log_bytes = request.terminal_log.len(),
        "requesting model reply"
    );

    let reply = client
        .respond(&request)
        .await
        .map_err(|error| CoreError::ModelCallFailed(Box::new(error)))?;
    if reply.role != Role::Assistant {
        return Err(CoreError::UnexpectedRole(reply.role));
    }

    let mut updated = request.messages;
    updated.push(reply);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn assemble_appends_user_turn_after_history() {
        let history = ChatHistory::from(vec![
            ChatMessage::user("earlier"),
            ChatMessage::assistant("reply"),
        ]);
        let request = assemble("$ ls\nsrc\n", history, "now what", InteractionMode::Chat);

        assert_eq!(request.mode, InteractionMode::Chat);
        assert_eq!(request.terminal_log, "$ ls\nsrc\n");
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.user_message().unwrap().first_text(), "now what");
        assert!(request.has_terminal_context());
    }

    #[test]
    fn blank_log_is_not_terminal_context() {
        let request = assemble("  \n", ChatHistory::new(), "hi", InteractionMode::Do);
        assert!(!request.has_terminal_context());
    }
}
