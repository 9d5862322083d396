//! Chat-completions wire types and reply decoding.

use serde::{Deserialize, Serialize};
use vity_core::response::{COMMENT_DELIMITER, GENERATED_ANNOTATION};
use vity_core::{InteractionMode, ModelRequest};

use crate::error::LlmError;
use crate::prompt::system_message;

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Structured `do` reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandReply {
    pub command: String,
    #[serde(default)]
    pub comment: String,
}

impl CommandReply {
    /// Transcript form: `"<command> # <comment> * vity generated command"`.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}{COMMENT_DELIMITER}{}{GENERATED_ANNOTATION}",
            self.command.trim(),
            self.comment.trim()
        )
    }
}

/// Build the provider request: system prompt (with session context), the prior
/// transcript role-tagged, then the new user turn.
#[must_use]
pub fn build_request(model: &str, request: &ModelRequest) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    messages.push(WireMessage {
        role: "system",
        content: system_message(request),
    });
    messages.extend(request.messages.iter().map(|message| WireMessage {
        role: message.role.as_str(),
        content: message.joined_text(),
    }));

    let response_format = match request.mode {
        InteractionMode::Do => Some(ResponseFormat {
            kind: "json_object",
        }),
        InteractionMode::Chat => None,
    };

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        response_format,
    }
}

/// Turn raw reply content into transcript text for `mode`.
pub(crate) fn decode_reply(mode: InteractionMode, content: &str) -> Result<String, LlmError> {
    match mode {
        InteractionMode::Chat => Ok(content.to_string()),
        InteractionMode::Do => {
            let reply: CommandReply = serde_json::from_str(content.trim())
                .map_err(|e| LlmError::Parse(format!("command reply: {e}")))?;
            if reply.command.trim().is_empty() {
                return Err(LlmError::Parse("command reply has an empty command".into()));
            }
            Ok(reply.render())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vity_core::{ChatHistory, ChatMessage, GeneratedCommand, assemble};

    use super::*;

    #[test]
    fn request_orders_system_history_then_user() {
        let history = ChatHistory::from(vec![
            ChatMessage::user("before"),
            ChatMessage::assistant("reply"),
        ]);
        let request = assemble("", history, "now", InteractionMode::Chat);
        let wire = build_request("gpt-4o-mini", &request);

        let roles = wire.messages.iter().map(|m| m.role).collect::<Vec<_>>();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(wire.messages[3].content, "now");
        assert!(wire.response_format.is_none());
    }

    #[test]
    fn do_mode_requests_json_object() {
        let request = assemble("", ChatHistory::new(), "list", InteractionMode::Do);
        let wire = build_request("gpt-4o-mini", &request);
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["model"], "gpt-4o-mini");
    }

    #[test]
    fn rendered_command_parses_back() {
        let text = decode_reply(
            InteractionMode::Do,
            r#"{"command": "ls -la", "comment": "list files"}"#,
        )
        .unwrap();
        assert_eq!(text, "ls -la # list files * vity generated command");
        assert_eq!(GeneratedCommand::parse(&text).canonical(), "ls -la # list files");
    }

    #[test]
    fn chat_reply_passes_through() {
        let text = decode_reply(InteractionMode::Chat, "  plain answer\n").unwrap();
        assert_eq!(text, "  plain answer\n");
    }

    #[test]
    fn malformed_command_reply_is_parse_error() {
        assert!(matches!(
            decode_reply(InteractionMode::Do, "ls -la"),
            Err(LlmError::Parse(_))
        ));
        assert!(matches!(
            decode_reply(InteractionMode::Do, r#"{"command": "  "}"#),
            Err(LlmError::Parse(_))
        ));
    }

    #[test]
    fn completion_without_content_deserializes() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }
}
