//! Chat transcript types.
//!
//! A transcript is persisted as a JSON array of
//! `{"role": "user"|"assistant", "content": [{"type": "text", "text": "..."}]}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Role;

const TEXT_PART: &str = "text";

fn text_part_kind() -> String {
    String::from(TEXT_PART)
}

/// One part of a message body. Only `text` parts are produced today; other
/// kinds are carried through untouched, including fields Vity does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type", default = "text_part_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentPart {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: text_part_kind(),
            text: Some(text.into()),
            extra: Map::new(),
        }
    }

    /// The part's text, `""` for parts without any.
    #[must_use]
    pub fn as_text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// A single chat turn. Immutable once appended to a [`ChatHistory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::text(text)],
        }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentPart::text(text)],
        }
    }

    /// Text of the first content part, or `""` when the message has no parts.
    #[must_use]
    pub fn first_text(&self) -> &str {
        self.content.first().map_or("", ContentPart::as_text)
    }

    /// All parts carrying text, joined with newlines.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Ordered conversation transcript. Insertion order is conversation order and
/// the history only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Most recent message authored by the assistant, scanning from the end.
    #[must_use]
    pub fn last_assistant(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Assistant)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }
}

impl From<Vec<ChatMessage>> for ChatHistory {
    fn from(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }
}

impl<'a> IntoIterator for &'a ChatHistory {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_to_documented_shape() {
        let history = ChatHistory::from(vec![ChatMessage::user("hi")]);
        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(
            value,
            json!([{"role": "user", "content": [{"type": "text", "text": "hi"}]}])
        );
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let message: ChatMessage = serde_json::from_str(r#"{"role": "assistant"}"#).unwrap();
        assert!(message.content.is_empty());
        assert_eq!(message.first_text(), "");
    }

    #[test]
    fn part_without_text_reads_as_empty() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role": "assistant", "content": [{}]}"#).unwrap();
        assert_eq!(message.first_text(), "");
        assert_eq!(message.content[0].kind, "text");
    }

    #[test]
    fn unknown_part_fields_survive_a_save() {
        let raw = json!([{
            "role": "user",
            "content": [
                {"type": "text", "text": "what is this?"},
                {
                    "type": "image_url",
                    "image_url": {"url": "file:///tmp/shot.png"},
                    "detail": "low"
                }
            ]
        }]);

        let history: ChatHistory = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(history.messages()[0].content[1].kind, "image_url");
        assert_eq!(history.messages()[0].content[1].as_text(), "");
        assert_eq!(serde_json::to_value(&history).unwrap(), raw);
    }

    #[test]
    fn last_assistant_prefers_latest() {
        let history = ChatHistory::from(vec![
            ChatMessage::user("one"),
            ChatMessage::assistant("first"),
            ChatMessage::user("two"),
            ChatMessage::assistant("second"),
        ]);
        assert_eq!(history.last_assistant().unwrap().first_text(), "second");
    }

    #[test]
    fn last_assistant_skips_trailing_user() {
        let history = ChatHistory::from(vec![
            ChatMessage::assistant("reply"),
            ChatMessage::user("follow-up"),
        ]);
        assert_eq!(history.last_assistant().unwrap().first_text(), "reply");
    }

    #[test]
    fn joined_text_spans_parts() {
        let message = ChatMessage {
            role: Role::User,
            content: vec![ContentPart::text("a"), ContentPart::text("b")],
        };
        assert_eq!(message.joined_text(), "a\nb");
    }
}
