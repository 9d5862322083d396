//! Command/comment extraction from model replies.
//!
//! The `do` mode reply convention is `"<command> # <comment> * vity generated command"`.
//! Splitting on `" # "` is a best-effort heuristic: a command that itself
//! contains `" # "` is split at its first occurrence.

use serde::Serialize;

use crate::chat::ChatHistory;

/// Separator between the command and its comment.
pub const COMMENT_DELIMITER: &str = " # ";

/// Annotation the model client appends to generated commands.
pub const GENERATED_ANNOTATION: &str = " * vity generated command";

/// A command split out of an assistant reply. Ephemeral; only its canonical
/// string is ever written anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCommand {
    pub command_text: String,
    pub comment_text: Option<String>,
}

impl GeneratedCommand {
    /// Parse reply text.
    ///
    /// With a delimiter, everything left of the first `" # "` is the command and
    /// everything right of it, minus [`GENERATED_ANNOTATION`], is the comment.
    /// Without one, the whole text is the command.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.split_once(COMMENT_DELIMITER) {
            Some((command, rest)) => Self {
                command_text: command.to_string(),
                comment_text: Some(rest.replace(GENERATED_ANNOTATION, "")),
            },
            None => Self {
                command_text: text.to_string(),
                comment_text: None,
            },
        }
    }

    /// `"<command> # <comment>"`, or the bare command when there is no comment.
    #[must_use]
    pub fn canonical(&self) -> String {
        match &self.comment_text {
            Some(comment) => format!("{}{COMMENT_DELIMITER}{comment}", self.command_text),
            None => self.command_text.clone(),
        }
    }

    #[must_use]
    pub const fn has_comment(&self) -> bool {
        self.comment_text.is_some()
    }
}

/// Parse the first text part of the most recent assistant message.
///
/// Returns `None` when the history holds no assistant message.
#[must_use]
pub fn extract_command(history: &ChatHistory) -> Option<GeneratedCommand> {
    history
        .last_assistant()
        .map(|message| GeneratedCommand::parse(message.first_text()))
}

/// Raw first text part of the most recent assistant message, for `chat` mode.
#[must_use]
pub fn extract_reply(history: &ChatHistory) -> Option<&str> {
    history.last_assistant().map(|message| message.first_text())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::chat::{ChatMessage, ContentPart};
    use crate::enums::Role;

    #[test]
    fn splits_command_and_strips_annotation() {
        let parsed = GeneratedCommand::parse("ls -la # list files * vity generated command");
        assert_eq!(parsed.command_text, "ls -la");
        assert_eq!(parsed.comment_text.as_deref(), Some("list files"));
        assert_eq!(parsed.canonical(), "ls -la # list files");
    }

    #[test]
    fn text_without_delimiter_is_the_command() {
        let parsed = GeneratedCommand::parse("hello there");
        assert_eq!(parsed.command_text, "hello there");
        assert_eq!(parsed.comment_text, None);
        assert_eq!(parsed.canonical(), "hello there");
    }

    #[rstest]
    #[case("git status # show tree", "git status", "show tree")]
    #[case("echo a # b # c", "echo a", "b # c")]
    #[case("df -h # disk usage", "df -h", "disk usage")]
    #[case(" # only comment * vity generated command", "", "only comment")]
    fn splits_on_first_delimiter(
        #[case] text: &str,
        #[case] command: &str,
        #[case] comment: &str,
    ) {
        let parsed = GeneratedCommand::parse(text);
        assert_eq!(parsed.command_text, command);
        assert_eq!(parsed.comment_text.as_deref(), Some(comment));
        assert_eq!(parsed.canonical(), format!("{command} # {comment}"));
    }

    #[test]
    fn hash_without_spaces_is_not_a_delimiter() {
        let parsed = GeneratedCommand::parse("echo '#hashtag'");
        assert!(!parsed.has_comment());
    }

    #[test]
    fn empty_text_degrades_to_empty_command() {
        let parsed = GeneratedCommand::parse("");
        assert_eq!(parsed.canonical(), "");
    }

    #[test]
    fn extraction_selects_latest_assistant() {
        let history = ChatHistory::from(vec![
            ChatMessage::user("first ask"),
            ChatMessage::assistant("ls # old * vity generated command"),
            ChatMessage::user("second ask"),
            ChatMessage::assistant("pwd # where am i * vity generated command"),
        ]);
        let command = extract_command(&history).unwrap();
        assert_eq!(command.canonical(), "pwd # where am i");
    }

    #[test]
    fn extraction_without_assistant_yields_nothing() {
        let history = ChatHistory::from(vec![ChatMessage::user("hello")]);
        assert!(extract_command(&history).is_none());
        assert!(extract_reply(&history).is_none());
    }

    #[test]
    fn extraction_from_empty_content_is_empty_string() {
        let history = ChatHistory::from(vec![ChatMessage {
            role: Role::Assistant,
            content: Vec::new(),
        }]);
        assert_eq!(extract_reply(&history), Some(""));
        assert_eq!(extract_command(&history).unwrap().canonical(), "");
    }

    #[test]
    fn reply_uses_only_first_part() {
        let history = ChatHistory::from(vec![ChatMessage {
            role: Role::Assistant,
            content: vec![ContentPart::text("first"), ContentPart::text("second")],
        }]);
        assert_eq!(extract_reply(&history), Some("first"));
    }
}
