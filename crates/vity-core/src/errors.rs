//! Cross-cutting error types for Vity.
//!
//! Domain-specific errors (`HistoryError`, `LlmError`, `ShellError`) live in
//! their respective crates. The binary converges them through `anyhow`.

use thiserror::Error;

use crate::enums::Role;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The model client failed; nothing from this turn is persisted.
    #[error("model call failed: {0}")]
    ModelCallFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The model client returned a message that is not an assistant reply.
    #[error("model returned a {0} message, expected assistant")]
    UnexpectedRole(Role),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
