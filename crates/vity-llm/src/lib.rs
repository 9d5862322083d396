//! # vity-llm
//!
//! The language-model client behind Vity's [`vity_core::ModelClient`] seam.
//!
//! [`OpenAiClient`] talks to an OpenAI-compatible chat-completions endpoint.
//! In `do` mode it requests a structured `{command, comment}` object and
//! renders it as `"<command> # <comment> * vity generated command"`, the form
//! the response parser expects. In `chat` mode it returns the plain reply.

mod client;
mod error;
mod payload;
mod prompt;

pub use client::OpenAiClient;
pub use error::LlmError;
pub use payload::{CommandReply, build_request};
