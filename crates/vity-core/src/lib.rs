//! # vity-core
//!
//! Core types shared across all Vity crates:
//! - Chat transcript types (`ChatMessage`, `ContentPart`, `ChatHistory`)
//! - Interaction modes and the explicit recording `Session` value
//! - Command/comment extraction from model replies
//! - Context assembly and the `ModelClient` seam used by generation
//! - Cross-cutting error types

pub mod chat;
pub mod context;
pub mod enums;
pub mod errors;
pub mod response;
pub mod session;

pub use chat::{ChatHistory, ChatMessage, ContentPart};
pub use context::{ModelClient, ModelRequest, assemble, generate};
pub use enums::{InteractionMode, Role};
pub use errors::CoreError;
pub use response::{GeneratedCommand, extract_command, extract_reply};
pub use session::{Session, SessionState};
