//! Model client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider answered without any choices or content.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// A `do` reply did not decode as a command object.
    #[error("parse error: {0}")]
    Parse(String),
}
