use std::future::Future;
use std::time::Duration;

use vity_config::VityConfig;
use vity_core::{ChatMessage, ModelClient, ModelRequest};

use crate::error::LlmError;
use crate::payload::{ChatCompletionResponse, build_request, decode_reply};

/// OpenAI-compatible chat-completions client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &VityConfig, api_key: impl Into<String>) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn complete(&self, request: &ModelRequest) -> Result<ChatMessage, LlmError> {
        let payload = build_request(&self.model, request);
        tracing::debug!(
            model = %self.model,
            mode = %request.mode,
            messages = payload.messages.len(),
            "sending chat completion"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;
        let response = check_response(response).await?;

        let body: ChatCompletionResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        decode_reply(request.mode, &content).map(ChatMessage::assistant)
    }
}

impl ModelClient for OpenAiClient {
    type Error = LlmError;

    fn respond(
        &self,
        request: &ModelRequest,
    ) -> impl Future<Output = Result<ChatMessage, Self::Error>> + Send {
        self.complete(request)
    }
}

/// Map non-success statuses to [`LlmError::Api`] with the response body.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    tracing::warn!(status, "model provider returned an error");
    Err(LlmError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        let config = VityConfig {
            base_url: "http://localhost:8080/v1/".into(),
            ..Default::default()
        };
        let client = OpenAiClient::new(&config, "sk-test").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = OpenAiClient::new(&VityConfig::default(), "sk-secret").unwrap();
        assert!(!format!("{client:?}").contains("sk-secret"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        let config = VityConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let client = OpenAiClient::new(&config, "sk-test").unwrap();
        let request = vity_core::assemble(
            "",
            vity_core::ChatHistory::new(),
            "hi",
            vity_core::InteractionMode::Chat,
        );
        let result = client.respond(&request).await;
        assert!(matches!(result, Err(LlmError::Http(_))));
    }
}
