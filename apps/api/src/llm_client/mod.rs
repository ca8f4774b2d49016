/// LLM Client: the single point of entry for chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the model endpoint directly.
/// All LLM interactions MUST go through this module.
///
/// One attempt per call. Callers decide what a failure means; the recommendation
/// resolver falls back instead of retrying.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::LlmConfig;

pub mod prompts;

/// Response budget for a single completion.
pub const MAX_TOKENS: u32 = 1200;
/// Fixed sampling temperature for controlled variability.
pub const TEMPERATURE: f32 = 0.7;

const REFERER: &str = "https://career-guidance-ai.onrender.com";
const APP_TITLE: &str = "AI Career Guidance Assistant";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a prompt into free-form completion text.
///
/// The resolver holds an `Option<Arc<dyn ChatModel>>`; `LlmClient` is the production
/// implementation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client for an OpenAI-compatible endpoint (OpenRouter by default).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Makes a single call to the endpoint, returning the decoded completion envelope.
    pub async fn call(&self, prompt: &str) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let completion = self.call(prompt).await?;
        completion
            .text()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer, timeout: Duration) -> LlmClient {
        LlmClient::new(LlmConfig {
            api_key: "sk-or-test".to_string(),
            api_url: server.url("/api/v1/chat/completions"),
            model: "anthropic/claude-3.5-sonnet".to_string(),
            timeout,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/chat/completions")
                    .header("authorization", "Bearer sk-or-test")
                    .json_body_partial(
                        r#"{"model":"anthropic/claude-3.5-sonnet","max_tokens":1200}"#,
                    );
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "[]"}}],
                    "usage": {"prompt_tokens": 10, "completion_tokens": 2}
                }));
            })
            .await;

        let text = client_for(&server, Duration::from_secs(5))
            .complete("hello")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_prompt_is_sent_as_single_user_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).json_body_partial(
                    r#"{"messages":[{"role":"user","content":"recommend careers"}]}"#,
                );
                then.status(200)
                    .json_body(json!({"choices": [{"message": {"content": "ok"}}]}));
            })
            .await;

        client_for(&server, Duration::from_secs(5))
            .complete("recommend careers")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error_with_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(402)
                    .json_body(json!({"error": {"message": "Insufficient credits"}}));
            })
            .await;

        let err = client_for(&server, Duration::from_secs(5))
            .complete("hello")
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 402);
                assert_eq!(message, "Insufficient credits");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("not json at all");
            })
            .await;

        let err = client_for(&server, Duration::from_secs(5))
            .complete("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;

        let err = client_for(&server, Duration::from_secs(5))
            .complete("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({"choices": [{"message": {"content": "late"}}]}));
            })
            .await;

        let err = client_for(&server, Duration::from_millis(50))
            .complete("hello")
            .await
            .unwrap_err();
        assert!(
            matches!(&err, LlmError::Http(e) if e.is_timeout()),
            "expected timeout, got {err:?}"
        );
    }
}
