/// LLM Client — the single point of entry for generative-AI calls in Teamsmith.
///
/// Only the document analyzer uses it today. No other module may call the
/// Anthropic API directly.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded so every analysis runs against the same model.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

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

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Text of the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
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

/// Messages API client with retry and JSON-output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// One completion. Transport failures, 429 and 5xx responses are retried
    /// with exponential backoff; the last failure is returned.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 0;
        loop {
            if let Some(delay) = backoff_delay(attempt) {
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying LLM call"
                );
                tokio::time::sleep(delay).await;
            }

            match self.send_once(&body).await {
                Err(err) if is_retryable(&err) && attempt + 1 < MAX_RETRIES => {
                    warn!(attempt, "LLM call failed: {err}");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn send_once(&self, body: &MessagesRequest<'_>) -> Result<LlmResponse, LlmError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: LlmResponse = response.json().await?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "LLM call succeeded"
        );
        Ok(parsed)
    }

    /// Calls the model and deserializes its text reply as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(serde_json::from_str(strip_json_fences(text))?)
    }
}

/// No delay before the first attempt, then 1s, 2s, 4s...
fn backoff_delay(attempt: u32) -> Option<Duration> {
    (attempt > 0).then(|| Duration::from_millis(1000 << (attempt - 1)))
}

/// Rate limits, server errors and failed sends. Undecodable bodies are not retried.
fn is_retryable(err: &LlmError) -> bool {
    match err {
        LlmError::Api { status, .. } => *status == 429 || *status >= 500,
        LlmError::Http(e) => !e.is_decode(),
        LlmError::Parse(_) | LlmError::EmptyContent => false,
    }
}

/// Removes a surrounding ```json / ``` fence if the model added one.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let inner = inner.trim_start();
    inner.strip_suffix("```").map(str::trim).unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"summary\": \"x\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"summary\": \"x\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"summary\": \"x\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"summary\": \"x\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"summary\": \"x\"}\n";
        assert_eq!(strip_json_fences(input), "{\"summary\": \"x\"}");
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(0), None);
        assert_eq!(backoff_delay(1), Some(Duration::from_secs(1)));
        assert_eq!(backoff_delay(2), Some(Duration::from_secs(2)));
        assert_eq!(backoff_delay(3), Some(Duration::from_secs(4)));
    }

    #[test]
    fn test_only_rate_limits_and_server_errors_retry() {
        let api = |status| LlmError::Api {
            status,
            message: String::new(),
        };
        assert!(is_retryable(&api(429)));
        assert!(is_retryable(&api(503)));
        assert!(!is_retryable(&api(400)));
        assert!(!is_retryable(&api(401)));
        assert!(!is_retryable(&LlmError::EmptyContent));
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response: LlmResponse = serde_json::from_str(
            r#"{
                "content": [
                    {"type": "tool_use"},
                    {"type": "text", "text": "{}"}
                ],
                "usage": {"input_tokens": 10, "output_tokens": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("{}"));
    }
}
