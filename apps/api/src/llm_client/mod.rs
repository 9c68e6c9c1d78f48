/// Completion client — the single point of entry for all LLM calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion endpoint
/// directly. All LLM interactions MUST go through this module.
///
/// Model: gpt-4.1-nano (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EURI_API_URL: &str = "https://api.euron.one/api/v1/euri/chat/completions";
/// The model used for all completion calls.
pub const MODEL: &str = "gpt-4.1-nano";
/// Low temperature, favoring deterministic analysis output.
const DEFAULT_TEMPERATURE: f32 = 0.5;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed completion response: {0}")]
    Shape(String),
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: Vec<Message<'a>>,
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// The single completion client used by all services.
/// One request-response exchange per call — no retries, no streaming.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, EURI_API_URL.to_string())
    }

    /// Constructor with an explicit endpoint URL, used to point the client
    /// at a local server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Sends one prompt and returns the first generated message's text.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        self.complete_with(prompt, max_tokens, DEFAULT_TEMPERATURE).await
    }

    /// Like [`complete`](Self::complete) with an explicit sampling temperature.
    pub async fn complete_with(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request_body = CompletionRequest {
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            model: MODEL,
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::Shape(format!("invalid JSON body: {e}")))?;

        let first = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Shape("choices array is empty".to_string()))?;

        let content = first
            .message
            .content
            .ok_or_else(|| LlmError::Shape("choices[0].message.content is missing".to_string()))?;

        debug!("completion call succeeded: {} chars returned", content.len());

        Ok(content)
    }
}
