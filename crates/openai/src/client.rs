//! HTTP client for the OpenAI REST endpoints used by the studio.

use std::time::Duration;

use serde::Deserialize;

/// System prompt for studio text drafting. The requested entry type
/// (verhaal, liedje, weetje, ...) is appended per call.
const STUDIO_SYSTEM_PROMPT: &str = "Je bent OWLY Studio, een creatieve Vlaamse onderwijsauteur. \
     Je schrijft korte, kindvriendelijke teksten (100-180 woorden) in het Nederlands \
     voor 8-jarigen. Hou rekening met het gevraagde type: ";

/// Configuration for [`StudioClient`], loaded from environment variables.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key; when empty, every call fails with [`OpenAiError::MissingApiKey`].
    pub api_key: String,
    /// Base URL of the OpenAI REST API (overridable for tests).
    pub base_url: String,
    /// Model for studio text drafting.
    pub text_model: String,
    /// Model for text-to-speech synthesis.
    pub tts_model: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl OpenAiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                        |
    /// |------------------------------|--------------------------------|
    /// | `OPENAI_API_KEY`             | *(empty, calls will fail)*     |
    /// | `OPENAI_BASE_URL`            | `https://api.openai.com/v1`    |
    /// | `STUDIO_TEXT_MODEL`          | `gpt-4o-mini`                  |
    /// | `STUDIO_TTS_MODEL`           | `gpt-4o-mini-tts`              |
    /// | `OPENAI_TIMEOUT_SECS`        | `30`                           |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "OPENAI_API_KEY is not set; studio draft/audio and /api/token will fail"
            );
        }

        Self {
            api_key,
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            text_model: std::env::var("STUDIO_TEXT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".into()),
            tts_model: std::env::var("STUDIO_TTS_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini-tts".into()),
            request_timeout_secs: std::env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Errors from the content generation adapter.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// No API key configured.
    #[error("OPENAI_API_KEY ontbreekt")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("OpenAI request failed: {0}")]
    Request(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("OpenAI request timed out")]
    TimedOut,

    /// OpenAI returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The completion came back without usable text.
    #[error("Lege respons van OpenAI tekstmodel")]
    EmptyCompletion,
}

impl From<reqwest::Error> for OpenAiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAiError::TimedOut
        } else {
            OpenAiError::Request(err)
        }
    }
}

/// Response shape of `POST /chat/completions` (only what we read).
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Response shape of `POST /realtime/client_secrets`.
#[derive(Debug, Deserialize)]
struct ClientSecretResponse {
    /// The ephemeral key string (starts with `ek_`).
    value: String,
}

/// HTTP client wrapping the OpenAI endpoints used by the studio.
pub struct StudioClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl StudioClient {
    /// Create a new client. Fails only if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn require_key(&self) -> Result<&str, OpenAiError> {
        if self.config.api_key.is_empty() {
            return Err(OpenAiError::MissingApiKey);
        }
        Ok(&self.config.api_key)
    }

    /// Draft a short child-appropriate text from a prompt.
    ///
    /// Not persisted; the admin reviews and possibly edits the result
    /// before synthesizing audio from it.
    pub async fn generate_text(
        &self,
        prompt: &str,
        entry_type: &str,
    ) -> Result<String, OpenAiError> {
        let key = self.require_key()?;

        let system_prompt = format!(
            "{STUDIO_SYSTEM_PROMPT}{entry_type}. \
             Gebruik duidelijke alinea's en eventueel bullet points als dat nuttig is."
        );
        let body = serde_json::json!({
            "model": self.config.text_model,
            "temperature": 0.85,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": prompt }
            ]
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let completion: ChatCompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(OpenAiError::EmptyCompletion);
        }
        Ok(text)
    }

    /// Synthesize WAV audio for the given text, returning the raw bytes.
    pub async fn synthesize_speech(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<Vec<u8>, OpenAiError> {
        let key = self.require_key()?;

        let body = serde_json::json!({
            "model": self.config.tts_model,
            "voice": voice,
            "format": "wav",
            "input": text
        });

        let response = self
            .client
            .post(format!("{}/audio/speech", self.config.base_url))
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Create a short-lived realtime client secret for the browser.
    pub async fn create_realtime_secret(&self) -> Result<String, OpenAiError> {
        let key = self.require_key()?;

        let body = serde_json::json!({
            "session": { "type": "realtime", "model": "gpt-realtime" }
        });

        let response = self
            .client
            .post(format!("{}/realtime/client_secrets", self.config.base_url))
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let secret: ClientSecretResponse = response.json().await?;
        Ok(secret.value)
    }

    /// Turn a non-2xx response into [`OpenAiError::Api`] with the raw body.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OpenAiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(OpenAiError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
