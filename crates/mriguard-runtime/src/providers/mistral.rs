//! Mistral Pixtral provider implementation.
//!
//! Talks to Mistral's OpenAI-compatible chat completion endpoint with a
//! mixed text/image user message.
//!
//! ## Security
//!
//! The API key lives in an [`ApiCredential`]; it is exposed only while
//! setting the `Authorization` header. See [`secrets`](super::secrets).

use super::{
    secrets::{ApiCredential, CredentialSource},
    CompletionConfig, ProviderError, VisionProvider,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Environment variable name for the Mistral API key.
pub const MISTRAL_API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Default chat completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";

/// Mistral Pixtral vision provider.
///
/// One instance is safe to share across concurrent calls; it holds no
/// mutable state. No timeout is set on the request: callers that need
/// bounded latency wrap the call in their own deadline.
pub struct MistralProvider {
    credential: ApiCredential,
    endpoint: String,
    config: CompletionConfig,
}

impl std::fmt::Debug for MistralProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralProvider")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .field("config", &self.config)
            .finish()
    }
}

impl MistralProvider {
    /// Create a provider from an API key.
    ///
    /// The key is immediately wrapped in an [`ApiCredential`] and cannot
    /// be accidentally logged after construction.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credential: ApiCredential::new(
                api_key,
                CredentialSource::Programmatic,
                "Mistral API key",
            ),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            config: CompletionConfig::default(),
        }
    }

    /// Create from the `MISTRAL_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(MISTRAL_API_KEY_ENV, "Mistral API key")?;
        Ok(Self {
            credential,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            config: CompletionConfig::default(),
        })
    }

    /// Create from JSON configuration with environment fallback.
    ///
    /// Recognized keys: `api_key` (falls back to `MISTRAL_API_KEY`),
    /// `endpoint`, `model`.
    pub fn from_config(config: &JsonValue) -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_config_or_env(
            config,
            "api_key",
            MISTRAL_API_KEY_ENV,
            "Mistral API key",
        )?;

        let endpoint = config["endpoint"]
            .as_str()
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        let completion = match config["model"].as_str() {
            Some(model) => CompletionConfig::with_model(model),
            None => CompletionConfig::default(),
        };

        Ok(Self {
            credential,
            endpoint,
            config: completion,
        })
    }

    /// Override the endpoint URL (tests, self-hosted gateways).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the completion settings.
    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    #[cfg(feature = "mistral")]
    fn client(&self) -> &reqwest::Client {
        // Shared across instances. Deliberately built without a timeout:
        // the caller owns the deadline.
        static CLIENT: std::sync::OnceLock<reqwest::Client> = std::sync::OnceLock::new();
        CLIENT.get_or_init(reqwest::Client::new)
    }
}

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

/// Chat completion response body.
///
/// Every field is optional: a structurally absent message degrades to an
/// empty reply rather than a deserialization failure.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first completion, or empty when the shape is partial.
    fn first_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl VisionProvider for MistralProvider {
    #[cfg(feature = "mistral")]
    async fn classify(&self, prompt: &str, image: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentBlock::Text { text: prompt },
                    ContentBlock::ImageUrl {
                        image_url: ImageUrl { url: image },
                    },
                ],
            }],
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            stream: false,
        };

        // SECURITY: the credential is exposed only here, at the point of use
        let response = self
            .client()
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ProviderError::Http(e.to_string()))?;

            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(body.first_content())
    }

    #[cfg(not(feature = "mistral"))]
    async fn classify(&self, _prompt: &str, _image: &str) -> Result<String, ProviderError> {
        Err(ProviderError::NotConfigured(
            "Mistral provider requires 'mistral' feature".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "mistral"
    }
}
