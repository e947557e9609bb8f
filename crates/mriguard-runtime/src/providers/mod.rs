//! Vision provider abstractions.
//!
//! A provider turns (prompt, image) into the raw text reply of a remote
//! multimodal completion endpoint. The trait seam exists so the validator
//! can be tested against scripted providers without touching the network.
//!
//! ## Security
//!
//! All providers store their API key in an [`ApiCredential`]. See the
//! [`secrets`] module for the handling rules.

use async_trait::async_trait;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "mistral")]
mod mistral;

pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "mistral")]
pub use mistral::{MistralProvider, DEFAULT_ENDPOINT, MISTRAL_API_KEY_ENV};

/// Errors from vision providers.
///
/// The validator absorbs all of these; none escape to callers of
/// `validate`. They are still typed so the mapping to result shapes
/// stays explicit.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Non-2xx reply. Carries the raw error body so it can be surfaced
    /// to the caller as `raw_response`.
    #[error("API error: status {status}")]
    Api { status: u16, body: String },

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Sampling and model settings for a classification request.
///
/// Defaults favor deterministic decoding: low temperature, full nucleus,
/// no streaming.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Multimodal model identifier.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus sampling mass.
    pub top_p: f32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "pixtral-12b-2409".to_string(),
            temperature: 0.3,
            top_p: 1.0,
        }
    }
}

impl CompletionConfig {
    /// Config for a specific model, keeping the default sampling settings.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// A remote endpoint that answers a text prompt about an image.
///
/// # Contract
/// - One call, one HTTP round trip. No retries, no internal timeout:
///   callers needing bounded latency wrap the future in their own deadline.
/// - Implementations hold no mutable state, so concurrent calls are safe.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Send one classification request and return the raw reply text.
    async fn classify(&self, prompt: &str, image: &str) -> Result<String, ProviderError>;

    /// Provider name for logs and metrics.
    fn name(&self) -> &str;
}
