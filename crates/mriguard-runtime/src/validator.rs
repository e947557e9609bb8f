//! The validation operation: one request, one parsed verdict.
//!
//! [`MriValidator::validate`] is deliberately infallible at the type level.
//! Three terminal outcomes exist, all expressed as a [`ValidationResult`]:
//!
//! 1. HTTP error status — low-confidence invalid, reason carries the code
//! 2. Transport or parse failure — low-confidence invalid, reason carries
//!    the underlying message
//! 3. A received reply — parsed verdict, valid or not

use std::sync::Arc;

use mriguard_core::{parse_reply, ValidationResult};

use crate::prompts::VALIDATION_PROMPT;
use crate::providers::{ProviderError, VisionProvider};

/// Validates that an image is a brain MRI scan via a vision provider.
///
/// Stateless apart from the shared provider handle: invocations are
/// independent and safe to run concurrently. No retries are performed on
/// any failure class, and no internal timeout is imposed.
pub struct MriValidator {
    provider: Arc<dyn VisionProvider>,
}

impl MriValidator {
    /// Create a validator backed by the given provider.
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self { provider }
    }

    /// Classify one image.
    ///
    /// `image` is a base64 payload, with or without a `data:` URL prefix;
    /// it is forwarded to the provider untouched.
    ///
    /// Never returns an error: every failure is folded into the result so
    /// callers branch on `is_valid` alone.
    pub async fn validate(&self, image: &str) -> ValidationResult {
        match self.provider.classify(VALIDATION_PROMPT, image).await {
            Ok(reply) => parse_reply(&reply),
            Err(ProviderError::Api { status, body }) => {
                tracing::error!(
                    provider = self.provider.name(),
                    status,
                    "validation service returned error status"
                );
                ValidationResult::service_error(status, body)
            }
            Err(err) => {
                tracing::error!(
                    provider = self.provider.name(),
                    error = %err,
                    "validation request failed"
                );
                ValidationResult::transport_failure(&err.to_string())
            }
        }
    }
}
