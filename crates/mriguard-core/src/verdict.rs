//! Verdict types returned by MRI validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence the model reported alongside its verdict.
///
/// Defaults to [`Confidence::Unknown`] and is only overwritten when the
/// reply carries one of the three recognized tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Unknown,
}

impl Confidence {
    /// Parse a confidence token from a reply line.
    ///
    /// Matching is case-insensitive but otherwise strict: only `HIGH`,
    /// `MEDIUM`, and `LOW` are accepted. Anything else (including an empty
    /// token) returns `None` so the caller keeps its previous value.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "HIGH" => Some(Confidence::High),
            "MEDIUM" => Some(Confidence::Medium),
            "LOW" => Some(Confidence::Low),
            _ => None,
        }
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::Unknown
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
            Confidence::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a single validation call.
///
/// Every failure class is normalized into this shape, so callers only ever
/// check `is_valid` and read `reason`. `raw_response` carries the full
/// completion text (or the raw error body on an HTTP error) and is absent
/// only when the request never produced a response at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the image was accepted as a brain MRI scan.
    pub is_valid: bool,

    /// Human-readable explanation for the verdict.
    pub reason: String,

    /// Model-reported confidence in the verdict.
    pub confidence: Confidence,

    /// Full reply text from the remote service, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl ValidationResult {
    /// Result for a non-2xx HTTP reply from the validation service.
    ///
    /// Carries the status code in the reason and the raw error body so the
    /// caller can log or surface it.
    pub fn service_error(status: u16, body: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: format!("Validation service error (Status {})", status),
            confidence: Confidence::Low,
            raw_response: Some(body.into()),
        }
    }

    /// Result for a request that never produced an HTTP reply.
    ///
    /// Covers network failures, timeouts imposed by the caller, and
    /// malformed response bodies. No raw response exists in this case.
    pub fn transport_failure(message: &str) -> Self {
        Self {
            is_valid: false,
            reason: format!("Validation failed: {}", message),
            confidence: Confidence::Low,
            raw_response: None,
        }
    }
}
