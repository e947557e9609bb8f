//! # mriguard-runtime
//!
//! Vision-model validation runtime for MRI Guard.
//!
//! This crate owns the network side of MRI validation: it sends a
//! base64-encoded image to a vision-capable completion endpoint together
//! with a fixed classification prompt, and normalizes every possible
//! outcome into the [`ValidationResult`] defined in `mriguard-core`.
//!
//! ## Important
//!
//! [`MriValidator::validate`] never returns an error. HTTP failures,
//! transport failures, and unparseable replies all collapse into an
//! `is_valid = false` result with a diagnostic reason, so callers only
//! ever branch on the result itself.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mriguard_runtime::{MistralProvider, MriValidator};
//!
//! let provider = MistralProvider::from_env()?;
//! let validator = MriValidator::new(Arc::new(provider));
//!
//! let result = validator.validate(&image_base64).await;
//! if !result.is_valid {
//!     eprintln!("rejected: {}", result.reason);
//! }
//! ```

pub mod prompts;
pub mod providers;
pub mod validator;

pub use providers::{ApiCredential, CompletionConfig, CredentialSource, ProviderError, VisionProvider};
pub use validator::MriValidator;

#[cfg(feature = "mistral")]
pub use providers::MistralProvider;
