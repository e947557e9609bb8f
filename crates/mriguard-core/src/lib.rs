//! # mriguard-core
//!
//! Deterministic verdict model and reply parser for MRI image validation.
//!
//! This crate defines the [`ValidationResult`] that callers consume and the
//! parser that turns a vision model's constrained free-text reply into one.
//! It performs no I/O and makes no network calls.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same reply text always produces the same verdict
//! 2. **Total**: The parser accepts arbitrary input and never panics
//! 3. **Explicit fallbacks**: Missing or malformed markers degrade to
//!    documented defaults, never to errors
//!
//! ## Example
//!
//! ```rust
//! use mriguard_core::{parse_reply, Confidence};
//!
//! let reply = "VALID: YES\nCONFIDENCE: HIGH\nREASON: Axial T2 brain MRI";
//! let verdict = parse_reply(reply);
//!
//! assert!(verdict.is_valid);
//! assert_eq!(verdict.confidence, Confidence::High);
//! assert_eq!(verdict.reason, "Axial T2 brain MRI");
//! ```

pub mod parser;
pub mod verdict;

// Re-export main types at crate root
pub use parser::{parse_reply, DEFAULT_REASON, VALID_MARKER};
pub use verdict::{Confidence, ValidationResult};
