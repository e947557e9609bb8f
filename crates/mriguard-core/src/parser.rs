//! Best-effort parser for the vision model's constrained reply format.
//!
//! The remote model is instructed to answer in three lines:
//!
//! ```text
//! VALID: YES|NO
//! CONFIDENCE: HIGH|MEDIUM|LOW
//! REASON: <brief explanation>
//! ```
//!
//! That format is an informal protocol, not a guarantee. The parser treats
//! every marker as optional and degrades to explicit defaults when a marker
//! is missing or malformed. It never fails: arbitrary input yields a verdict.

use crate::verdict::{Confidence, ValidationResult};

/// Substring whose presence (case-insensitive) makes a reply a YES verdict.
pub const VALID_MARKER: &str = "VALID: YES";

/// Reason used when the reply carries no usable REASON line.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Parse a raw completion reply into a [`ValidationResult`].
///
/// Rules, in order:
/// - `is_valid` is true iff the uppercased text contains [`VALID_MARKER`].
/// - Each line containing `CONFIDENCE:` is tried for a recognized token
///   (text after the first colon, trimmed, uppercased). Unrecognized tokens
///   leave the previous value in place, so `UNKNOWN` persists unless a
///   clean match appears.
/// - Each remaining line containing `REASON:` sets the reason to the text
///   after its first colon, trimmed, when non-empty. The scan does not stop
///   at the first match, so the last REASON line wins.
/// - A line carrying both markers is consumed by the confidence branch only.
///
/// The full input is echoed back in `raw_response`.
pub fn parse_reply(text: &str) -> ValidationResult {
    let is_valid = text.to_uppercase().contains(VALID_MARKER);

    let mut confidence = Confidence::Unknown;
    let mut reason = DEFAULT_REASON.to_string();

    for line in text.trim().lines() {
        let upper = line.to_uppercase();
        if upper.contains("CONFIDENCE:") {
            if let Some(token) = after_first_colon(line) {
                if let Some(parsed) = Confidence::from_token(token.trim()) {
                    confidence = parsed;
                }
            }
        } else if upper.contains("REASON:") {
            if let Some(rest) = after_first_colon(line) {
                let rest = rest.trim();
                if !rest.is_empty() {
                    reason = rest.to_string();
                }
            }
        }
    }

    ValidationResult {
        is_valid,
        reason,
        confidence,
        raw_response: Some(text.to_string()),
    }
}

/// Text after the first `:` in a line, if any.
fn after_first_colon(line: &str) -> Option<&str> {
    line.splitn(2, ':').nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_marker_any_case() {
        assert!(parse_reply("VALID: YES").is_valid);
        assert!(parse_reply("valid: yes").is_valid);
        assert!(parse_reply("The answer is...\nValid: Yes\nmore text").is_valid);
    }

    #[test]
    fn test_valid_marker_anywhere_in_text() {
        let verdict = parse_reply("preamble VALID: YES postamble");
        assert!(verdict.is_valid);
    }

    #[test]
    fn test_no_marker_means_invalid() {
        assert!(!parse_reply("VALID: NO").is_valid);
        assert!(!parse_reply("VALID:YES").is_valid); // missing space, no match
        assert!(!parse_reply("completely unrelated text").is_valid);
    }

    #[test]
    fn test_confidence_mixed_case_line() {
        let verdict = parse_reply("VALID: NO\nConfidence: High\nREASON: photo");
        assert_eq!(verdict.confidence, Confidence::High);
    }

    #[test]
    fn test_unrecognized_confidence_token_keeps_unknown() {
        let verdict = parse_reply("VALID: NO\nCONFIDENCE: WEIRD");
        assert_eq!(verdict.confidence, Confidence::Unknown);
    }

    #[test]
    fn test_empty_confidence_token_keeps_unknown() {
        let verdict = parse_reply("CONFIDENCE:");
        assert_eq!(verdict.confidence, Confidence::Unknown);
    }

    #[test]
    fn test_garbage_after_recognized_confidence_is_rejected() {
        // Token matching is strict, not prefix-based.
        let verdict = parse_reply("CONFIDENCE: HIGH (very sure)");
        assert_eq!(verdict.confidence, Confidence::Unknown);
    }

    #[test]
    fn test_reason_extraction() {
        let verdict = parse_reply("VALID: NO\nCONFIDENCE: HIGH\nReason: Not an MRI");
        assert_eq!(verdict.reason, "Not an MRI");
    }

    #[test]
    fn test_last_reason_line_wins() {
        let verdict = parse_reply("REASON: first explanation\nREASON: second explanation");
        assert_eq!(verdict.reason, "second explanation");
    }

    #[test]
    fn test_empty_reason_keeps_default() {
        let verdict = parse_reply("REASON:   ");
        assert_eq!(verdict.reason, DEFAULT_REASON);
    }

    #[test]
    fn test_reason_keeps_text_after_first_colon_only() {
        let verdict = parse_reply("REASON: CT scan: not an MRI");
        assert_eq!(verdict.reason, "CT scan: not an MRI");
    }

    #[test]
    fn test_line_with_both_markers_takes_confidence_branch() {
        // The confidence branch consumes the line; the reason stays default.
        let verdict = parse_reply("CONFIDENCE: REASON: HIGH");
        assert_eq!(verdict.confidence, Confidence::Unknown);
        assert_eq!(verdict.reason, DEFAULT_REASON);
    }

    #[test]
    fn test_garbage_reply_falls_back_everywhere() {
        let verdict = parse_reply("lorem ipsum dolor sit amet");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.confidence, Confidence::Unknown);
        assert_eq!(verdict.reason, DEFAULT_REASON);
    }

    #[test]
    fn test_empty_reply() {
        let verdict = parse_reply("");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.confidence, Confidence::Unknown);
        assert_eq!(verdict.reason, DEFAULT_REASON);
        assert_eq!(verdict.raw_response.as_deref(), Some(""));
    }

    #[test]
    fn test_well_formed_reply() {
        let reply = "VALID: YES\nCONFIDENCE: MEDIUM\nREASON: Sagittal T1 brain view";
        let verdict = parse_reply(reply);
        assert!(verdict.is_valid);
        assert_eq!(verdict.confidence, Confidence::Medium);
        assert_eq!(verdict.reason, "Sagittal T1 brain view");
        assert_eq!(verdict.raw_response.as_deref(), Some(reply));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let reply = "VALID: NO\nCONFIDENCE: LOW\nREASON: chest X-ray";
        assert_eq!(parse_reply(reply), parse_reply(reply));
    }

    proptest! {
        #[test]
        fn prop_parser_never_panics(text in ".*") {
            let _ = parse_reply(&text);
        }

        #[test]
        fn prop_invalid_without_marker(text in ".*") {
            prop_assume!(!text.to_uppercase().contains(VALID_MARKER));
            prop_assert!(!parse_reply(&text).is_valid);
        }

        #[test]
        fn prop_raw_response_echoes_input(text in ".*") {
            let parsed = parse_reply(&text);
            prop_assert_eq!(parsed.raw_response.as_deref(), Some(text.as_str()));
        }
    }
}
