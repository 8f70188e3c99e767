/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! The parse orchestrator.
//!
//! Runs the pipeline Tokenize → Validate → Resolve groups → Flatten. Each
//! stage is pure and runs even when earlier stages recorded faults; the
//! single short-circuit is a tokenization that produces zero fields, which
//! yields one fatal `EmptyMessage` error and empty mappings — there is
//! nothing meaningful to validate or flatten.

use fixtranslate_core::{ParseError, ParseErrorKind};
use fixtranslate_dictionary::Dictionary;
use fixtranslate_tagvalue::{Tokenizer, validate_structure};
use tracing::debug;

use crate::flatten::flatten_tree;
use crate::group::{DEFAULT_MAX_GROUP_DEPTH, resolve_groups};
use crate::result::ParseResult;

/// Knobs for one parse call.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    delimiter: u8,
    verify_checksum: bool,
    max_group_depth: usize,
}

impl ParseOptions {
    /// Creates the default options: SOH delimiter, checksum verification on,
    /// depth bound of [`DEFAULT_MAX_GROUP_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: fixtranslate_tagvalue::SOH,
            verify_checksum: true,
            max_group_depth: DEFAULT_MAX_GROUP_DEPTH,
        }
    }

    /// Overrides the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the CheckSum trailer is verified.
    #[must_use]
    pub const fn with_checksum_verification(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }

    /// Overrides the group nesting depth bound.
    #[must_use]
    pub const fn with_max_group_depth(mut self, max_depth: usize) -> Self {
        self.max_group_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses one raw FIX message with default options and the process-wide
/// dictionary.
///
/// Never fails: faults accumulate inside the returned [`ParseResult`].
#[must_use]
pub fn parse(raw: &[u8]) -> ParseResult {
    parse_with(raw, &ParseOptions::new(), fixtranslate_dictionary::global())
}

/// Parses one raw FIX message.
///
/// # Arguments
/// * `raw` - The message bytes, delimiter-preserved, never mutated
/// * `options` - Delimiter, checksum, and depth knobs
/// * `dict` - The field dictionary to normalize against
#[must_use]
pub fn parse_with(raw: &[u8], options: &ParseOptions, dict: &Dictionary) -> ParseResult {
    let raw_text = String::from_utf8_lossy(raw).into_owned();

    let (fields, mut errors) = Tokenizer::new(raw)
        .with_delimiter(options.delimiter)
        .tokenize();

    if fields.is_empty() {
        debug!(bytes = raw.len(), "nothing to translate");
        return ParseResult {
            raw: raw_text,
            errors: vec![ParseError::new(
                ParseErrorKind::EmptyMessage,
                "input produced no fields",
            )],
            ..Default::default()
        };
    }

    let validation = validate_structure(raw, &fields, options.verify_checksum);
    errors.extend(validation.errors);

    let (nodes, group_errors) = resolve_groups(&fields, dict, options.max_group_depth);
    errors.extend(group_errors);

    let flattened = flatten_tree(&nodes, dict);
    errors.extend(flattened.errors);

    debug!(
        fields = fields.len(),
        flat = flattened.flat.len(),
        groups = flattened.groups.len(),
        unknown = flattened.unknown.len(),
        errors = errors.len(),
        checksum_valid = validation.checksum_valid,
        "message translated"
    );

    ParseResult {
        raw: raw_text,
        flat: flattened.flat,
        groups: flattened.groups,
        unknown: flattened.unknown,
        checksum_valid: validation.checksum_valid,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtranslate_tagvalue::{SOH, body_checksum, format_checksum};

    /// Builds a well-formed message around the given body fields, with
    /// correct BodyLength and CheckSum.
    fn build_message(body: &[(u32, &str)]) -> Vec<u8> {
        let mut body_bytes = Vec::new();
        for (tag, value) in body {
            body_bytes.extend_from_slice(format!("{tag}={value}").as_bytes());
            body_bytes.push(SOH);
        }

        let mut msg = Vec::new();
        msg.extend_from_slice(b"8=FIX.4.2");
        msg.push(SOH);
        msg.extend_from_slice(format!("9={}", body_bytes.len()).as_bytes());
        msg.push(SOH);
        msg.extend_from_slice(&body_bytes);
        let checksum = body_checksum(&msg);
        msg.extend_from_slice(b"10=");
        msg.extend_from_slice(&format_checksum(checksum));
        msg.push(SOH);
        msg
    }

    #[test]
    fn test_well_formed_round_trip() {
        let raw = build_message(&[
            (35, "D"),
            (49, "CLIENT"),
            (56, "BROKER"),
            (11, "ORD-1"),
            (55, "AAPL"),
            (54, "1"),
            (38, "100"),
            (44, "151.75"),
        ]);
        let result = parse(&raw);

        assert!(result.checksum_valid);
        assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
        assert_eq!(result.flat_text("Symbol").as_deref(), Some("AAPL"));
        assert_eq!(result.flat_text("Price").as_deref(), Some("151.75"));
    }

    #[test]
    fn test_heartbeat_scenario() {
        let raw = b"8=FIX.4.2\x019=5\x0135=0\x0110=161\x01";
        let result = parse(raw);

        assert!(result.checksum_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.flat.len(), 1);
        assert_eq!(result.flat_text("MsgType").as_deref(), Some("0"));
    }

    #[test]
    fn test_checksum_mismatch_still_populates() {
        let raw = b"8=FIX.4.2\x019=5\x0135=0\x0110=000\x01";
        let result = parse(raw);

        assert!(!result.checksum_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ParseErrorKind::ChecksumMismatch);
        assert_eq!(result.flat_text("MsgType").as_deref(), Some("0"));
    }

    #[test]
    fn test_group_underflow_scenario() {
        let raw = build_message(&[
            (35, "J"),
            (78, "2"),
            (79, "ACCT1"),
            (80, "100"),
        ]);
        let result = parse(&raw);

        assert_eq!(result.groups["NoAllocs"].len(), 1);
        assert_eq!(
            result
                .errors
                .iter()
                .filter(|e| e.kind == ParseErrorKind::GroupUnderflow)
                .count(),
            1
        );
    }

    #[test]
    fn test_group_exact_count() {
        let raw = build_message(&[
            (35, "J"),
            (78, "2"),
            (79, "ACCT1"),
            (80, "100"),
            (79, "ACCT2"),
            (80, "200"),
        ]);
        let result = parse(&raw);

        assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
        assert!(result.checksum_valid);
        assert_eq!(result.groups["NoAllocs"].len(), 2);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let result = parse(b"");

        assert!(result.is_fatal());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ParseErrorKind::EmptyMessage);
        assert!(result.flat.is_empty());
        assert!(result.groups.is_empty());
        assert!(result.unknown.is_empty());
        assert!(!result.checksum_valid);
    }

    #[test]
    fn test_zero_fields_is_fatal() {
        // Tokens exist but none survives tokenization.
        let result = parse(b"garbage-no-equals\x01");

        assert!(result.is_fatal());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ParseErrorKind::EmptyMessage);
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let raw = build_message(&[(35, "D"), (9999, "HELLO")]);
        let result = parse(&raw);

        assert_eq!(result.unknown.get(&9999).map(String::as_str), Some("HELLO"));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_idempotent_serialization() {
        let raw = build_message(&[(35, "8"), (55, "AAPL"), (44, "99.5"), (9999, "X")]);
        let first = serde_json::to_string(&parse(&raw)).unwrap();
        let second = serde_json::to_string(&parse(&raw)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pipe_delimiter_override() {
        let raw = b"8=FIX.4.2|9=5|35=0|10=161|";
        let result = parse_with(
            raw,
            &ParseOptions::new().with_delimiter(b'|'),
            &Dictionary::base(),
        );
        assert_eq!(result.flat_text("MsgType").as_deref(), Some("0"));
    }

    #[test]
    fn test_checksum_verification_toggle() {
        let raw = b"8=FIX.4.2\x019=5\x0135=0\x0110=000\x01";
        let result = parse_with(
            raw,
            &ParseOptions::new().with_checksum_verification(false),
            &Dictionary::base(),
        );
        assert!(!result.checksum_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_malformed_token_is_nonfatal() {
        let raw = b"8=FIX.4.2\x01notatag\x0135=0\x0110=000\x01";
        let result = parse(raw);

        assert!(!result.is_fatal());
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.kind == ParseErrorKind::MalformedTag)
        );
        assert_eq!(result.flat_text("MsgType").as_deref(), Some("0"));
    }
}
