/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Structural validation of the FIX envelope.
//!
//! Verifies, in order: the BeginString head (tag 8), the BodyLength field
//! (tag 9) against the actual body byte count, and the CheckSum trailer
//! (tag 10) against the recomputed sum. Every violation is reported as its
//! own error; none aborts the pipeline.

use crate::checksum::{body_checksum, parse_declared_checksum};
use fixtranslate_core::{
    ParseError, ParseErrorKind, TAG_BEGIN_STRING, TAG_BODY_LENGTH, TAG_CHECKSUM, TagValue,
};

/// Length of the `10=` prefix that precedes the trailer value.
const CHECKSUM_PREFIX: usize = 3;

/// Outcome of structural validation.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    /// True iff the trailer is well-formed and matches the recomputed sum.
    pub checksum_valid: bool,
    /// Structural faults found, in check order.
    pub errors: Vec<ParseError>,
}

/// Validates the envelope of a tokenized message.
///
/// `fields` must be the tokens produced from `input`: body and checksum
/// ranges are recovered from the zero-copy value slices, so tokens from any
/// other buffer would give meaningless offsets.
///
/// # Arguments
/// * `input` - The raw message bytes the tokens were cut from
/// * `fields` - The ordered token stream
/// * `verify_checksum` - When false, the trailer checks (c)/(d) are skipped
///   and `checksum_valid` stays false (useful for replaying archived traffic
///   with stripped trailers)
#[must_use]
pub fn validate_structure(
    input: &[u8],
    fields: &[TagValue<'_>],
    verify_checksum: bool,
) -> Validation {
    let mut validation = Validation::default();
    let Some(first) = fields.first() else {
        return validation;
    };

    if first.tag != TAG_BEGIN_STRING {
        validation.errors.push(ParseError::with_tag(
            ParseErrorKind::MissingBeginString,
            TAG_BEGIN_STRING,
            format!("first field is tag {}, expected BeginString (8)", first.tag),
        ));
    }

    let trailer = fields.last().filter(|f| f.tag == TAG_CHECKSUM);

    // Everything before the "10=" prefix participates in the checksum; when
    // the trailer is missing the body simply runs to the end of the buffer.
    let trailer_start = trailer
        .map(|f| offset_of(input, f.value).saturating_sub(CHECKSUM_PREFIX))
        .unwrap_or(input.len());

    match fields.get(1) {
        Some(field) if field.tag == TAG_BODY_LENGTH => {
            let body_start = offset_of(input, field.value) + field.value.len() + 1;
            let actual = trailer_start.saturating_sub(body_start);
            match field.as_str().and_then(|s| s.parse::<usize>().ok()) {
                Some(declared) if declared == actual => {}
                Some(declared) => validation.errors.push(ParseError::with_tag(
                    ParseErrorKind::BodyLengthMismatch,
                    TAG_BODY_LENGTH,
                    format!("declared {declared}, actual {actual}"),
                )),
                None => validation.errors.push(ParseError::with_tag(
                    ParseErrorKind::BodyLengthMismatch,
                    TAG_BODY_LENGTH,
                    format!("non-numeric BodyLength '{}'", field.text()),
                )),
            }
        }
        _ => validation.errors.push(ParseError::with_tag(
            ParseErrorKind::BodyLengthMismatch,
            TAG_BODY_LENGTH,
            "second field is not BodyLength (9)",
        )),
    }

    if !verify_checksum {
        return validation;
    }

    match trailer {
        Some(field) => match parse_declared_checksum(field.value) {
            Some(declared) => {
                let calculated = body_checksum(&input[..trailer_start]);
                if calculated == declared {
                    validation.checksum_valid = true;
                } else {
                    validation.errors.push(ParseError::with_tag(
                        ParseErrorKind::ChecksumMismatch,
                        TAG_CHECKSUM,
                        format!("calculated {calculated:03}, declared {declared:03}"),
                    ));
                }
            }
            None => validation.errors.push(ParseError::with_tag(
                ParseErrorKind::ChecksumMismatch,
                TAG_CHECKSUM,
                format!("CheckSum is not a 3-digit value: '{}'", field.text()),
            )),
        },
        None => validation.errors.push(ParseError::with_tag(
            ParseErrorKind::ChecksumMismatch,
            TAG_CHECKSUM,
            "missing CheckSum (10) trailer",
        )),
    }

    validation
}

/// Byte offset of a zero-copy value slice within its source buffer.
#[inline]
fn offset_of(input: &[u8], slice: &[u8]) -> usize {
    slice.as_ptr() as usize - input.as_ptr() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    const VALID: &[u8] = b"8=FIX.4.2\x019=5\x0135=0\x0110=161\x01";

    fn validate(input: &[u8]) -> Validation {
        let (fields, _) = Tokenizer::new(input).tokenize();
        validate_structure(input, &fields, true)
    }

    #[test]
    fn test_valid_envelope() {
        let validation = validate(VALID);
        assert!(validation.checksum_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_checksum_mismatch() {
        let validation = validate(b"8=FIX.4.2\x019=5\x0135=0\x0110=000\x01");
        assert!(!validation.checksum_valid);
        assert_eq!(validation.errors.len(), 1);
        assert_eq!(validation.errors[0].kind, ParseErrorKind::ChecksumMismatch);
        assert!(validation.errors[0].message.contains("161"));
    }

    #[test]
    fn test_single_byte_flip_breaks_checksum() {
        // Corrupting the MsgType value shifts the sum by exactly one.
        let validation = validate(b"8=FIX.4.2\x019=5\x0135=1\x0110=161\x01");
        assert!(!validation.checksum_valid);
    }

    #[test]
    fn test_body_length_mismatch() {
        let validation = validate(b"8=FIX.4.2\x019=7\x0135=0\x0110=163\x01");
        assert!(
            validation
                .errors
                .iter()
                .any(|e| e.kind == ParseErrorKind::BodyLengthMismatch)
        );
    }

    #[test]
    fn test_missing_begin_string() {
        let validation = validate(b"35=0\x019=5\x0110=000\x01");
        assert!(
            validation
                .errors
                .iter()
                .any(|e| e.kind == ParseErrorKind::MissingBeginString)
        );
    }

    #[test]
    fn test_missing_trailer() {
        let validation = validate(b"8=FIX.4.2\x019=5\x0135=0\x01");
        assert!(!validation.checksum_valid);
        assert!(
            validation
                .errors
                .iter()
                .any(|e| e.kind == ParseErrorKind::ChecksumMismatch
                    && e.message.contains("missing"))
        );
    }

    #[test]
    fn test_checksum_verification_disabled() {
        let input = b"8=FIX.4.2\x019=5\x0135=0\x0110=000\x01";
        let (fields, _) = Tokenizer::new(input).tokenize();
        let validation = validate_structure(input, &fields, false);
        assert!(!validation.checksum_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_malformed_trailer_value() {
        let validation = validate(b"8=FIX.4.2\x019=5\x0135=0\x0110=7\x01");
        assert!(!validation.checksum_valid);
        assert!(
            validation
                .errors
                .iter()
                .any(|e| e.kind == ParseErrorKind::ChecksumMismatch
                    && e.message.contains("3-digit"))
        );
    }
}
