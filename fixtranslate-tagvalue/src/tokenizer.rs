/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Lenient FIX tokenization.
//!
//! Splits a raw buffer on the field delimiter and each token on its first
//! `=` (values may themselves contain `=`). Malformed tokens produce a
//! [`ParseErrorKind::MalformedTag`] entry and tokenization continues;
//! structural judgment belongs to the validator downstream.

use fixtranslate_core::{ParseError, ParseErrorKind, TagValue};
use memchr::memchr;
use smallvec::SmallVec;
use std::borrow::Cow;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Tag/value separator.
pub const EQUALS: u8 = b'=';

/// Inline capacity for the token buffer; typical order-flow messages stay
/// under this.
pub const FIELDS_INLINE: usize = 32;

/// Ordered tokens plus the faults recorded while producing them.
pub type TokenStream<'a> = (SmallVec<[TagValue<'a>; FIELDS_INLINE]>, Vec<ParseError>);

/// Maps the `|` visual delimiter convention to SOH.
///
/// Messages pasted from logs or chat commonly use `|` in place of the
/// unprintable SOH byte. When the buffer contains `|` and no SOH at all, the
/// pipes are treated as delimiters; a buffer with genuine SOH bytes is left
/// untouched.
#[must_use]
pub fn normalize_delimiters(raw: &[u8]) -> Cow<'_, [u8]> {
    if raw.contains(&b'|') && !raw.contains(&SOH) {
        Cow::Owned(
            raw.iter()
                .map(|&b| if b == b'|' { SOH } else { b })
                .collect(),
        )
    } else {
        Cow::Borrowed(raw)
    }
}

/// Lenient FIX tokenizer.
///
/// Produces zero-copy [`TagValue`] pairs in wire order.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a [u8],
    delimiter: u8,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given buffer with the SOH delimiter.
    #[inline]
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            delimiter: SOH,
        }
    }

    /// Overrides the field delimiter.
    #[inline]
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Tokenizes the buffer.
    ///
    /// A trailing empty token produced by the terminal delimiter is
    /// discarded. A missing terminal delimiter, an empty field, a token
    /// without `=`, or a non-numeric tag each record a `MalformedTag` error;
    /// none of them stop the scan.
    #[must_use]
    pub fn tokenize(&self) -> TokenStream<'a> {
        let mut fields: SmallVec<[TagValue<'a>; FIELDS_INLINE]> = SmallVec::new();
        let mut errors = Vec::new();

        let mut offset = 0;
        while offset < self.input.len() {
            let remaining = &self.input[offset..];
            let (token, consumed) = match memchr(self.delimiter, remaining) {
                Some(pos) => (&remaining[..pos], pos + 1),
                None => {
                    errors.push(ParseError::new(
                        ParseErrorKind::MalformedTag,
                        "missing terminal delimiter",
                    ));
                    (remaining, remaining.len())
                }
            };
            offset += consumed;

            if token.is_empty() {
                if offset < self.input.len() {
                    errors.push(ParseError::new(ParseErrorKind::MalformedTag, "empty field"));
                }
                continue;
            }

            match split_token(token) {
                Some(field) => fields.push(field),
                None => errors.push(ParseError::new(
                    ParseErrorKind::MalformedTag,
                    format!("bad token '{}'", String::from_utf8_lossy(token)),
                )),
            }
        }

        (fields, errors)
    }
}

/// Splits one token on its first `=` and parses the tag number.
///
/// Returns `None` when the token has no `=`, an empty value side is fine.
#[inline]
fn split_token(token: &[u8]) -> Option<TagValue<'_>> {
    let eq_pos = memchr(EQUALS, token)?;
    let tag = parse_tag(&token[..eq_pos])?;
    Some(TagValue::new(tag, &token[eq_pos + 1..]))
}

/// Parses a tag number from ASCII digits.
///
/// Tags are positive integers; an empty, oversized, zero, or non-digit tag
/// is rejected.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut tag: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        tag = tag.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }

    (tag >= 1).then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag(b"8"), Some(8));
        assert_eq!(parse_tag(b"35"), Some(35));
        assert_eq!(parse_tag(b"9999"), Some(9999));
        assert_eq!(parse_tag(b""), None);
        assert_eq!(parse_tag(b"0"), None);
        assert_eq!(parse_tag(b"abc"), None);
        assert_eq!(parse_tag(b"12a"), None);
    }

    #[test]
    fn test_tokenize_well_formed() {
        let input = b"8=FIX.4.2\x019=5\x0135=0\x01";
        let (fields, errors) = Tokenizer::new(input).tokenize();

        assert!(errors.is_empty());
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].tag, 8);
        assert_eq!(fields[0].text(), "FIX.4.2");
        assert_eq!(fields[2].tag, 35);
        assert_eq!(fields[2].text(), "0");
    }

    #[test]
    fn test_tokenize_value_containing_equals() {
        let input = b"58=a=b=c\x01";
        let (fields, errors) = Tokenizer::new(input).tokenize();
        assert!(errors.is_empty());
        assert_eq!(fields[0].text(), "a=b=c");
    }

    #[test]
    fn test_tokenize_is_lenient() {
        // A garbage token between two valid fields must not stop the scan.
        let input = b"8=FIX.4.2\x01garbage\x0135=0\x01";
        let (fields, errors) = Tokenizer::new(input).tokenize();

        assert_eq!(fields.len(), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ParseErrorKind::MalformedTag);
        assert!(errors[0].message.contains("garbage"));
    }

    #[test]
    fn test_tokenize_missing_terminal_delimiter() {
        let input = b"8=FIX.4.2\x0135=0";
        let (fields, errors) = Tokenizer::new(input).tokenize();

        assert_eq!(fields.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("terminal delimiter"));
    }

    #[test]
    fn test_tokenize_custom_delimiter() {
        let input = b"8=FIX.4.2|35=0|";
        let (fields, errors) = Tokenizer::new(input).with_delimiter(b'|').tokenize();
        assert!(errors.is_empty());
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_tokenize_empty_input() {
        let (fields, errors) = Tokenizer::new(b"").tokenize();
        assert!(fields.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_normalize_delimiters() {
        assert_eq!(
            normalize_delimiters(b"8=FIX.4.2|35=0|").as_ref(),
            b"8=FIX.4.2\x0135=0\x01"
        );
        // Genuine SOH present: pipes are data, not delimiters.
        let mixed = b"8=FIX.4.2\x0158=a|b\x01";
        assert_eq!(normalize_delimiters(mixed).as_ref(), mixed.as_slice());
    }
}
