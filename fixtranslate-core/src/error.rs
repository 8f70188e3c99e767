/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Error taxonomy for FIX message translation.
//!
//! Parsing is lenient: every error kind except [`ParseErrorKind::EmptyMessage`]
//! is accumulated alongside a best-effort result instead of aborting the
//! decode. The translator therefore never returns `Err` from its public parse
//! entry points; errors ride inside the parse result.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Classification of a parse fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseErrorKind {
    /// A raw token had no `=`, an empty tag, or a non-numeric tag.
    MalformedTag,
    /// The first field was not BeginString (tag 8).
    MissingBeginString,
    /// The declared BodyLength (tag 9) did not match the actual body size.
    BodyLengthMismatch,
    /// The declared CheckSum (tag 10) was missing, malformed, or did not
    /// match the recomputed value.
    ChecksumMismatch,
    /// A repeating group produced fewer instances than its leader declared,
    /// or group nesting exceeded the configured depth bound.
    GroupUnderflow,
    /// A declared group member appeared before the group's delimiter tag
    /// opened an instance.
    UnexpectedGroupMember,
    /// A field value failed to coerce to its dictionary type; the raw string
    /// is kept in the output.
    TypeCoercionFailed,
    /// The input was empty or produced zero fields. The sole fatal kind.
    EmptyMessage,
}

impl ParseErrorKind {
    /// Returns true if this kind aborts the parse.
    ///
    /// Only [`ParseErrorKind::EmptyMessage`] is fatal; everything else is
    /// collected and returned alongside the best-effort decode.
    #[inline]
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::EmptyMessage)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MalformedTag => "malformed tag",
            Self::MissingBeginString => "missing begin string",
            Self::BodyLengthMismatch => "body length mismatch",
            Self::ChecksumMismatch => "checksum mismatch",
            Self::GroupUnderflow => "group underflow",
            Self::UnexpectedGroupMember => "unexpected group member",
            Self::TypeCoercionFailed => "type coercion failed",
            Self::EmptyMessage => "empty message",
        };
        write!(f, "{}", name)
    }
}

/// A single fault recorded while decoding a message.
///
/// Errors carry the offending tag where one is known, and a human-readable
/// description of what went wrong. Serialized at the boundary as
/// `{"kind": ..., "tag": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}: {message}")]
pub struct ParseError {
    /// Fault classification.
    pub kind: ParseErrorKind,
    /// The tag involved, if one is known.
    pub tag: Option<u32>,
    /// Human-readable description.
    pub message: String,
}

impl ParseError {
    /// Creates an error with no associated tag.
    ///
    /// # Arguments
    /// * `kind` - Fault classification
    /// * `message` - Human-readable description
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            tag: None,
            message: message.into(),
        }
    }

    /// Creates an error associated with a specific tag.
    ///
    /// # Arguments
    /// * `kind` - Fault classification
    /// * `tag` - The offending tag number
    /// * `message` - Human-readable description
    #[must_use]
    pub fn with_tag(kind: ParseErrorKind, tag: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            tag: Some(tag),
            message: message.into(),
        }
    }

    /// Returns true if this error aborts the parse.
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::with_tag(
            ParseErrorKind::ChecksumMismatch,
            10,
            "calculated 161, declared 000",
        );
        assert_eq!(err.to_string(), "checksum mismatch: calculated 161, declared 000");
    }

    #[test]
    fn test_only_empty_message_is_fatal() {
        assert!(ParseErrorKind::EmptyMessage.is_fatal());
        assert!(!ParseErrorKind::MalformedTag.is_fatal());
        assert!(!ParseErrorKind::ChecksumMismatch.is_fatal());
        assert!(!ParseErrorKind::GroupUnderflow.is_fatal());
    }

    #[test]
    fn test_serialize_shape() {
        let err = ParseError::with_tag(ParseErrorKind::MalformedTag, 0, "bad token 'x'");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "MalformedTag");
        assert_eq!(json["tag"], 0);
        assert_eq!(json["message"], "bad token 'x'");
    }

    #[test]
    fn test_serialize_without_tag() {
        let err = ParseError::new(ParseErrorKind::EmptyMessage, "no fields in input");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json["tag"].is_null());
    }
}
