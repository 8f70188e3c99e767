/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Field types for FIX message translation.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for FIX field tag numbers
//! - [`TagValue`]: Zero-copy tag/value pair borrowed from the message buffer
//! - [`FieldValue`]: Closed variant of coerced field values

use bytes::Bytes;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// BeginString header tag.
pub const TAG_BEGIN_STRING: u32 = 8;

/// BodyLength header tag.
pub const TAG_BODY_LENGTH: u32 = 9;

/// CheckSum trailer tag.
pub const TAG_CHECKSUM: u32 = 10;

/// MsgType tag.
pub const TAG_MSG_TYPE: u32 = 35;

/// FIX field tag number.
///
/// Tags are positive integers that identify fields within a FIX message.
/// Standard tags are defined in the FIX specification (1-5000 range),
/// while user-defined tags use the 5001+ range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u32);

impl FieldTag {
    /// Creates a new field tag.
    ///
    /// # Arguments
    /// * `tag` - The tag number (must be > 0)
    #[inline]
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this is a user-defined/vendor tag (5001+).
    #[inline]
    #[must_use]
    pub const fn is_user_defined(self) -> bool {
        self.0 > 5000
    }
}

impl From<u32> for FieldTag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-copy tag/value pair borrowed from a message buffer.
///
/// Produced by the tokenizer in wire order; immutable once created. The raw
/// message is owned by the caller for the duration of the parse, so values
/// never need to be copied before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagValue<'a> {
    /// The field tag number.
    pub tag: u32,
    /// The field value bytes, without delimiters.
    pub value: &'a [u8],
}

impl<'a> TagValue<'a> {
    /// Creates a new tag/value pair.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32, value: &'a [u8]) -> Self {
        Self { tag, value }
    }

    /// Returns the value as UTF-8 text, substituting replacement characters
    /// for invalid sequences.
    #[inline]
    #[must_use]
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.value)
    }

    /// Returns the value as a string slice, or `None` if it is not valid UTF-8.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.value).ok()
    }

    /// Returns the length of the value in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A field value coerced to its dictionary type.
///
/// Decimal fields use exact fixed-point representation, never binary floating
/// point, so prices and quantities survive translation without rounding
/// drift. Values that fail coercion stay in their raw `String` form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String value (also the fallback for failed coercions).
    String(String),
    /// Integer value.
    Int(i64),
    /// Exact decimal value (Price, Qty, Amt, Float).
    Decimal(Decimal),
    /// Boolean value (FIX `Y`/`N`).
    Bool(bool),
    /// Single character value.
    Char(char),
    /// UTC timestamp (`YYYYMMDD-HH:MM:SS[.sss]` on the wire).
    Timestamp(NaiveDateTime),
    /// Raw bytes for data fields.
    Data(Bytes),
}

impl FieldValue {
    /// Returns the value as a string slice, if it is a String variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an Int variant.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a Decimal, if it is a Decimal variant.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a bool, if it is a Bool variant.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a timestamp, if it is a Timestamp variant.
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Int(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", if *v { "Y" } else { "N" }),
            Self::Char(c) => write!(f, "{}", c),
            Self::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Self::Data(d) => write!(f, "<{} bytes>", d.len()),
        }
    }
}

impl Serialize for FieldValue {
    /// Serializes to the natural JSON shape of each variant: strings for
    /// String/Char/Decimal/Timestamp (decimals as strings to stay exact),
    /// numbers for Int, booleans for Bool.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Decimal(v) => serializer.collect_str(v),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Char(c) => serializer.collect_str(c),
            Self::Timestamp(t) => serializer.collect_str(&t.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Self::Data(d) => serializer.serialize_str(&String::from_utf8_lossy(d)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_field_tag() {
        let tag = FieldTag::new(35);
        assert_eq!(tag.value(), 35);
        assert!(!tag.is_user_defined());
        assert!(FieldTag::new(9999).is_user_defined());
    }

    #[test]
    fn test_tag_value_text() {
        let tv = TagValue::new(11, b"ORDER123");
        assert_eq!(tv.text(), "ORDER123");
        assert_eq!(tv.as_str(), Some("ORDER123"));
        assert_eq!(tv.len(), 8);
    }

    #[test]
    fn test_tag_value_invalid_utf8() {
        let tv = TagValue::new(1, &[0xFF, 0xFE]);
        assert_eq!(tv.as_str(), None);
        assert!(!tv.text().is_empty());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::String("test".to_string()).to_string(), "test");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(true).to_string(), "Y");
        assert_eq!(FieldValue::Bool(false).to_string(), "N");
    }

    #[test]
    fn test_field_value_serialize() {
        let price = FieldValue::Decimal(Decimal::from_str("151.75").unwrap());
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"151.75\"");
        assert_eq!(serde_json::to_string(&FieldValue::Int(100)).unwrap(), "100");
        assert_eq!(
            serde_json::to_string(&FieldValue::Bool(true)).unwrap(),
            "true"
        );
    }
}
