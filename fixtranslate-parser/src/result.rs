/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! The translated message handed to callers.
//!
//! A [`ParseResult`] is built fresh by every parse call and never mutated
//! afterwards. Serialized at the boundary as:
//!
//! ```json
//! {
//!   "raw": "8=FIX.4.2|...",
//!   "flat": {"MsgType": "D", "Price": "151.75"},
//!   "groups": {"NoAllocs": [{"AllocAccount": "A1"}]},
//!   "unknown": {"9999": "HELLO"},
//!   "checksum_valid": true,
//!   "errors": [{"kind": "...", "tag": 10, "message": "..."}]
//! }
//! ```

use fixtranslate_core::{FieldValue, ParseError};
use indexmap::IndexMap;
use serde::Serialize;

use crate::flatten::GroupInstance;

/// Normalized, flattened representation of one FIX message.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ParseResult {
    /// The original message text as received.
    pub raw: String,
    /// Canonical field name → typed value, in tag order.
    pub flat: IndexMap<String, FieldValue>,
    /// Group leader name → ordered instances.
    pub groups: IndexMap<String, Vec<GroupInstance>>,
    /// Tags absent from the dictionary → raw value.
    pub unknown: IndexMap<u32, String>,
    /// True iff the recomputed body checksum matches the declared trailer.
    pub checksum_valid: bool,
    /// Accumulated faults, in pipeline order.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Returns true if the parse hit the fatal empty-message condition.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.errors.iter().any(ParseError::is_fatal)
    }

    /// Returns a flat value by canonical name, rendered as text.
    #[must_use]
    pub fn flat_text(&self, name: &str) -> Option<String> {
        self.flat.get(name).map(FieldValue::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtranslate_core::{ParseError, ParseErrorKind};

    #[test]
    fn test_fatal_detection() {
        let mut result = ParseResult::default();
        assert!(!result.is_fatal());

        result.errors.push(ParseError::new(
            ParseErrorKind::ChecksumMismatch,
            "calculated 161, declared 000",
        ));
        assert!(!result.is_fatal());

        result
            .errors
            .push(ParseError::new(ParseErrorKind::EmptyMessage, "empty input"));
        assert!(result.is_fatal());
    }

    #[test]
    fn test_serialized_field_names() {
        let result = ParseResult {
            raw: "8=FIX.4.2|".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        for key in ["raw", "flat", "groups", "unknown", "checksum_valid", "errors"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
