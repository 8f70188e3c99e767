/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! # FixTranslate
//!
//! A stateless FIX message translator: raw tag=value bytes in, a normalized
//! flattened field map out, ready for logging, search, and alerting
//! pipelines (Splunk HEC, Datadog Logs, Firehose).
//!
//! This is deliberately not a FIX engine: there is no session layer, no
//! logon, no sequence-gap recovery. Every parse call is a pure function of
//! its input plus a read-only dictionary, safe to run on any number of
//! threads without locking.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixtranslate::prelude::*;
//!
//! let raw = b"8=FIX.4.2\x019=5\x0135=0\x0110=161\x01";
//! let result = parse(raw);
//!
//! assert!(result.checksum_valid);
//! assert_eq!(result.flat_text("MsgType").as_deref(), Some("0"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Error taxonomy and field value types
//! - [`dictionary`]: Field/group definitions and the process-wide table
//! - [`tagvalue`]: Tokenization, checksum, structural validation
//! - [`parser`]: Group resolution, flattening, and the orchestrator

pub mod core {
    //! Error taxonomy and field value types.
    pub use fixtranslate_core::*;
}

pub mod dictionary {
    //! Field/group definitions and the process-wide table.
    pub use fixtranslate_dictionary::*;
}

pub mod tagvalue {
    //! Tokenization, checksum, structural validation.
    pub use fixtranslate_tagvalue::*;
}

pub mod parser {
    //! Group resolution, flattening, and the orchestrator.
    pub use fixtranslate_parser::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fixtranslate_core::{
        FieldTag, FieldValue, ParseError, ParseErrorKind, TagValue,
    };

    pub use fixtranslate_dictionary::{Dictionary, FieldDef, FieldType, GroupDef, global, install};

    pub use fixtranslate_tagvalue::{
        SOH, Tokenizer, body_checksum, format_checksum, normalize_delimiters, validate_structure,
    };

    pub use fixtranslate_parser::{
        GroupInstance, Node, ParseOptions, ParseResult, parse, parse_with,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_round_trip() {
        let raw = b"8=FIX.4.2\x019=5\x0135=0\x0110=161\x01";
        let result = parse(raw);
        assert!(result.checksum_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_custom_dictionary_flow() {
        let mut dict = Dictionary::base();
        dict.add_field(FieldDef::new(9999, "CustomTag", FieldType::String));

        let raw = b"8=FIX.4.2|9=16|35=D|9999=HELLO|10=000|";
        let normalized = normalize_delimiters(raw);
        let result = parse_with(&normalized, &ParseOptions::new(), &dict);

        assert_eq!(result.flat_text("CustomTag").as_deref(), Some("HELLO"));
        assert!(result.unknown.is_empty());
    }

    #[test]
    fn test_json_contract() {
        let raw = b"8=FIX.4.2\x019=5\x0135=0\x0110=000\x01";
        let json = serde_json::to_value(parse(raw)).unwrap();

        assert_eq!(json["flat"]["MsgType"], "0");
        assert_eq!(json["checksum_valid"], false);
        assert_eq!(json["errors"][0]["kind"], "ChecksumMismatch");
    }
}
