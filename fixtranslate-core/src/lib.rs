/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! # FixTranslate Core
//!
//! Core types and error definitions for the FixTranslate FIX message translator.
//!
//! This crate provides the fundamental building blocks used across all
//! FixTranslate crates:
//! - **Error types**: The non-aborting parse error taxonomy (`ParseError`)
//! - **Field types**: `FieldTag`, `TagValue`, and the typed `FieldValue` variant
//! - **Time types**: FIX UTCTimestamp parsing and formatting
//!
//! ## Lenient Decoding Design
//!
//! The translator never fails across its public boundary: every parse call
//! returns a result value carrying zero or more accumulated [`ParseError`]s.
//! The only fatal condition is an empty message.

pub mod error;
pub mod field;
pub mod types;

pub use error::{ParseError, ParseErrorKind};
pub use field::{
    FieldTag, FieldValue, TAG_BEGIN_STRING, TAG_BODY_LENGTH, TAG_CHECKSUM, TAG_MSG_TYPE, TagValue,
};
pub use types::{format_utc_timestamp, parse_utc_date, parse_utc_time, parse_utc_timestamp};
