/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! # FixTranslate Tag-Value
//!
//! Lenient FIX tag=value tokenization and structural validation.
//!
//! Unlike a session engine, a traffic translator must decode whatever shows
//! up on the wire: a trading operator inspecting malformed traffic needs the
//! best-effort field map, not an abort. Tokenization therefore records faults
//! and keeps going; structural validation (BeginString, BodyLength, CheckSum)
//! reports each violation as a distinct error without stopping the pipeline.
//!
//! ## Features
//!
//! - **Zero-copy tokenization**: Field values reference the original buffer
//! - **SIMD-accelerated**: Uses `memchr` for delimiter search
//! - **Configurable delimiter**: SOH by default, with `|` normalization for
//!   copy-pasted messages

pub mod checksum;
pub mod tokenizer;
pub mod validator;

pub use checksum::{body_checksum, format_checksum, parse_declared_checksum};
pub use tokenizer::{EQUALS, SOH, Tokenizer, normalize_delimiters};
pub use validator::{Validation, validate_structure};
