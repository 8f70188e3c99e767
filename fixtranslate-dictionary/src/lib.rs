/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! # FixTranslate Dictionary
//!
//! FIX field dictionary and repeating-group definitions for FixTranslate.
//!
//! This crate provides:
//! - **Schema definitions**: Field, group, and message-type name tables
//! - **Embedded baseline**: A FIX 4.x dictionary covering the common
//!   session, order, and execution fields
//! - **Process-wide global**: Install-once, read-only dictionary shared by
//!   every parse call without synchronization
//!
//! The canonical dictionary source is deliberately parameterized: deployments
//! with vendor-specific tags extend or replace [`Dictionary::base`] through
//! the builder API before calling [`install`].

pub mod base;
pub mod schema;

pub use schema::{Dictionary, FieldDef, FieldType, GroupDef};

use std::sync::OnceLock;

static GLOBAL: OnceLock<Dictionary> = OnceLock::new();

/// Installs the process-wide dictionary.
///
/// May be called at most once, before the first parse; later calls are
/// rejected. The dictionary holds no external resources and is never torn
/// down.
///
/// # Arguments
/// * `dictionary` - The dictionary to share across all parse calls
///
/// # Returns
/// `true` if the dictionary was installed, `false` if one was already set.
pub fn install(dictionary: Dictionary) -> bool {
    GLOBAL.set(dictionary).is_ok()
}

/// Returns the process-wide dictionary.
///
/// Falls back to the embedded FIX 4.x baseline when nothing was installed.
#[must_use]
pub fn global() -> &'static Dictionary {
    GLOBAL.get_or_init(Dictionary::base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_falls_back_to_base() {
        let dict = global();
        assert_eq!(dict.field_name(35), Some("MsgType"));
        // Second call hands back the same table.
        assert!(std::ptr::eq(dict, global()));
    }
}
