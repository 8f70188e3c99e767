/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! # FixTranslate Parser
//!
//! Repeating-group resolution, flattening, and the parse orchestrator.
//!
//! This crate turns a tokenized FIX message into the normalized
//! [`ParseResult`] consumed by logging, search, and alerting exporters:
//!
//! 1. **Group resolver**: nests repeating-group tag runs into an ordered
//!    tree of instances, recursively for nested groups
//! 2. **Flattener**: walks the tree into a flat canonical-name → typed-value
//!    map, with unknown/vendor tags preserved verbatim
//! 3. **Orchestrator**: runs tokenize → validate → group → flatten, merging
//!    the errors each stage accumulates
//!
//! Parsing is a pure function of its input plus the read-only dictionary:
//! every call builds a fresh result, so arbitrary concurrent callers need no
//! locking.

pub mod flatten;
pub mod group;
pub mod parse;
pub mod result;
mod summary;

pub use flatten::{Flattened, GroupInstance, InstanceValue, flatten_tree};
pub use group::{DEFAULT_MAX_GROUP_DEPTH, GroupNode, Node, resolve_groups};
pub use parse::{ParseOptions, parse, parse_with};
pub use result::ParseResult;
