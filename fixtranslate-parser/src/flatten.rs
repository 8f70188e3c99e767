/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Flattening and type normalization.
//!
//! Walks the resolved tree into the three output maps:
//! - `flat`: canonical field name → typed value, insertion order = tag order
//! - `groups`: group name → ordered instances
//! - `unknown`: numeric tag → raw value, for tags absent from the dictionary
//!
//! Values coerce per their dictionary type; a value that fails to coerce is
//! kept as its raw string and recorded as a `TypeCoercionFailed` fault.
//! Decimal fields stay exact fixed-point end to end.

use bytes::Bytes;
use fixtranslate_core::{
    FieldValue, ParseError, ParseErrorKind, TAG_BEGIN_STRING, TAG_BODY_LENGTH, TAG_CHECKSUM,
    TagValue, parse_utc_date, parse_utc_time, parse_utc_timestamp,
};
use fixtranslate_dictionary::{Dictionary, FieldDef, FieldType};
use indexmap::IndexMap;
use indexmap::map::Entry;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::group::Node;

/// One repetition of a repeating group, serialized as a JSON object.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct GroupInstance(pub IndexMap<String, InstanceValue>);

/// A group-instance entry: either a member field or a nested instance list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum InstanceValue {
    /// A coerced member field.
    Field(FieldValue),
    /// A nested repeating group.
    Group(Vec<GroupInstance>),
}

/// Output of the flattening stage.
#[derive(Debug, Clone, Default)]
pub struct Flattened {
    /// Canonical field name → typed value, in tag order.
    pub flat: IndexMap<String, FieldValue>,
    /// Group name → ordered instances.
    pub groups: IndexMap<String, Vec<GroupInstance>>,
    /// Tags absent from the dictionary, verbatim.
    pub unknown: IndexMap<u32, String>,
    /// Coercion faults, in tag order.
    pub errors: Vec<ParseError>,
}

/// Flattens a resolved tree against the dictionary.
///
/// Envelope tags (8, 9, 10) are structural and stay out of `flat`; group
/// leaders route their instances into `groups`, never `flat`. At most one
/// `flat` entry exists per canonical name; the first occurrence wins. A
/// leader appearing more than once appends its instances to the existing
/// entry, so no decoded instance is ever dropped.
#[must_use]
pub fn flatten_tree(nodes: &[Node<'_>], dict: &Dictionary) -> Flattened {
    let mut out = Flattened::default();

    for node in nodes {
        match node {
            Node::Field(field) => flatten_field(field, dict, &mut out),
            Node::Group(group) => {
                let instances: Vec<GroupInstance> = group
                    .instances
                    .iter()
                    .map(|instance| flatten_instance(instance, dict, &mut out))
                    .collect();
                out.groups
                    .entry(group.name.clone())
                    .or_default()
                    .extend(instances);
            }
        }
    }

    out
}

fn flatten_field(field: &TagValue<'_>, dict: &Dictionary, out: &mut Flattened) {
    if matches!(field.tag, TAG_BEGIN_STRING | TAG_BODY_LENGTH | TAG_CHECKSUM) {
        return;
    }
    match dict.field(field.tag) {
        Some(def) => {
            if !out.flat.contains_key(&def.name) {
                let value = coerce(def, field, &mut out.errors);
                out.flat.insert(def.name.clone(), value);
            }
        }
        None => {
            out.unknown
                .entry(field.tag)
                .or_insert_with(|| field.text().into_owned());
        }
    }
}

fn flatten_instance(
    nodes: &[Node<'_>],
    dict: &Dictionary,
    out: &mut Flattened,
) -> GroupInstance {
    let mut entries = IndexMap::new();

    for node in nodes {
        match node {
            Node::Field(field) => {
                // Vendor group definitions may reference tags with no field
                // definition; fall back to a Tag<N> key rather than dropping.
                let (name, value) = match dict.field(field.tag) {
                    Some(def) => (def.name.clone(), coerce(def, field, &mut out.errors)),
                    None => (
                        format!("Tag{}", field.tag),
                        FieldValue::String(field.text().into_owned()),
                    ),
                };
                entries.entry(name).or_insert(InstanceValue::Field(value));
            }
            Node::Group(group) => {
                let instances: Vec<GroupInstance> = group
                    .instances
                    .iter()
                    .map(|instance| flatten_instance(instance, dict, out))
                    .collect();
                match entries.entry(group.name.clone()) {
                    Entry::Occupied(mut entry) => {
                        if let InstanceValue::Group(existing) = entry.get_mut() {
                            existing.extend(instances);
                        }
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(InstanceValue::Group(instances));
                    }
                }
            }
        }
    }

    GroupInstance(entries)
}

/// Coerces a raw value to its dictionary type.
///
/// Failure keeps the raw string and records a `TypeCoercionFailed` fault;
/// the parse never aborts on a bad value.
fn coerce(def: &FieldDef, field: &TagValue<'_>, errors: &mut Vec<ParseError>) -> FieldValue {
    let raw = field.text();

    let coerced = match def.field_type {
        FieldType::String | FieldType::Currency | FieldType::Exchange => {
            return FieldValue::String(raw.into_owned());
        }
        FieldType::Data => return FieldValue::Data(Bytes::copy_from_slice(field.value)),
        FieldType::Char => {
            (field.value.len() == 1 && field.value[0].is_ascii())
                .then(|| FieldValue::Char(field.value[0] as char))
        }
        FieldType::Int | FieldType::Length | FieldType::SeqNum | FieldType::NumInGroup => {
            raw.parse::<i64>().ok().map(FieldValue::Int)
        }
        FieldType::Float | FieldType::Qty | FieldType::Price | FieldType::Amt => {
            Decimal::from_str(&raw).ok().map(FieldValue::Decimal)
        }
        FieldType::Boolean => match field.value {
            b"Y" => Some(FieldValue::Bool(true)),
            b"N" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        FieldType::UtcTimestamp => parse_utc_timestamp(&raw).map(FieldValue::Timestamp),
        // Date-only and time-only values stay strings; parsing only checks
        // that the wire form is well-formed.
        FieldType::UtcDateOnly => {
            parse_utc_date(&raw).map(|_| FieldValue::String(raw.to_string()))
        }
        FieldType::UtcTimeOnly => {
            parse_utc_time(&raw).map(|_| FieldValue::String(raw.to_string()))
        }
    };

    coerced.unwrap_or_else(|| {
        errors.push(ParseError::with_tag(
            ParseErrorKind::TypeCoercionFailed,
            def.tag,
            format!("cannot coerce '{}' to {:?}", raw, def.field_type),
        ));
        FieldValue::String(raw.into_owned())
    })
}
