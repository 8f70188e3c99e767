/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Schema definitions for the FIX field dictionary.
//!
//! This module defines the structures that drive normalization:
//! - [`FieldType`]: Closed variant of FIX primitive value types
//! - [`FieldDef`]: Field definition with tag, canonical name, and type
//! - [`GroupDef`]: Repeating-group definition (count tag, delimiter, members)
//! - [`Dictionary`]: Complete lookup table for one deployment

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FIX field value type.
///
/// A closed variant per FIX primitive; coercion dispatches over this with an
/// exhaustive match, never runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// String value.
    String,
    /// Single character.
    Char,
    /// Integer value.
    Int,
    /// Length field (for data fields).
    Length,
    /// Sequence number.
    SeqNum,
    /// Number of entries in a repeating group.
    NumInGroup,
    /// Floating point number, carried as an exact decimal.
    Float,
    /// Quantity.
    Qty,
    /// Price.
    Price,
    /// Amount (price * quantity).
    Amt,
    /// Boolean (Y/N).
    Boolean,
    /// UTC timestamp (`YYYYMMDD-HH:MM:SS[.sss]`).
    UtcTimestamp,
    /// UTC date only (`YYYYMMDD`).
    UtcDateOnly,
    /// UTC time only (`HH:MM:SS[.sss]`).
    UtcTimeOnly,
    /// Currency code (ISO 4217).
    Currency,
    /// Exchange code (ISO 10383 MIC).
    Exchange,
    /// Raw data (binary).
    Data,
}

impl FieldType {
    /// Returns true if this type coerces to an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Int | Self::Length | Self::SeqNum | Self::NumInGroup)
    }

    /// Returns true if this type coerces to an exact decimal.
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Self::Float | Self::Qty | Self::Price | Self::Amt)
    }
}

impl std::str::FromStr for FieldType {
    type Err = std::convert::Infallible;

    /// Maps a QuickFIX-style type name to a [`FieldType`], defaulting to
    /// `String` for anything unrecognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "CHAR" => Self::Char,
            "INT" => Self::Int,
            "LENGTH" => Self::Length,
            "SEQNUM" => Self::SeqNum,
            "NUMINGROUP" => Self::NumInGroup,
            "FLOAT" | "PERCENTAGE" | "PRICEOFFSET" => Self::Float,
            "QTY" | "QUANTITY" => Self::Qty,
            "PRICE" => Self::Price,
            "AMT" | "AMOUNT" => Self::Amt,
            "BOOLEAN" => Self::Boolean,
            "UTCTIMESTAMP" => Self::UtcTimestamp,
            "UTCDATEONLY" | "LOCALMKTDATE" => Self::UtcDateOnly,
            "UTCTIMEONLY" => Self::UtcTimeOnly,
            "CURRENCY" => Self::Currency,
            "EXCHANGE" => Self::Exchange,
            "DATA" | "XMLDATA" => Self::Data,
            _ => Self::String,
        })
    }
}

/// Sanitizes a field name into a transport-safe identifier.
///
/// Output contains only `[A-Za-z0-9_]`, so downstream exporters (Splunk HEC,
/// Datadog, Firehose) never need to re-sanitize flat keys.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Definition of a FIX field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Canonical field name, sanitized to `[A-Za-z0-9_]`.
    pub name: String,
    /// Field value type.
    pub field_type: FieldType,
    /// Enum value descriptions, e.g. Side `1` -> `BUY`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub enums: HashMap<String, String>,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// The name is sanitized on construction; flat output keys come straight
    /// from here.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The field value type
    #[must_use]
    pub fn new(tag: u32, name: impl AsRef<str>, field_type: FieldType) -> Self {
        Self {
            tag,
            name: sanitize_name(name.as_ref()),
            field_type,
            enums: HashMap::new(),
        }
    }

    /// Adds an enum value description.
    #[must_use]
    pub fn with_enum(mut self, value: impl Into<String>, description: impl Into<String>) -> Self {
        self.enums.insert(value.into(), description.into());
        self
    }

    /// Gets the description for an enum value, if the field declares one.
    #[must_use]
    pub fn enum_desc(&self, value: &str) -> Option<&str> {
        self.enums.get(value).map(String::as_str)
    }
}

/// Definition of a repeating group.
///
/// The delimiter tag is the first member tag of the group; FIX guarantees it
/// is present in every instance, so its reappearance marks an instance
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDef {
    /// Tag of the count field (NumInGroup).
    pub count_tag: u32,
    /// Group name, sanitized like field names.
    pub name: String,
    /// Tag of the first field in each instance.
    pub delimiter_tag: u32,
    /// Member tags in declaration order (delimiter first).
    pub member_tags: Vec<u32>,
    /// Nested groups whose count tag is a member of this group.
    pub groups: Vec<GroupDef>,
}

impl GroupDef {
    /// Creates a new group definition.
    ///
    /// # Arguments
    /// * `count_tag` - The NumInGroup leader tag
    /// * `name` - The group name
    /// * `member_tags` - Member tags in declaration order; the first is the
    ///   instance delimiter
    #[must_use]
    pub fn new(count_tag: u32, name: impl AsRef<str>, member_tags: Vec<u32>) -> Self {
        let delimiter_tag = member_tags.first().copied().unwrap_or(0);
        Self {
            count_tag,
            name: sanitize_name(name.as_ref()),
            delimiter_tag,
            member_tags,
            groups: Vec::new(),
        }
    }

    /// Adds a nested group. Its count tag becomes a member of this group.
    #[must_use]
    pub fn with_nested(mut self, group: GroupDef) -> Self {
        self.member_tags.push(group.count_tag);
        self.groups.push(group);
        self
    }

    /// Returns true if the tag belongs to this group's member set.
    #[must_use]
    pub fn is_member(&self, tag: u32) -> bool {
        self.member_tags.contains(&tag)
    }
}

/// Complete FIX dictionary for one deployment.
///
/// Built once at process start, read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    /// Field definitions indexed by tag.
    fields: HashMap<u32, FieldDef>,
    /// Tag lookup by canonical name.
    fields_by_name: HashMap<String, u32>,
    /// Group definitions indexed by count tag (nested groups included).
    groups: HashMap<u32, GroupDef>,
    /// Message-type names indexed by tag 35 value.
    msg_types: HashMap<String, String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field definition, replacing any previous definition of the tag.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields_by_name.insert(field.name.clone(), field.tag);
        self.fields.insert(field.tag, field);
    }

    /// Adds a group definition. Nested groups are registered recursively so
    /// the resolver can look any leader up by its count tag.
    pub fn add_group(&mut self, group: GroupDef) {
        for nested in &group.groups {
            self.add_group(nested.clone());
        }
        self.groups.insert(group.count_tag, group);
    }

    /// Adds an enum value description to an already-registered field.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `value` - The wire value, e.g. `"1"`
    /// * `description` - The human-readable name, e.g. `"BUY"`
    pub fn add_enum(&mut self, tag: u32, value: impl Into<String>, description: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(&tag) {
            field.enums.insert(value.into(), description.into());
        }
    }

    /// Adds a message-type name (tag 35 value table).
    ///
    /// # Arguments
    /// * `value` - The wire value, e.g. `"D"`
    /// * `name` - The message name, e.g. `"NewOrderSingle"`
    pub fn add_msg_type(&mut self, value: impl Into<String>, name: impl Into<String>) {
        self.msg_types.insert(value.into(), name.into());
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&FieldDef> {
        self.fields.get(&tag)
    }

    /// Gets a field's canonical name by tag.
    #[must_use]
    pub fn field_name(&self, tag: u32) -> Option<&str> {
        self.fields.get(&tag).map(|f| f.name.as_str())
    }

    /// Gets a field definition by canonical name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields_by_name.get(name).and_then(|tag| self.fields.get(tag))
    }

    /// Gets a group definition by its count tag.
    #[must_use]
    pub fn group(&self, count_tag: u32) -> Option<&GroupDef> {
        self.groups.get(&count_tag)
    }

    /// Returns true if the tag is a repeating-group leader.
    #[must_use]
    pub fn is_group_leader(&self, tag: u32) -> bool {
        self.groups.contains_key(&tag)
    }

    /// Gets the description for a field's enum value.
    #[must_use]
    pub fn enum_desc(&self, tag: u32, value: &str) -> Option<&str> {
        self.fields.get(&tag).and_then(|f| f.enum_desc(value))
    }

    /// Gets the message name for a tag 35 value.
    #[must_use]
    pub fn msg_type_name(&self, value: &str) -> Option<&str> {
        self.msg_types.get(value).map(String::as_str)
    }

    /// Returns an iterator over all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }
}
