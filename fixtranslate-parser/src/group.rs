/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Repeating-group resolution.
//!
//! Scans the token stream in order and folds repeating-group runs into an
//! explicit recursive tree. A NumInGroup leader declares N instances; the
//! group's delimiter tag (its first member tag, guaranteed present in every
//! instance) marks instance boundaries. A tag outside the declared member
//! set terminates the group early and is re-examined at the enclosing level.

use fixtranslate_core::{ParseError, ParseErrorKind, TagValue};
use fixtranslate_dictionary::{Dictionary, GroupDef};
use tracing::trace;

/// Default bound on group nesting depth.
///
/// Adversarial input could otherwise nest leaders deep enough to exhaust the
/// stack; exceeding the bound reports an error instead.
pub const DEFAULT_MAX_GROUP_DEPTH: usize = 16;

/// One entry of the resolved message tree.
#[derive(Debug, Clone)]
pub enum Node<'a> {
    /// A plain field.
    Field(TagValue<'a>),
    /// A resolved repeating group.
    Group(GroupNode<'a>),
}

/// A resolved repeating group: the leader plus its ordered instances.
#[derive(Debug, Clone)]
pub struct GroupNode<'a> {
    /// The NumInGroup leader tag.
    pub count_tag: u32,
    /// Group name from the dictionary.
    pub name: String,
    /// Declared repetition count, if the leader value was numeric.
    pub declared: Option<u64>,
    /// Ordered instances; each is an ordered run of fields and subgroups.
    pub instances: Vec<Vec<Node<'a>>>,
}

/// Resolves repeating groups over a token stream.
///
/// # Arguments
/// * `fields` - The ordered token stream
/// * `dict` - The field dictionary supplying group definitions
/// * `max_depth` - Nesting depth bound
///
/// # Returns
/// The ordered tree plus the group errors accumulated while building it.
#[must_use]
pub fn resolve_groups<'a>(
    fields: &[TagValue<'a>],
    dict: &Dictionary,
    max_depth: usize,
) -> (Vec<Node<'a>>, Vec<ParseError>) {
    let mut nodes = Vec::new();
    let mut errors = Vec::new();
    let mut idx = 0;

    while let Some(field) = fields.get(idx) {
        if let Some(def) = dict.group(field.tag) {
            let mut strays = Vec::new();
            let group =
                resolve_group(dict, def, fields, &mut idx, 1, max_depth, &mut strays, &mut errors);
            nodes.push(Node::Group(group));
            nodes.append(&mut strays);
        } else {
            nodes.push(Node::Field(*field));
            idx += 1;
        }
    }

    (nodes, errors)
}

/// Resolves one group starting at the leader under `*idx`, consuming the
/// member run and leaving `*idx` on the first tag past the group. Members
/// that arrive before the first delimiter go into `strays` so the caller can
/// keep their values at the enclosing level.
#[allow(clippy::too_many_arguments)]
fn resolve_group<'a>(
    dict: &Dictionary,
    def: &GroupDef,
    fields: &[TagValue<'a>],
    idx: &mut usize,
    depth: usize,
    max_depth: usize,
    strays: &mut Vec<Node<'a>>,
    errors: &mut Vec<ParseError>,
) -> GroupNode<'a> {
    let leader = fields[*idx];
    *idx += 1;

    let declared = leader.as_str().and_then(|s| s.parse::<u64>().ok());
    if declared.is_none() {
        errors.push(ParseError::with_tag(
            ParseErrorKind::TypeCoercionFailed,
            leader.tag,
            format!("non-numeric NumInGroup '{}'", leader.text()),
        ));
    }
    let expected = declared.unwrap_or(0);

    let mut group = GroupNode {
        count_tag: def.count_tag,
        name: def.name.clone(),
        declared,
        instances: Vec::new(),
    };

    if depth > max_depth {
        errors.push(ParseError::with_tag(
            ParseErrorKind::GroupUnderflow,
            def.count_tag,
            format!("group nesting exceeds depth bound {max_depth}"),
        ));
        return group;
    }

    trace!(
        group = %group.name,
        count_tag = def.count_tag,
        expected,
        depth,
        "resolving repeating group"
    );

    // Members arriving before the delimiter cannot belong to any instance;
    // report them and hand the values back so they still reach the output.
    while let Some(field) = fields.get(*idx) {
        if field.tag == def.delimiter_tag || !def.is_member(field.tag) {
            break;
        }
        errors.push(ParseError::with_tag(
            ParseErrorKind::UnexpectedGroupMember,
            field.tag,
            format!(
                "member {} of {} before delimiter {}",
                field.tag, group.name, def.delimiter_tag
            ),
        ));
        strays.push(Node::Field(*field));
        *idx += 1;
    }

    'instances: while (group.instances.len() as u64) < expected {
        let Some(field) = fields.get(*idx) else {
            break;
        };
        if field.tag != def.delimiter_tag {
            break;
        }
        let mut instance = vec![Node::Field(*field)];
        *idx += 1;

        while let Some(member) = fields.get(*idx) {
            if member.tag == def.delimiter_tag {
                break;
            }
            if def.is_member(member.tag) {
                if let Some(nested) = dict.group(member.tag) {
                    let mut child_strays = Vec::new();
                    let child = resolve_group(
                        dict,
                        nested,
                        fields,
                        idx,
                        depth + 1,
                        max_depth,
                        &mut child_strays,
                        errors,
                    );
                    instance.push(Node::Group(child));
                    instance.append(&mut child_strays);
                } else {
                    instance.push(Node::Field(*member));
                    *idx += 1;
                }
            } else {
                // Early termination: hand the tag back to the enclosing scan.
                group.instances.push(instance);
                break 'instances;
            }
        }
        group.instances.push(instance);
    }

    let found = group.instances.len() as u64;
    if declared.is_some() && found < expected {
        errors.push(ParseError::with_tag(
            ParseErrorKind::GroupUnderflow,
            def.count_tag,
            format!("{} declared {expected} instances, found {found}", group.name),
        ));
    }

    group
}
