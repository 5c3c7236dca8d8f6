//! Recursive field rendering — the heart of the canonicalizer.
//!
//! Every field value is rendered against its definition, the active sort
//! strategy, and the current indent depth. Collapsible fields become one
//! inline element per value; everything else expands into an indented
//! block. Empty `{}`/`[]` values are pruned by the callers before any
//! tag is opened.

use crate::classify::must_compress;
use crate::keys::ordered_field_keys;
use mx_core::{Datatype, FieldDefinition, Node, SortOrder, TypeDefinition};
use mx_parser::escape::{escape_attr, escape_text};

/// Line terminator used throughout the canonical form.
pub const NEWLINE: &str = "\r\n";

pub(crate) fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}

/// `<tag attr="v">`, or `<tag attr="v"/>` when self-closing. Attributes
/// keep their insertion order.
pub(crate) fn start_tag(
    tag: &str,
    attributes: &[(String, String)],
    self_closing: bool,
) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    if self_closing {
        out.push('/');
    }
    out.push('>');
    out
}

pub(crate) fn end_tag(tag: &str) -> String {
    format!("</{tag}>")
}

/// A complete inline element; empty values render self-closing.
pub(crate) fn xml_element(tag: &str, attributes: &[(String, String)], value: &str) -> String {
    if value.is_empty() {
        start_tag(tag, attributes, true)
    } else {
        format!(
            "{}{}{}",
            start_tag(tag, attributes, false),
            escape_text(value),
            end_tag(tag)
        )
    }
}

/// Composite sort key for an array element: the named subfield values
/// joined with `_`, compared case-insensitively.
fn composite_key(node: &Node, fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| {
            node.child(field)
                .and_then(Node::scalar_value)
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("_")
}

fn sort_elements(elements: &mut [&Node], sort_by: &[String]) {
    elements.sort_by(|a, b| {
        composite_key(a, sort_by)
            .to_lowercase()
            .cmp(&composite_key(b, sort_by).to_lowercase())
    });
}

/// Look up and resolve a subfield definition at the current level.
fn subfield<'a>(
    type_def: &'a TypeDefinition,
    field: &'a FieldDefinition,
    key: &str,
) -> Option<&'a FieldDefinition> {
    field
        .fields
        .as_ref()
        .and_then(|fields| fields.get(key))
        .map(|declared| type_def.resolve(declared))
}

/// Render one field value at the given indent depth.
///
/// The owning [`TypeDefinition`] is threaded explicitly so definition
/// references resolve without shared state.
pub fn render_field(
    type_def: &TypeDefinition,
    field: &FieldDefinition,
    value: &Node,
    sort_order: SortOrder,
    indent: usize,
) -> String {
    let mut content = String::new();
    if must_compress(field) {
        if field.is_complex() {
            let keys = ordered_field_keys(field, sort_order);
            if matches!(value, Node::List(_)) || field.datatype == Datatype::Array {
                let mut elements = value.force_list();
                if let Some(sort_by) = &field.sort_by {
                    sort_elements(&mut elements, sort_by);
                }
                for element in elements {
                    content.push_str(&tabs(indent));
                    content.push_str(&start_tag(&field.key, element.attributes(), false));
                    match &keys {
                        Some(keys) => {
                            for key in keys {
                                let Some(sub_value) = element.child(key) else {
                                    continue;
                                };
                                if sub_value.prunes() {
                                    continue;
                                }
                                let Some(sub_def) = subfield(type_def, field, key) else {
                                    continue;
                                };
                                if sub_def.datatype == Datatype::Object {
                                    // Nested objects inline at depth zero.
                                    content.push_str(&render_field(
                                        type_def, sub_def, sub_value, sort_order, 0,
                                    ));
                                } else {
                                    content.push_str(&xml_element(
                                        &sub_def.key,
                                        sub_value.attributes(),
                                        &sub_def.prepare(sub_value),
                                    ));
                                }
                            }
                        }
                        None => content.push_str(&escape_text(&field.prepare(element))),
                    }
                    content.push_str(&end_tag(&field.key));
                    content.push_str(NEWLINE);
                }
            } else {
                let empty = value.is_empty_value();
                content.push_str(&tabs(indent));
                content.push_str(&start_tag(&field.key, value.attributes(), empty));
                if empty {
                    content.push_str(NEWLINE);
                } else {
                    if let Some(keys) = &keys {
                        for key in keys {
                            let Some(sub_value) = value.child(key) else {
                                continue;
                            };
                            if sub_value.prunes() {
                                continue;
                            }
                            let Some(sub_def) = subfield(type_def, field, key) else {
                                continue;
                            };
                            content.push_str(&xml_element(
                                &sub_def.key,
                                sub_value.attributes(),
                                &sub_def.prepare(sub_value),
                            ));
                        }
                    }
                    content.push_str(&end_tag(&field.key));
                    if indent != 0 {
                        content.push_str(NEWLINE);
                    }
                }
            }
        } else {
            content.push_str(&tabs(indent));
            content.push_str(&xml_element(
                &field.key,
                value.attributes(),
                &field.prepare(value),
            ));
            content.push_str(NEWLINE);
        }
    } else {
        let keys = ordered_field_keys(field, sort_order);
        if matches!(value, Node::List(_)) || field.datatype == Datatype::Array {
            let mut elements = value.force_list();
            if let Some(sort_by) = &field.sort_by {
                sort_elements(&mut elements, sort_by);
            }
            for element in elements {
                match &keys {
                    None => {
                        // No declared subfields: one inline scalar line
                        // per element.
                        content.push_str(&tabs(indent));
                        content.push_str(&start_tag(&field.key, element.attributes(), false));
                        content.push_str(&escape_text(&field.prepare(element)));
                        content.push_str(&end_tag(&field.key));
                        content.push_str(NEWLINE);
                    }
                    Some(keys) => {
                        content.push_str(&tabs(indent));
                        content.push_str(&start_tag(&field.key, element.attributes(), false));
                        content.push_str(NEWLINE);
                        for key in keys {
                            let Some(sub_value) = element.child(key) else {
                                continue;
                            };
                            if sub_value.prunes() {
                                continue;
                            }
                            let Some(sub_def) = subfield(type_def, field, key) else {
                                continue;
                            };
                            content.push_str(&render_field(
                                type_def,
                                sub_def,
                                sub_value,
                                sort_order,
                                indent + 1,
                            ));
                        }
                        content.push_str(&tabs(indent));
                        content.push_str(&end_tag(&field.key));
                        content.push_str(NEWLINE);
                    }
                }
            }
        } else {
            let empty = value.is_empty_value();
            content.push_str(&tabs(indent));
            content.push_str(&start_tag(&field.key, value.attributes(), empty));
            content.push_str(NEWLINE);
            if !empty {
                if let Some(keys) = &keys {
                    for key in keys {
                        let Some(sub_value) = value.child(key) else {
                            continue;
                        };
                        if sub_value.prunes() {
                            continue;
                        }
                        let Some(sub_def) = subfield(type_def, field, key) else {
                            continue;
                        };
                        content.push_str(&render_field(
                            type_def,
                            sub_def,
                            sub_value,
                            sort_order,
                            indent + 1,
                        ));
                    }
                }
                content.push_str(&tabs(indent));
                content.push_str(&end_tag(&field.key));
                content.push_str(NEWLINE);
            }
        }
    }
    content
}
