//! Schema-filtered cleaning of a parsed root payload.

use mx_core::{Datatype, ElementNode, Node, TypeDefinition};

/// Reduce a parsed root payload to its declared fields.
///
/// Undeclared children are dropped, fields declared as arrays are forced
/// into list form, and root attributes are carried over. Returns `None`
/// when the payload is not a structured element (a non-empty scalar or a
/// list cannot be a document body).
pub fn clean_root(type_def: &TypeDefinition, root: &Node) -> Option<ElementNode> {
    let source = match root {
        Node::Element(element) => element.clone(),
        // An empty document body parses as an empty scalar.
        Node::Scalar(s) if s.is_empty() => ElementNode::new(),
        _ => return None,
    };

    let mut cleaned = ElementNode::new();
    cleaned.attributes = source.attributes;
    for (name, definition) in &type_def.fields {
        let Some(value) = source.children.get(name) else {
            continue;
        };
        let value = if definition.datatype == Datatype::Array && !matches!(value, Node::List(_)) {
            Node::List(vec![value.clone()])
        } else {
            value.clone()
        };
        cleaned.set_child(name.clone(), value);
    }
    Some(cleaned)
}
