//! Event-driven XML reader producing the [`Node`] tree.

use crate::escape::{resolve_entity, unescape};
use mx_core::{ElementNode, MxError, Node, Result, Scalar};
use quick_xml::events::Event;
use quick_xml::Reader;

/// One open element being assembled. Text fragments accumulate raw and
/// are trimmed once the element closes, so interior spacing around
/// entity references survives.
struct Frame {
    name: String,
    element: ElementNode,
    text: String,
}

/// Parse raw XML text into a tree keyed by the top-level tag name.
///
/// Empty or whitespace-only input yields an empty tree, not an error.
/// With `parse_comments` set, `<!-- -->` blocks inside leaf values are
/// preserved as part of the text content.
pub fn parse_tree(raw: &str, parse_comments: bool) -> Result<ElementNode> {
    if raw.trim().is_empty() {
        return Ok(ElementNode::new());
    }

    let mut reader = Reader::from_str(raw);
    let mut root = ElementNode::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| MxError::Parse(e.to_string()))?;
        match event {
            Event::Start(e) => {
                let mut frame = Frame {
                    name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    element: ElementNode::new(),
                    text: String::new(),
                };
                read_attributes(&e, &mut frame.element)?;
                stack.push(frame);
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let mut element = ElementNode::new();
                read_attributes(&e, &mut element)?;
                let node = if element.attributes.is_empty() {
                    Node::Scalar(Scalar::Text(String::new()))
                } else {
                    Node::Element(element)
                };
                attach(target_children(&mut stack, &mut root), name, node);
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| MxError::Parse("unexpected closing tag".to_string()))?;
                let name = frame.name.clone();
                let node = finalize(frame);
                attach(target_children(&mut stack, &mut root), name, node);
            }
            Event::Text(t) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&unescape(&String::from_utf8_lossy(t.as_ref())));
                }
            }
            Event::CData(t) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Event::GeneralRef(e) => {
                if let Some(frame) = stack.last_mut() {
                    let name = String::from_utf8_lossy(e.as_ref()).into_owned();
                    match resolve_entity(&name) {
                        Some(decoded) => frame.text.push_str(&decoded),
                        None => {
                            frame.text.push('&');
                            frame.text.push_str(&name);
                            frame.text.push(';');
                        }
                    }
                }
            }
            Event::Comment(t) => {
                if parse_comments {
                    if let Some(frame) = stack.last_mut() {
                        frame.text.push_str("<!--");
                        frame.text.push_str(&String::from_utf8_lossy(t.as_ref()));
                        frame.text.push_str("-->");
                    }
                }
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err(MxError::Parse("unexpected end of document".to_string()));
    }
    Ok(root)
}

fn read_attributes(e: &quick_xml::events::BytesStart, element: &mut ElementNode) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| MxError::Parse(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = unescape(&String::from_utf8_lossy(&attr.value));
        element.push_attribute(key, value);
    }
    Ok(())
}

fn target_children<'a>(
    stack: &'a mut [Frame],
    root: &'a mut ElementNode,
) -> &'a mut std::collections::BTreeMap<String, Node> {
    match stack.last_mut() {
        Some(frame) => &mut frame.element.children,
        None => &mut root.children,
    }
}

/// Close out a frame: a childless, attributeless element collapses to a
/// plain scalar, anything else stays structured.
fn finalize(frame: Frame) -> Node {
    let mut element = frame.element;
    let text = frame.text.trim();
    if element.children.is_empty() && element.attributes.is_empty() {
        return Node::Scalar(Scalar::from_raw(text));
    }
    element.text = if text.is_empty() {
        None
    } else {
        Some(Scalar::from_raw(text))
    };
    Node::Element(element)
}

/// Insert a child, collapsing repeated sibling tags into a list.
fn attach(
    children: &mut std::collections::BTreeMap<String, Node>,
    name: String,
    node: Node,
) {
    match children.remove(&name) {
        None => {
            children.insert(name, node);
        }
        Some(Node::List(mut items)) => {
            items.push(node);
            children.insert(name, Node::List(items));
        }
        Some(existing) => {
            children.insert(name, Node::List(vec![existing, node]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_tree() {
        let tree = parse_tree("", true).unwrap();
        assert!(tree.children.is_empty());
        let tree = parse_tree("   \n", true).unwrap();
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_scalar_leaf() {
        let tree = parse_tree("<root><name>hello</name></root>", false).unwrap();
        let root = tree.child("root").unwrap();
        assert_eq!(
            root.child("name"),
            Some(&Node::Scalar(Scalar::Text("hello".into())))
        );
    }

    #[test]
    fn test_typed_scalars() {
        let tree = parse_tree(
            "<root><flag>true</flag><count>12</count><rate>1.50</rate></root>",
            false,
        )
        .unwrap();
        let root = tree.child("root").unwrap();
        assert_eq!(root.child("flag"), Some(&Node::Scalar(Scalar::Bool(true))));
        assert_eq!(root.child("count"), Some(&Node::Scalar(Scalar::Int(12))));
        assert_eq!(
            root.child("rate"),
            Some(&Node::Scalar(Scalar::Text("1.50".into())))
        );
    }

    #[test]
    fn test_repeated_siblings_collapse_to_list() {
        let tree = parse_tree(
            "<root><item>a</item><item>b</item><item>c</item></root>",
            false,
        )
        .unwrap();
        let items = tree.child("root").unwrap().child("item").unwrap();
        assert_eq!(items.force_list().len(), 3);
    }

    #[test]
    fn test_attributes_in_document_order() {
        let tree = parse_tree(r#"<root b="2" a="1"/>"#, false).unwrap();
        let root = tree.child("root").unwrap();
        assert_eq!(
            root.attributes(),
            &[("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let tree = parse_tree("<root><v>a &amp; b</v></root>", false).unwrap();
        assert_eq!(
            tree.child("root").unwrap().child("v"),
            Some(&Node::Scalar(Scalar::Text("a & b".into())))
        );
    }

    #[test]
    fn test_empty_tags_become_empty_text() {
        let tree = parse_tree("<root><a/><b></b></root>", false).unwrap();
        let root = tree.child("root").unwrap();
        assert_eq!(root.child("a"), Some(&Node::Scalar(Scalar::Text(String::new()))));
        assert_eq!(root.child("b"), Some(&Node::Scalar(Scalar::Text(String::new()))));
    }

    #[test]
    fn test_comment_preserved_in_leaf() {
        let tree = parse_tree("<root><v>x <!-- note --></v></root>", true).unwrap();
        assert_eq!(
            tree.child("root").unwrap().child("v"),
            Some(&Node::Scalar(Scalar::Text("x <!-- note -->".into())))
        );
    }

    #[test]
    fn test_comment_skipped_when_disabled() {
        let tree = parse_tree("<root><v>x <!-- note --></v></root>", false).unwrap();
        assert_eq!(
            tree.child("root").unwrap().child("v"),
            Some(&Node::Scalar(Scalar::Text("x".into())))
        );
    }

    #[test]
    fn test_nested_structure() {
        let tree = parse_tree(
            "<Labels><labels><fullName>Greeting</fullName><value>Hi</value></labels></Labels>",
            false,
        )
        .unwrap();
        assert_eq!(tree.root_key(), Some("Labels"));
        let inner = tree.child("Labels").unwrap().child("labels").unwrap();
        assert_eq!(
            inner.child("fullName"),
            Some(&Node::Scalar(Scalar::Text("Greeting".into())))
        );
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(parse_tree("<root><open></root>", false).is_err());
        assert!(parse_tree("<root>", false).is_err());
    }

    #[test]
    fn test_declaration_ignored() {
        let tree = parse_tree(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n<root><v>1</v></root>",
            false,
        )
        .unwrap();
        assert_eq!(tree.root_key(), Some("root"));
    }
}
