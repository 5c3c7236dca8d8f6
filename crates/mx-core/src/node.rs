//! Value tree read from a metadata document.
//!
//! A parsed document is an [`ElementNode`] whose children map field names
//! to [`Node`] values. Repeated sibling tags collapse into [`Node::List`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A leaf value carried by an element.
///
/// Floats are deliberately kept as [`Scalar::Text`] so decimal
/// representations survive a parse/render round trip byte-exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl Scalar {
    /// Type a raw text value: exact `true`/`false` become booleans,
    /// canonical base-10 integers become ints, everything else stays text.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "true" => return Scalar::Bool(true),
            "false" => return Scalar::Bool(false),
            _ => {}
        }
        if is_canonical_int(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return Scalar::Int(n);
            }
        }
        Scalar::Text(raw.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

/// A canonical integer has no leading zeros and no sign except a bare `-`.
fn is_canonical_int(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    digits == "0" || !digits.starts_with('0')
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{s}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

/// A structured node: attributes in document order plus either text
/// content or named children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub attributes: Vec<(String, String)>,
    pub text: Option<Scalar>,
    pub children: BTreeMap<String, Node>,
}

impl ElementNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<Scalar>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Append an attribute, keeping document order.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn set_child(&mut self, name: impl Into<String>, value: Node) {
        self.children.insert(name.into(), value);
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// An element with no text and no children is empty; attributes alone
    /// do not make it non-empty (it renders self-closing with attributes).
    pub fn is_empty(&self) -> bool {
        self.text.as_ref().is_none_or(Scalar::is_empty) && self.children.is_empty()
    }

    /// The single root key of a parsed document, when there is exactly one.
    pub fn root_key(&self) -> Option<&str> {
        let mut keys = self.children.keys();
        match (keys.next(), keys.next()) {
            (Some(key), None) => Some(key.as_str()),
            _ => None,
        }
    }
}

/// A value read from the tree: scalar leaf, structured element, or a
/// sequence of repeated siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Scalar(Scalar),
    Element(ElementNode),
    List(Vec<Node>),
}

impl Node {
    pub fn text(value: impl Into<Scalar>) -> Self {
        Node::Scalar(value.into())
    }

    /// An empty `{}` element or `[]` list contributes nothing to output
    /// and is skipped before rendering, at every depth.
    pub fn prunes(&self) -> bool {
        match self {
            Node::Scalar(_) => false,
            Node::Element(e) => {
                e.attributes.is_empty() && e.text.is_none() && e.children.is_empty()
            }
            Node::List(items) => items.is_empty(),
        }
    }

    /// Emptiness test used by the renderer: empty scalars and elements
    /// carrying at most attributes render self-closing.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Node::Scalar(s) => s.is_empty(),
            Node::Element(e) => e.is_empty(),
            Node::List(items) => items.is_empty(),
        }
    }

    /// Attributes of this value; scalars and lists have none.
    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            Node::Element(e) => &e.attributes,
            _ => &[],
        }
    }

    /// The scalar payload: the scalar itself, or an element's text.
    pub fn scalar_value(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            Node::Element(e) => e.text.as_ref(),
            Node::List(_) => None,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Element(e) => e.child(name),
            _ => None,
        }
    }

    /// View the value as a sequence: lists yield their items, anything
    /// else yields itself as a single element.
    pub fn force_list(&self) -> Vec<&Node> {
        match self {
            Node::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<ElementNode> for Node {
    fn from(value: ElementNode) -> Self {
        Node::Element(value)
    }
}
