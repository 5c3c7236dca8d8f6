//! Field schemas describing how each metadata type serializes.

use crate::node::{Node, Scalar};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    Scalar,
    Object,
    Array,
}

impl Datatype {
    pub fn is_complex(&self) -> bool {
        matches!(self, Datatype::Object | Datatype::Array)
    }
}

/// Pure scalar formatter applied when a value is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    Text,
    Boolean,
    Number,
}

impl ValueFormat {
    /// Format a scalar for output. Boolean fields normalize textual
    /// `True`/`FALSE` spellings; other formats emit the scalar as-is.
    pub fn prepare(&self, value: &Scalar) -> String {
        match (self, value) {
            (ValueFormat::Boolean, Scalar::Text(s))
                if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") =>
            {
                s.to_ascii_lowercase()
            }
            _ => value.to_string(),
        }
    }
}

/// Declared fields of one schema level, keyed by field name.
///
/// A `BTreeMap` keeps the baseline order deterministic so the stable
/// case-insensitive sorts in the key resolver break ties the same way on
/// every run.
pub type FieldMap = BTreeMap<String, FieldDefinition>;

/// Build a [`FieldMap`] from definitions, keyed by each definition's tag.
pub fn field_map<I>(definitions: I) -> FieldMap
where
    I: IntoIterator<Item = FieldDefinition>,
{
    definitions
        .into_iter()
        .map(|def| (def.key.clone(), def))
        .collect()
}

/// Schema of one declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Emitted tag name; usually equals the field name it is keyed under.
    pub key: String,
    pub datatype: Datatype,
    pub format: ValueFormat,
    /// Nested child fields, present only for object/array fields.
    pub fields: Option<FieldMap>,
    /// Explicit collapse flag for object/array fields.
    pub compress: bool,
    /// Subfield names forming the composite sort key for array elements.
    pub sort_by: Option<Vec<String>>,
    /// Name of a shared definition this field delegates to. Must be
    /// resolved against the owning [`TypeDefinition`] before rendering.
    pub definition_ref: Option<String>,
}

impl FieldDefinition {
    fn new(key: impl Into<String>, datatype: Datatype, format: ValueFormat) -> Self {
        Self {
            key: key.into(),
            datatype,
            format,
            fields: None,
            compress: false,
            sort_by: None,
            definition_ref: None,
        }
    }

    pub fn scalar(key: impl Into<String>) -> Self {
        Self::new(key, Datatype::Scalar, ValueFormat::Text)
    }

    pub fn boolean(key: impl Into<String>) -> Self {
        Self::new(key, Datatype::Scalar, ValueFormat::Boolean)
    }

    pub fn number(key: impl Into<String>) -> Self {
        Self::new(key, Datatype::Scalar, ValueFormat::Number)
    }

    pub fn object(key: impl Into<String>, fields: FieldMap) -> Self {
        let mut def = Self::new(key, Datatype::Object, ValueFormat::Text);
        def.fields = Some(fields);
        def
    }

    pub fn array(key: impl Into<String>, fields: FieldMap) -> Self {
        let mut def = Self::new(key, Datatype::Array, ValueFormat::Text);
        def.fields = Some(fields);
        def
    }

    /// An array of bare scalar elements, no declared subfields.
    pub fn scalar_array(key: impl Into<String>) -> Self {
        Self::new(key, Datatype::Array, ValueFormat::Text)
    }

    /// A field delegating to a shared definition held by the type.
    pub fn reference(key: impl Into<String>, target: impl Into<String>) -> Self {
        let mut def = Self::new(key, Datatype::Object, ValueFormat::Text);
        def.definition_ref = Some(target.into());
        def
    }

    pub fn compressed(mut self) -> Self {
        self.compress = true;
        self
    }

    pub fn sorted_by<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.sort_by = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_complex(&self) -> bool {
        self.datatype.is_complex()
    }

    /// Format a node's scalar payload for output; valueless nodes format
    /// to the empty string.
    pub fn prepare(&self, value: &Node) -> String {
        value
            .scalar_value()
            .map(|s| self.format.prepare(s))
            .unwrap_or_default()
    }
}

/// Whole schema of one metadata type: declared fields plus the shared
/// definitions that `definition_ref` entries resolve against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: FieldMap,
    pub shared: BTreeMap<String, FieldDefinition>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            fields,
            shared: BTreeMap::new(),
        }
    }

    pub fn with_shared(
        name: impl Into<String>,
        fields: FieldMap,
        shared: BTreeMap<String, FieldDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
            shared,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Resolve a possible definition reference against this type. A
    /// dangling reference falls back to the referring definition itself.
    pub fn resolve<'a>(&'a self, definition: &'a FieldDefinition) -> &'a FieldDefinition {
        match definition.definition_ref.as_deref() {
            Some(target) => self.shared.get(target).unwrap_or(definition),
            None => definition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_shapes() {
        let def = FieldDefinition::scalar("fullName");
        assert_eq!(def.datatype, Datatype::Scalar);
        assert!(!def.is_complex());

        let def = FieldDefinition::array(
            "labels",
            field_map([FieldDefinition::scalar("value")]),
        );
        assert!(def.is_complex());
        assert!(def.fields.is_some());
    }

    #[test]
    fn test_boolean_prepare_normalizes_case() {
        let fmt = ValueFormat::Boolean;
        assert_eq!(fmt.prepare(&Scalar::Text("TRUE".into())), "true");
        assert_eq!(fmt.prepare(&Scalar::Bool(false)), "false");
        assert_eq!(fmt.prepare(&Scalar::Text("yes".into())), "yes");
    }

    #[test]
    fn test_prepare_extracts_element_text() {
        use crate::node::ElementNode;
        let def = FieldDefinition::scalar("label");
        let node = Node::Element(ElementNode::with_text("Hello"));
        assert_eq!(def.prepare(&node), "Hello");
    }

    #[test]
    fn test_resolve_reference() {
        let shared = BTreeMap::from([(
            "sharedPicklist".to_string(),
            FieldDefinition::object("picklist", field_map([FieldDefinition::scalar("value")])),
        )]);
        let td = TypeDefinition::with_shared("Profile", FieldMap::new(), shared);

        let referring = FieldDefinition::reference("picklist", "sharedPicklist");
        let resolved = td.resolve(&referring);
        assert!(resolved.fields.is_some());
        assert!(resolved.definition_ref.is_none());

        let concrete = FieldDefinition::scalar("name");
        assert_eq!(td.resolve(&concrete), &concrete);
    }
}
