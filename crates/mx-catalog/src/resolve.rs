//! Definition-reference flattening.

use mx_core::{FieldDefinition, FieldMap, TypeDefinition};
use std::collections::BTreeMap;

/// Replace every `definition_ref` in the schema tree with a clone of its
/// shared target, so renderers never see an unresolved reference.
///
/// Shared definitions themselves must be concrete (no nested references).
pub fn resolve_references(mut type_def: TypeDefinition) -> TypeDefinition {
    let shared = type_def.shared.clone();
    walk(&mut type_def.fields, &shared);
    type_def
}

fn walk(fields: &mut FieldMap, shared: &BTreeMap<String, FieldDefinition>) {
    for definition in fields.values_mut() {
        if let Some(target) = definition.definition_ref.as_deref() {
            if let Some(resolved) = shared.get(target) {
                *definition = resolved.clone();
            }
        }
        if let Some(children) = definition.fields.as_mut() {
            walk(children, shared);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mx_core::field_map;

    #[test]
    fn test_nested_references_flattened() {
        let shared = BTreeMap::from([(
            "sharedList".to_string(),
            FieldDefinition::array(
                "entries",
                field_map([FieldDefinition::scalar("name")]),
            ),
        )]);
        let td = TypeDefinition::with_shared(
            "T",
            field_map([FieldDefinition::object(
                "wrapper",
                field_map([FieldDefinition::reference("entries", "sharedList")]),
            )]),
            shared,
        );
        let resolved = resolve_references(td);
        let wrapper = resolved.field("wrapper").unwrap();
        let entries = wrapper.fields.as_ref().unwrap().get("entries").unwrap();
        assert!(entries.definition_ref.is_none());
        assert!(entries.fields.is_some());
    }

    #[test]
    fn test_dangling_reference_left_in_place() {
        let td = TypeDefinition::new(
            "T",
            field_map([FieldDefinition::reference("x", "missing")]),
        );
        let resolved = resolve_references(td);
        assert!(resolved.field("x").unwrap().definition_ref.is_some());
    }
}
