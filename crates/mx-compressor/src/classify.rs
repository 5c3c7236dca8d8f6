//! Collapsibility classification: purely structural, schema only.

use mx_core::FieldDefinition;

/// Whether a field renders inline ("compressed") instead of as an
/// expanded block.
///
/// Scalar fields always collapse. An object/array field collapses when
/// explicitly flagged, or when it is flat: it declares subfields and none
/// of them is itself object/array. A complex field with neither flag nor
/// declared subfields does not collapse.
pub fn must_compress(field: &FieldDefinition) -> bool {
    if !field.is_complex() {
        return true;
    }
    if field.compress {
        return true;
    }
    match &field.fields {
        Some(fields) => fields.values().all(|sub| !sub.is_complex()),
        None => false,
    }
}
