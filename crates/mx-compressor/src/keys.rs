//! Sibling key ordering for one schema level.

use mx_core::{FieldDefinition, FieldMap, SortOrder};
use std::cmp::Ordering;

fn ci_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Order the declared keys of a schema level under the chosen strategy.
///
/// The result is always a permutation of the level's declared keys. Ties
/// under the case-insensitive comparison keep the map's baseline order
/// because the sort is stable.
pub fn ordered_keys(level: &FieldMap, sort_order: SortOrder) -> Vec<String> {
    let mut keys: Vec<String> = level.keys().cloned().collect();
    match sort_order {
        SortOrder::AlphabetAsc => keys.sort_by(|a, b| ci_cmp(a, b)),
        SortOrder::AlphabetDesc => keys.sort_by(|a, b| ci_cmp(b, a)),
        SortOrder::SimpleFirst | SortOrder::ComplexFirst => {
            let (mut complex, mut simple): (Vec<String>, Vec<String>) = keys
                .into_iter()
                .partition(|key| level[key].is_complex());
            simple.sort_by(|a, b| ci_cmp(a, b));
            complex.sort_by(|a, b| ci_cmp(a, b));
            keys = if sort_order == SortOrder::SimpleFirst {
                simple.extend(complex);
                simple
            } else {
                complex.extend(simple);
                complex
            };
        }
    }
    keys
}

/// Order a field's declared subfield keys, or `None` for a level with no
/// declared children (pure scalar leaf — the caller must not recurse).
pub fn ordered_field_keys(field: &FieldDefinition, sort_order: SortOrder) -> Option<Vec<String>> {
    if !field.is_complex() {
        return None;
    }
    field
        .fields
        .as_ref()
        .map(|fields| ordered_keys(fields, sort_order))
}
