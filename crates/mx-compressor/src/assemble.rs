//! Whole-document assembly.

use crate::clean::clean_root;
use crate::keys::ordered_keys;
use crate::render::{end_tag, render_field, start_tag, NEWLINE};
use mx_core::{MxError, Node, Result, SortOrder, TypeDefinition};

/// Fixed first line of every canonical document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Render one whole document: declaration, root tag, ordered top-level
/// fields at depth one, root close.
///
/// The output ends exactly at the closing `>` — no trailing line
/// terminator, so repeated runs are byte-identical. Fails with
/// [`MxError::UnsupportedType`] when the root payload cannot be cleaned
/// against the definition.
pub fn assemble(
    type_name: &str,
    root: &Node,
    type_def: &TypeDefinition,
    sort_order: SortOrder,
) -> Result<String> {
    let cleaned =
        clean_root(type_def, root).ok_or_else(|| MxError::unsupported_type(type_name))?;

    let mut content = String::new();
    content.push_str(XML_DECLARATION);
    content.push_str(NEWLINE);
    content.push_str(&start_tag(type_name, &cleaned.attributes, false));
    content.push_str(NEWLINE);
    for key in ordered_keys(&type_def.fields, sort_order) {
        let Some(value) = cleaned.children.get(&key) else {
            continue;
        };
        if value.prunes() {
            continue;
        }
        let Some(field) = type_def.field(&key) else {
            continue;
        };
        let field = type_def.resolve(field);
        content.push_str(&render_field(type_def, field, value, sort_order, 1));
    }
    content.push_str(&end_tag(type_name));
    Ok(content)
}
