//! Raw XML text to [`mx_core::Node`] tree conversion, plus the entity
//! escaping shared with the serializer.

pub mod escape;
pub mod reader;

pub use reader::parse_tree;
