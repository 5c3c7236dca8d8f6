//! metaxml compression engine — schema-driven canonical serialization.
//!
//! Components:
//! - `keys` — sibling field ordering under the four sort strategies
//! - `classify` — inline-vs-expanded classification per field definition
//! - `clean` — schema-filtered reduction of a parsed root payload
//! - `render` — the recursive field renderer
//! - `assemble` — whole-document assembly around the renderer

pub mod assemble;
pub mod classify;
pub mod clean;
pub mod keys;
pub mod render;

pub use assemble::{assemble, XML_DECLARATION};
pub use classify::must_compress;
pub use clean::clean_root;
pub use keys::{ordered_field_keys, ordered_keys};
pub use render::{render_field, NEWLINE};
