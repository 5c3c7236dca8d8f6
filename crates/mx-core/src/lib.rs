//! Core data model for metaxml: document value trees, field schemas, sort
//! strategies, and the shared error taxonomy.

pub mod error;
pub mod node;
pub mod schema;
pub mod sort;

pub use error::{MxError, Result};
pub use node::{ElementNode, Node, Scalar};
pub use schema::{field_map, Datatype, FieldDefinition, FieldMap, TypeDefinition, ValueFormat};
pub use sort::SortOrder;
