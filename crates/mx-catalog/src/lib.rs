//! Schema catalog: per-type field definitions with cached, flattened
//! reference resolution.

mod definitions;
pub mod resolve;

pub use resolve::resolve_references;

use definitions::builders;
use mx_core::TypeDefinition;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Catalog of supported metadata types.
///
/// A definition is built and reference-flattened once per distinct type
/// name, then served from the cache. Recomputing is idempotent, so a
/// redundant rebuild under contention is harmless.
pub struct Catalog {
    cache: Mutex<HashMap<String, Arc<TypeDefinition>>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Look up the schema for a root type name. Unknown types yield
    /// `None`; callers surface that as an unsupported-type failure.
    pub fn get_definition(&self, type_name: &str) -> Option<Arc<TypeDefinition>> {
        if let Some(hit) = self.cache.lock().unwrap().get(type_name) {
            return Some(hit.clone());
        }
        let (_, builder) = builders().iter().find(|(name, _)| *name == type_name)?;
        debug!(type_name, "schema cache miss, loading definition");
        let definition = Arc::new(resolve_references(builder()));
        self.cache
            .lock()
            .unwrap()
            .insert(type_name.to_string(), definition.clone());
        Some(definition)
    }

    /// Names of all supported types, sorted.
    pub fn supported_types() -> Vec<&'static str> {
        builders().iter().map(|(name, _)| *name).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
