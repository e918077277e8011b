//! Lowered wire-name cache for host structures
//!
//! Selectors compare against ASCII-lowercased names. Structures report the
//! same wire names on every traversal, so the lowered names are computed once
//! per type and shared.

use std::sync::{Arc, RwLock};

use hashbrown::HashMap;

use super::dynamic::StructuredValue;

/// Upper bound on cached structure types
const MAX_CACHED_TYPES: usize = 256;

/// Type name plus the address of the static wire-name table
type MetadataKey = (&'static str, usize);

/// Process-wide cache of lowered field names keyed by structure metadata
pub struct FieldNameCache {
    cache: RwLock<HashMap<MetadataKey, Arc<[String]>>>,
}

impl FieldNameCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the lowered wire names for `structured`, computing them on first use
    pub fn lowered_names(&self, structured: &dyn StructuredValue) -> Arc<[String]> {
        let names = structured.field_names();
        let key = (structured.type_name(), names.as_ptr() as usize);

        if let Ok(cache) = self.cache.read() {
            if let Some(lowered) = cache.get(&key) {
                if lowered.len() == names.len() {
                    return Arc::clone(lowered);
                }
            }
        }

        let lowered: Arc<[String]> = names
            .iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < MAX_CACHED_TYPES {
                cache.insert(key, Arc::clone(&lowered));
            }
        }

        lowered
    }

    /// Number of structure types currently cached
    pub fn len(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FieldNameCache {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref FIELD_NAME_CACHE: FieldNameCache = FieldNameCache::new();
}
