//! Compiled path cache
//!
//! Paths are immutable after compilation, so one compiled chain can be shared
//! by every caller that asks for the same expression.

use std::sync::{Arc, RwLock};

use hashbrown::HashMap;

use crate::config::{ConfigDefaults, ConfigResult, PathOptions, Validator};
use crate::jsonpath::compiler::PathParser;
use crate::jsonpath::error::JsonPathResult;
use crate::jsonpath::expression::Path;
use crate::telemetry::PathStats;

/// Bounded cache of compiled paths keyed by expression text
///
/// Once full, new expressions are still compiled and returned but no longer
/// stored.
pub struct PathCache {
    cache: RwLock<HashMap<String, Arc<Path>>>,
    capacity: usize,
    stats: PathStats,
}

impl PathCache {
    pub fn new() -> Self {
        Self::with_capacity(ConfigDefaults::DEFAULT_CACHE_CAPACITY)
    }

    /// Cache sized by `options.cache_capacity`
    ///
    /// # Errors
    ///
    /// Returns the validation error of invalid `options`.
    pub fn from_options(options: &PathOptions) -> ConfigResult<Self> {
        options.validate()?;
        Ok(Self::with_capacity(options.cache_capacity))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::with_capacity(capacity.min(1024))),
            capacity,
            stats: PathStats::new(),
        }
    }

    /// Get the compiled path for `expression` or compile and cache it
    ///
    /// # Errors
    ///
    /// Returns the parse error of [`PathParser::compile`]. Failed expressions
    /// are never cached.
    pub fn get_or_compile(&self, expression: &str) -> JsonPathResult<Arc<Path>> {
        if let Ok(cache) = self.cache.read() {
            if let Some(path) = cache.get(expression) {
                self.stats.record_hit();
                return Ok(Arc::clone(path));
            }
        }
        self.stats.record_miss();

        let path = match PathParser::compile(expression) {
            Ok(path) => Arc::new(path),
            Err(e) => {
                self.stats.record_parse_failure();
                return Err(e);
            }
        };
        self.stats.record_compiled();

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < self.capacity {
                cache.insert(expression.to_string(), Arc::clone(&path));
            } else {
                log::trace!("path cache full, not storing '{expression}'");
            }
        }

        Ok(path)
    }

    #[must_use]
    pub fn stats(&self) -> &PathStats {
        &self.stats
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref PATH_CACHE: PathCache = PathCache::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookups_share_one_compilation() {
        let cache = PathCache::with_capacity(4);
        let first = cache.get_or_compile("a[*].b").expect("valid");
        let second = cache.get_or_compile("a[*].b").expect("valid");
        assert!(Arc::ptr_eq(&first, &second));

        let snapshot = cache.stats().snapshot();
        assert_eq!(snapshot.compiled, 1);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.cache_misses, 1);
    }

    #[test]
    fn failures_are_counted_not_cached() {
        let cache = PathCache::with_capacity(4);
        assert!(cache.get_or_compile("a.").is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().snapshot().parse_failures, 1);
    }

    #[test]
    fn sized_from_validated_options() {
        let cache = PathCache::from_options(&PathOptions::new().cache_capacity(2))
            .expect("valid options");
        assert_eq!(cache.capacity(), 2);
        assert!(PathCache::from_options(&PathOptions::new().cache_capacity(0)).is_err());
    }

    #[test]
    fn full_cache_still_compiles() {
        let cache = PathCache::with_capacity(1);
        cache.get_or_compile("a").expect("valid");
        let path = cache.get_or_compile("b").expect("valid");
        assert_eq!(path.original(), "b");
        assert_eq!(cache.len(), 1);
    }
}
