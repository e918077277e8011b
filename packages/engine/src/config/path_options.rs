//! Path evaluation options

use super::validation::{ConfigDefaults, ConfigResult, ConfigValidator, Validator};

/// Options controlling how a compiled path is applied
///
/// ```
/// use jsonq_engine::config::{PathOptions, Validator};
///
/// let options = PathOptions::new().strict_missing(true).max_depth(64);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOptions {
    /// Report a selector that matches no key as a match error
    pub strict_missing: bool,
    /// Deepest level recursive descent may reach
    pub max_depth: usize,
    /// Capacity of the compiled path cache
    pub cache_capacity: usize,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            strict_missing: false,
            max_depth: ConfigDefaults::DEFAULT_MAX_DEPTH,
            cache_capacity: ConfigDefaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl PathOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strict_missing(mut self, strict: bool) -> Self {
        self.strict_missing = strict;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Validator for PathOptions {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_depth(self.max_depth, "max_depth")?;
        ConfigValidator::validate_capacity(self.cache_capacity, "cache_capacity")?;
        Ok(())
    }
}
