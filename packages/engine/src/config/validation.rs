//! Core Configuration Utilities
//!
//! Common configuration patterns, validation, and defaults.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid depth limit: {0}")]
    InvalidDepth(String),

    #[error("Invalid cache capacity: {0}")]
    InvalidCapacity(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidDepth` - if the recursion limit is zero or too large
    /// - `InvalidCapacity` - if a cache capacity is zero or too large
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a recursion depth limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidDepth` if the depth is zero or
    /// exceeds `ConfigDefaults::MAX_DEPTH_LIMIT`.
    pub fn validate_depth(depth: usize, name: &str) -> ConfigResult<()> {
        if depth == 0 {
            return Err(ConfigurationError::InvalidDepth(format!(
                "{name} cannot be zero"
            )));
        }

        if depth > ConfigDefaults::MAX_DEPTH_LIMIT {
            return Err(ConfigurationError::InvalidDepth(format!(
                "{name} cannot exceed {}",
                ConfigDefaults::MAX_DEPTH_LIMIT
            )));
        }

        Ok(())
    }

    /// Validate a cache capacity
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCapacity` if the capacity is zero
    /// or exceeds `ConfigDefaults::MAX_CACHE_CAPACITY`.
    pub fn validate_capacity(capacity: usize, name: &str) -> ConfigResult<()> {
        if capacity == 0 {
            return Err(ConfigurationError::InvalidCapacity(format!(
                "{name} cannot be zero"
            )));
        }

        if capacity > ConfigDefaults::MAX_CACHE_CAPACITY {
            return Err(ConfigurationError::InvalidCapacity(format!(
                "{name} cannot exceed {}",
                ConfigDefaults::MAX_CACHE_CAPACITY
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_MAX_DEPTH: usize = 512;
    pub const MAX_DEPTH_LIMIT: usize = 65_536;
    pub const DEFAULT_CACHE_CAPACITY: usize = 64;
    pub const MAX_CACHE_CAPACITY: usize = 1 << 20;
}
