//! Configuration for path evaluation and caching

pub mod path_options;
pub mod validation;

pub use path_options::PathOptions;
pub use validation::{
    ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator,
};
