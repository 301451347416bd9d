//! Configuration validation
//!
//! Every config section implements `Validatable`; `BuilderConfig::validate`
//! walks all of them.

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}

/// Extension trait for validating collections of configs
pub trait ValidatableCollection {
    /// Validate all configs in collection
    fn validate_all(&self) -> ConfigResult<()>;
}

impl<T: Validatable> ValidatableCollection for Option<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        if let Some(config) = self {
            config.validate()?;
        }
        Ok(())
    }
}

/// True for `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Reject anything that is not a plain identifier
pub fn ensure_identifier(field: &str, value: &str) -> ConfigResult<()> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(ConfigError::invalid_identifier(field, value))
    }
}
