//! Builder configuration
//!
//! One struct per concern, each with its own validation, gathered into
//! `BuilderConfig`. Defaults reproduce the JavaScript-flavoured output:
//!
//! ```text
//! let temp0 = x + y,
//!     ax = a[0];
//! out[0] = temp0;
//! return ax;
//! ```

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::{ensure_identifier, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Naming
// ============================================================================

/// Name allocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Axis alphabet for positional field names (1..=8 distinct letters)
    pub axis_letters: String,

    /// Prefix of minted temporaries (`temp0`, `temp1`, ...)
    pub temp_prefix: String,

    /// Prefix of auto-named phi bindings (`phi`, `phi2`, ...)
    pub phi_prefix: String,

    /// Digits tried as suffix when a requested phi name is taken (0..=10)
    pub phi_retry_suffixes: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            axis_letters: "xyzw".to_string(),
            temp_prefix: "temp".to_string(),
            phi_prefix: "phi".to_string(),
            phi_retry_suffixes: 9,
        }
    }
}

impl NamingConfig {
    /// Builder: Set axis alphabet
    pub fn axis_letters(mut self, letters: impl Into<String>) -> Self {
        self.axis_letters = letters.into();
        self
    }

    /// Builder: Set temporary prefix
    pub fn temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    /// Builder: Set phi prefix
    pub fn phi_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.phi_prefix = prefix.into();
        self
    }
}

impl Validatable for NamingConfig {
    fn validate(&self) -> ConfigResult<()> {
        let count = self.axis_letters.chars().count();
        if count == 0 || count > 8 {
            return Err(ConfigError::range_with_hint(
                "axis_letters",
                count,
                1,
                8,
                "Axis alphabet must name at least one component",
            ));
        }

        if !self.axis_letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::invalid_identifier(
                "axis_letters",
                self.axis_letters.clone(),
            ));
        }

        let mut seen: Vec<char> = Vec::with_capacity(count);
        for c in self.axis_letters.chars() {
            if seen.contains(&c) {
                return Err(ConfigError::Custom(format!(
                    "axis_letters contains '{}' twice",
                    c
                )));
            }
            seen.push(c);
        }

        ensure_identifier("temp_prefix", &self.temp_prefix)?;
        ensure_identifier("phi_prefix", &self.phi_prefix)?;

        if self.phi_retry_suffixes > 10 {
            return Err(ConfigError::range_with_hint(
                "phi_retry_suffixes",
                self.phi_retry_suffixes,
                0,
                10,
                "Only single digit suffixes are tried",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Statement emission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Keyword opening a compound declaration
    pub declaration_keyword: String,

    /// One level of indentation
    pub indent: String,

    /// Appended by the source writer to lines not ending in `;` or `,`
    pub terminator: String,

    /// Keyword of output statements
    pub return_keyword: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            declaration_keyword: "let".to_string(),
            indent: "\t".to_string(),
            terminator: ";".to_string(),
            return_keyword: "return".to_string(),
        }
    }
}

impl EmitConfig {
    /// Builder: Set declaration keyword
    pub fn declaration_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.declaration_keyword = keyword.into();
        self
    }

    /// Builder: Set indentation unit
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl Validatable for EmitConfig {
    fn validate(&self) -> ConfigResult<()> {
        ensure_identifier("declaration_keyword", &self.declaration_keyword)?;
        ensure_identifier("return_keyword", &self.return_keyword)?;

        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::Custom(
                "indent may only contain spaces and tabs".to_string(),
            ));
        }

        if self.terminator.chars().any(|c| c == '\n') {
            return Err(ConfigError::Custom(
                "terminator must not contain a newline".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Fresh vector fields may be materialized
    pub alias_fields: bool,

    /// Expressions without a pending store may be materialized
    pub alias_expressions: bool,

    pub naming: NamingConfig,

    pub emit: EmitConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl BuilderConfig {
    /// Complete configuration for a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            alias_fields: preset.aliasing(),
            alias_expressions: preset.aliasing(),
            naming: NamingConfig::default(),
            emit: EmitConfig::default(),
        }
    }

    /// Builder: Override naming settings
    pub fn naming(mut self, f: impl FnOnce(NamingConfig) -> NamingConfig) -> Self {
        self.naming = f(self.naming);
        self
    }

    /// Builder: Override emission settings
    pub fn emit(mut self, f: impl FnOnce(EmitConfig) -> EmitConfig) -> Self {
        self.emit = f(self.emit);
        self
    }

    /// Builder: Toggle field aliasing
    pub fn alias_fields(mut self, enabled: bool) -> Self {
        self.alias_fields = enabled;
        self
    }

    /// Builder: Toggle expression aliasing
    pub fn alias_expressions(mut self, enabled: bool) -> Self {
        self.alias_expressions = enabled;
        self
    }

    /// Preset whose aliasing switches match this configuration, if any
    pub fn matching_preset(&self) -> Option<Preset> {
        match (self.alias_fields, self.alias_expressions) {
            (true, true) => Some(Preset::Optimized),
            (false, false) => Some(Preset::Inline),
            _ => None,
        }
    }
}

impl Validatable for BuilderConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.naming.validate()?;
        self.emit.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BuilderConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.alias_fields);
        assert!(config.alias_expressions);
        assert_eq!(config.naming.axis_letters, "xyzw");
        assert_eq!(config.emit.declaration_keyword, "let");
    }

    #[test]
    fn test_inline_preset_disables_aliasing() {
        let config = BuilderConfig::preset(Preset::Inline);
        assert!(!config.alias_fields);
        assert!(!config.alias_expressions);
        assert_eq!(config.matching_preset(), Some(Preset::Inline));
    }

    #[test]
    fn test_mixed_switches_have_no_preset() {
        let config = BuilderConfig::default().alias_fields(false);
        assert_eq!(config.matching_preset(), None);
    }

    #[test]
    fn test_axis_letters_validation() {
        let empty = BuilderConfig::default().naming(|n| n.axis_letters(""));
        assert!(matches!(empty.validate(), Err(ConfigError::Range { .. })));

        let repeated = BuilderConfig::default().naming(|n| n.axis_letters("xx"));
        assert!(matches!(repeated.validate(), Err(ConfigError::Custom(_))));

        let digits = BuilderConfig::default().naming(|n| n.axis_letters("x1"));
        assert!(matches!(
            digits.validate(),
            Err(ConfigError::InvalidIdentifier { .. })
        ));

        let rgba = BuilderConfig::default().naming(|n| n.axis_letters("rgba"));
        assert!(rgba.validate().is_ok());
    }

    #[test]
    fn test_prefix_and_keyword_validation() {
        let config = BuilderConfig::default().naming(|n| n.temp_prefix("9t"));
        assert!(config.validate().is_err());

        let config = BuilderConfig::default().emit(|e| e.declaration_keyword("var"));
        assert!(config.validate().is_ok());

        let config = BuilderConfig::default().emit(|e| e.indent("->"));
        assert!(config.validate().is_err());
    }
}
