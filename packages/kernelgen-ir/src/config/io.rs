//! Configuration I/O (YAML loading)
//!
//! Schema v1:
//!
//! ```yaml
//! version: 1
//! preset: optimized
//! alias_fields: false      # optional
//! naming:                  # optional, partial
//!   axis_letters: rgba
//! emit:                    # optional, partial
//!   declaration_keyword: var
//! ```

use super::builder_config::{BuilderConfig, EmitConfig, NamingConfig};
use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::{Validatable, ValidatableCollection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_fields: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_expressions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub naming: Option<NamingConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit: Option<EmitConfig>,
}

const SUPPORTED_VERSIONS: [u32; 1] = [1];

impl BuilderConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        file.naming.validate_all()?;
        file.emit.validate_all()?;

        let preset = Preset::from_str(&file.preset)
            .map_err(|_| ConfigError::UnknownPreset(file.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(enabled) = file.alias_fields {
            config.alias_fields = enabled;
        }
        if let Some(enabled) = file.alias_expressions {
            config.alias_expressions = enabled;
        }
        if let Some(naming) = file.naming {
            config.naming = naming;
        }
        if let Some(emit) = file.emit {
            config.emit = emit;
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML schema v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let preset = self.matching_preset().unwrap_or_default();
        let file = ConfigFileV1 {
            version: Some(1),
            preset: preset.to_string(),
            alias_fields: Some(self.alias_fields),
            alias_expressions: Some(self.alias_expressions),
            naming: Some(self.naming.clone()),
            emit: Some(self.emit.clone()),
        };

        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = BuilderConfig::default()
            .naming(|n| n.axis_letters("rgba"))
            .emit(|e| e.declaration_keyword("var"));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("preset: optimized"));
        assert!(yaml.contains("axis_letters: rgba"));

        let recovered = BuilderConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_yaml_partial_sections() {
        let yaml = r#"
version: 1
preset: optimized
alias_fields: false
naming:
  temp_prefix: t
"#;
        let config = BuilderConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.alias_fields);
        assert!(config.alias_expressions);
        assert_eq!(config.naming.temp_prefix, "t");
        assert_eq!(config.naming.axis_letters, "xyzw");
        assert_eq!(config.emit, EmitConfig::default());
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "version: 1\npreset: inline").unwrap();

        let config = BuilderConfig::from_yaml(file.path()).unwrap();
        assert_eq!(config.matching_preset(), Some(Preset::Inline));
    }

    #[test]
    fn test_yaml_missing_version() {
        let err = BuilderConfig::from_yaml_str("preset: optimized").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let err = BuilderConfig::from_yaml_str("version: 2\npreset: optimized").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
    }

    #[test]
    fn test_yaml_unknown_preset() {
        let err = BuilderConfig::from_yaml_str("version: 1\npreset: turbo").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(p) if p == "turbo"));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let err = BuilderConfig::from_yaml_str("version: 1\npreset: inline\nlanguage: js")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_yaml_invalid_values_rejected() {
        let yaml = "version: 1\npreset: optimized\nnaming:\n  axis_letters: ''\n";
        let err = BuilderConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));
    }
}
