//! Configuration System
//!
//! Two tiers, following the same progressive disclosure as elsewhere:
//! - Level 1: Preset - `BuilderConfig::preset(Preset::Inline)`
//! - Level 2: Section override - `.naming(|n| n.axis_letters("rgba"))`
//! - Level 3: YAML file - `BuilderConfig::from_yaml("kernel.yaml")?`
//!
//! # Examples
//!
//! ```rust
//! use kernelgen_ir::config::{BuilderConfig, Preset, Validatable};
//!
//! let config = BuilderConfig::preset(Preset::Optimized)
//!     .emit(|e| e.declaration_keyword("var"));
//! assert!(config.validate().is_ok());
//! ```

pub mod builder_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use builder_config::{BuilderConfig, EmitConfig, NamingConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use preset::Preset;
pub use validation::{Validatable, ValidatableCollection};
