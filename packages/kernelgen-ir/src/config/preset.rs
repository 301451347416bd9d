//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Production: shared subexpressions become named bindings
    ///
    /// - Fields and expressions materialize on second use
    Optimized,

    /// Debugging: nothing is ever materialized
    ///
    /// - Every use expands the full expression inline
    /// - Only assign/phi statements are emitted
    Inline,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "optimized" => Ok(Self::Optimized),
            "inline" => Ok(Self::Inline),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: optimized, inline",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimized => "optimized",
            Self::Inline => "inline",
        }
    }

    /// Whether this preset materializes shared subexpressions
    pub fn aliasing(&self) -> bool {
        matches!(self, Self::Optimized)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Optimized
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
