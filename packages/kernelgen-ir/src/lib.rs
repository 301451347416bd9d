/*
 * kernelgen-ir - expression graph builder for generated numeric kernels
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Node and statement ids
 * - features/    : Vertical slices (variable model → identity cache →
 *                  reference tracker → naming → arithmetic → sequencing → loader)
 * - config/      : Presets, validation, YAML files
 * - api/         : CodeBuilder session
 *
 * Output:
 * - Shared subexpressions computed once (hash-consing + materialize on reuse)
 * - Readable names (fields `ax`, matrix cells `m01`, temporaries `temp0`)
 * - Sign-normalized `+`/`-` chains
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::unnecessary_map_or)] // map_or style for compatibility

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared ids
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Builder API
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{CodeBuilder, PhiTest, Terminal, VectorShape};
pub use config::{BuilderConfig, Preset};
pub use errors::{BuilderError, Result};
pub use features::loader::{compile, CompilationUnit, CompileRequest, DynamicLoader, SourceLoader};
pub use features::sequencing::{SinkError, SourceSink, SourceWriter};
pub use features::variable_model::{Brackets, Output, NEGATE};
pub use shared::models::{NodeId, StatementId};
