//! Ports - Interface definitions for dynamic loading
//!
//! Evaluating generated text is the host's business; the crate only
//! prepares the `CompilationUnit`.

use crate::features::loader::domain::CompilationUnit;

/// Turns a compilation unit into a callable procedure
pub trait DynamicLoader {
    /// Callable produced by the loader
    type Procedure;

    /// Names made visible to the generated code
    type Environment;

    type Error: std::error::Error + Send + Sync + 'static;

    fn load(
        &self,
        unit: &CompilationUnit,
        environment: Self::Environment,
    ) -> Result<Self::Procedure, Self::Error>;
}
