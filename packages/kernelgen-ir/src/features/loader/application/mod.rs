//! Compile entry point

use tracing::debug;

use crate::errors::{BuilderError, Result};
use crate::features::loader::domain::{CompileRequest, FunctionTemplate};
use crate::features::loader::ports::DynamicLoader;

/// Render the function template and hand it to the loader
pub fn compile<L: DynamicLoader>(
    loader: &L,
    request: CompileRequest,
    environment: L::Environment,
) -> Result<L::Procedure> {
    let unit = FunctionTemplate.unit(request);
    debug!("compile {}\n{}", unit.display_name, unit.source);

    loader
        .load(&unit, environment)
        .map_err(BuilderError::loader)
}
