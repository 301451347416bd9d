//! Loader that evaluates nothing and hands back the module text

use std::convert::Infallible;

use crate::features::loader::domain::CompilationUnit;
use crate::features::loader::ports::DynamicLoader;

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader;

impl DynamicLoader for SourceLoader {
    type Procedure = String;
    type Environment = ();
    type Error = Infallible;

    fn load(&self, unit: &CompilationUnit, _environment: ()) -> Result<String, Infallible> {
        Ok(unit.source.clone())
    }
}
