// Emitter - assignment list to source lines
//
// Runs of consecutive declarations collapse into one compound declaration:
//
//   let a = x + y,
//       b = a * a;       (continuation lines one tab deeper)
//   out[0] = b;
//   return a;
//
// A run of one declaration is a plain `let a = ...;` with no indentation.

use tracing::debug;

use crate::config::EmitConfig;
use crate::features::sequencing::domain::Assignment;
use crate::features::sequencing::ports::{SinkError, SourceSink};

#[derive(Debug, Clone)]
pub struct Emitter {
    declaration_keyword: String,
}

impl Emitter {
    pub fn new(config: &EmitConfig) -> Self {
        Self {
            declaration_keyword: config.declaration_keyword.clone(),
        }
    }

    /// Write every assignment, then each terminal line verbatim
    pub fn write<S: SourceSink + ?Sized>(
        &self,
        sink: &mut S,
        assignments: &[Assignment],
        terminals: &[String],
    ) -> Result<(), SinkError> {
        let mut declaring = false;
        let mut declarations = 0;
        let mut captures = 0;

        for (i, assignment) in assignments.iter().enumerate() {
            let declare = assignment.declare;
            let starts = declare && !declaring;
            let stops = declare
                && assignments
                    .get(i + 1)
                    .map_or(true, |next| !next.declare);

            let prefix = if starts {
                format!("{} ", self.declaration_keyword)
            } else {
                String::new()
            };
            let suffix = if !declare || stops { ";" } else { "," };

            sink.writeln(&format!(
                "{}{} = {}{}",
                prefix, assignment.name, assignment.expression, suffix
            ))?;

            if starts {
                declaring = true;
                if !stops {
                    sink.tab();
                }
            }
            if stops {
                declaring = false;
                if !starts {
                    sink.untab()?;
                }
            }
            if declare {
                declarations += 1;
            }
            if assignment.renames.is_some() {
                captures += 1;
            }
        }

        for line in terminals {
            sink.writeln(line)?;
        }

        debug!(
            "emitted {} assignments ({} declarations, {} ahead of stores), {} terminals",
            assignments.len(),
            declarations,
            captures,
            terminals.len()
        );
        Ok(())
    }
}
