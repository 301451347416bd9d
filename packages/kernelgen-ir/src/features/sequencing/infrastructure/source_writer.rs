//! SourceWriter - in-memory `SourceSink`
//!
//! Tracks the indentation depth and auto-tabs on trailing `{` and `}`.

use crate::config::EmitConfig;
use crate::features::sequencing::ports::{SinkError, SourceSink};

#[derive(Debug, Clone)]
pub struct SourceWriter {
    buffer: String,
    depth: usize,
    indent: String,
    terminator: String,
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new(&EmitConfig::default())
    }
}

impl SourceWriter {
    pub fn new(config: &EmitConfig) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent: config.indent.clone(),
            terminator: config.terminator.clone(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Written text; fails if indentation is still open
    pub fn finish(self) -> Result<String, SinkError> {
        if self.depth != 0 {
            return Err(SinkError::Unbalanced { depth: self.depth });
        }
        Ok(self.buffer)
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent);
        }
    }
}

impl SourceSink for SourceWriter {
    fn writeln(&mut self, line: &str) -> Result<(), SinkError> {
        match line.chars().last() {
            Some('{') => {
                self.write_indent();
                self.buffer.push_str(line);
                self.tab();
            }
            Some('}') => {
                self.untab()?;
                self.write_indent();
                self.buffer.push_str(line);
            }
            Some(';') | Some(',') => {
                self.write_indent();
                self.buffer.push_str(line);
            }
            Some(_) => {
                self.write_indent();
                self.buffer.push_str(line);
                self.buffer.push_str(&self.terminator);
            }
            // blank lines stay blank
            None => {}
        }
        self.buffer.push('\n');
        Ok(())
    }

    fn tab(&mut self) {
        self.depth += 1;
    }

    fn untab(&mut self) -> Result<(), SinkError> {
        self.depth = self.depth.checked_sub(1).ok_or(SinkError::Underflow)?;
        Ok(())
    }
}
