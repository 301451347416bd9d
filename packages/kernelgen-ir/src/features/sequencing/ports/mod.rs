//! Ports - Interface definitions for source emission
//!
//! The emitter writes through `SourceSink`; the crate ships `SourceWriter`
//! as the default in-memory implementation.

use thiserror::Error;

/// Indentation errors raised by a sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// `untab` at depth zero
    #[error("Unbalanced tabs: untab below depth zero")]
    Underflow,

    /// Writer finished with open indentation
    #[error("Unbalanced tabs: {depth} level(s) still open")]
    Unbalanced { depth: usize },
}

/// Line-oriented text destination with an indentation depth
pub trait SourceSink {
    /// Write one line at the current depth
    ///
    /// A line ending in `{` indents what follows, a line ending in `}` is
    /// dedented before writing. Lines ending in neither `;` nor `,` get
    /// the sink's terminator.
    fn writeln(&mut self, line: &str) -> Result<(), SinkError>;

    fn tab(&mut self);

    fn untab(&mut self) -> Result<(), SinkError>;
}
