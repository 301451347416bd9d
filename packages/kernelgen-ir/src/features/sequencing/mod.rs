//! Assignment Sequencer & Emitter
//!
//! Statement list built up by materialization, `assign` and `phi`, and its
//! rendering through a `SourceSink`.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::Assignment;
pub use infrastructure::{AssignmentSequence, Emitter, SourceWriter};
pub use ports::{SinkError, SourceSink};
