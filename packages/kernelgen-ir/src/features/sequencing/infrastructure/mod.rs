//! Sequencing infrastructure

pub mod assignment_sequence;
pub mod emitter;
pub mod source_writer;

pub use assignment_sequence::AssignmentSequence;
pub use emitter::Emitter;
pub use source_writer::SourceWriter;
