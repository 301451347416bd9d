//! Common test utilities for kernelgen-ir

#![allow(dead_code)]

use kernelgen_ir::{CodeBuilder, NodeId, Terminal};

/// Scalars `x` and `y`
pub fn scalars(builder: &mut CodeBuilder) -> (NodeId, NodeId) {
    (builder.scalar("x"), builder.scalar("y"))
}

/// Source text returning `node`
pub fn source_returning(builder: &mut CodeBuilder, node: NodeId) -> String {
    let output = builder.output(node).unwrap();
    builder.to_source(&[Terminal::from(output)]).unwrap()
}
