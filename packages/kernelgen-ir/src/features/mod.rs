//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - Implementations

pub mod variable_model;

// Value numbering of apply / reduce / map requests
pub mod identity_cache;

pub mod reference_tracker;

pub mod naming;

// Sign normalization of + / - chains
pub mod arithmetic;

pub mod sequencing;

pub mod loader;
