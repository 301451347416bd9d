// Name Allocator - readable, collision-free binding names
//
// Order of preference for a materialized node:
//   1. field of a vector  -> <parent><axis> (index < axis count), <parent><index>
//      field of a matrix  -> <parent><row><column>
//   2. front of the recycled temporaries pool
//   3. <temp_prefix><N>, N strictly increasing, skipping taken names
//
// Every name handed out or declared by the caller lands in `taken`.

use ahash::AHashSet;
use std::collections::VecDeque;

use crate::config::NamingConfig;
use crate::errors::Result;
use crate::features::naming::domain::{grid_dimension, NamingHint};
use crate::features::variable_model::{Graph, NodeKind};
use crate::shared::models::NodeId;

#[derive(Debug)]
pub struct NameAllocator {
    taken: AHashSet<String>,
    pool: VecDeque<String>,
    temp_counter: usize,
    phi_counter: usize,
    axis_letters: Vec<char>,
    temp_prefix: String,
    phi_prefix: String,
    phi_retry_suffixes: usize,
}

impl NameAllocator {
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            taken: AHashSet::new(),
            pool: VecDeque::new(),
            temp_counter: 0,
            phi_counter: 0,
            axis_letters: config.axis_letters.chars().collect(),
            temp_prefix: config.temp_prefix.clone(),
            phi_prefix: config.phi_prefix.clone(),
            phi_retry_suffixes: config.phi_retry_suffixes,
        }
    }

    /// Mark a name as used; false if it already was
    pub fn reserve(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_string())
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Hand a released temporary back for reuse
    pub fn recycle(&mut self, name: impl Into<String>) {
        self.pool.push_back(name.into());
    }

    pub fn pooled(&self) -> usize {
        self.pool.len()
    }

    /// Name for a binding
    pub fn allocate(&mut self, hint: &NamingHint) -> String {
        let name = match self.positional(hint) {
            Some(name) => name,
            None => match self.pool.pop_front() {
                Some(name) => name,
                None => self.mint_temporary(),
            },
        };
        self.reserve(&name);
        name
    }

    fn positional(&self, hint: &NamingHint) -> Option<String> {
        match hint {
            NamingHint::Field { parent, index } => {
                let axis = self
                    .axis_letters
                    .get(*index)
                    .map(|letter| format!("{}{}", parent, letter));
                let numbered = format!("{}{}", parent, index);
                axis.into_iter()
                    .chain(std::iter::once(numbered))
                    .find(|candidate| !self.is_taken(candidate))
            }
            NamingHint::MatrixField {
                parent,
                index,
                dimension,
            } if *dimension > 0 => {
                let row = index / dimension;
                let column = index % dimension;
                let candidate = format!("{}{}{}", parent, row, column);
                (!self.is_taken(&candidate)).then_some(candidate)
            }
            _ => None,
        }
    }

    fn mint_temporary(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", self.temp_prefix, self.temp_counter);
            self.temp_counter += 1;
            if !self.is_taken(&candidate) {
                return candidate;
            }
        }
    }

    /// Name for a phi binding
    ///
    /// The requested name (or `phi`, `phi2`, `phi3`, ...) if free; else the
    /// candidate with a digit suffix; else the next free counter default.
    pub fn phi_name(&mut self, requested: Option<&str>) -> String {
        let candidate = match requested {
            Some(name) => name.to_string(),
            None => self.phi_default(self.phi_counter),
        };

        let name = if self.is_taken(&candidate) {
            let retried = (0..self.phi_retry_suffixes)
                .map(|i| format!("{}{}", candidate, i))
                .find(|suffixed| !self.is_taken(suffixed));
            match retried {
                Some(name) => name,
                None => {
                    while self.is_taken(&self.phi_default(self.phi_counter)) {
                        self.phi_counter += 1;
                    }
                    self.phi_default(self.phi_counter)
                }
            }
        } else {
            candidate
        };

        self.phi_counter += 1;
        self.reserve(&name);
        name
    }

    fn phi_default(&self, counter: usize) -> String {
        if counter == 0 {
            self.phi_prefix.clone()
        } else {
            format!("{}{}", self.phi_prefix, counter + 1)
        }
    }
}

/// Positional naming information for a node
pub fn hint_for(graph: &Graph, id: NodeId) -> Result<NamingHint> {
    let node = graph.node(id)?;
    let (parent, index) = match node.kind {
        NodeKind::Field { parent, index } => (parent, index),
        _ => return Ok(NamingHint::Anonymous),
    };

    let parent = graph.node(parent)?;
    let (name, is_matrix) = match (&parent.kind, parent.name()) {
        (NodeKind::Vector { is_matrix, .. }, Some(name)) => (name.to_string(), *is_matrix),
        _ => return Ok(NamingHint::Anonymous),
    };

    if is_matrix {
        Ok(NamingHint::MatrixField {
            parent: name,
            index,
            dimension: grid_dimension(parent.len()),
        })
    } else {
        Ok(NamingHint::Field {
            parent: name,
            index,
        })
    }
}
