//! Naming Domain - what a binding may be called after

/// Positional information available for a binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingHint {
    /// Field of a named vector: `ax`, `ay`, ..., `a4`
    Field { parent: String, index: usize },

    /// Field of a named square matrix: `m01`, `m10`, ...
    MatrixField {
        parent: String,
        index: usize,
        dimension: usize,
    },

    /// No positional name; drawn from the temporaries
    Anonymous,
}

/// Largest `d` with `d * d <= n`
pub fn grid_dimension(n: usize) -> usize {
    let mut d = (n as f64).sqrt() as usize;
    while d * d > n {
        d -= 1;
    }
    while (d + 1) * (d + 1) <= n {
        d += 1;
    }
    d
}
