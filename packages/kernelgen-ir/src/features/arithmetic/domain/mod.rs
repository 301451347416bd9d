//! Arithmetic Domain - additive chain models

/// Operator of an additive chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainOp {
    /// `a + b + ...`
    Add,
    /// `a - b - ...`, every operand after the first is subtracted
    Subtract,
}

impl ChainOp {
    /// `+` or `-`, anything else is not a chain
    pub fn from_operation(operation: &str) -> Option<Self> {
        match operation {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }
}

/// One chain operand rendered both ways
///
/// `grouped` is the text a node produces in default bracket mode,
/// `plain` the text with brackets suppressed. They only differ for nodes
/// that need brackets, whose grouped text starts with `(`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub plain: String,
    pub grouped: String,
}

impl Term {
    pub fn new(plain: impl Into<String>, grouped: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            grouped: grouped.into(),
        }
    }

    /// Term whose text is the same in both modes (names, calls, fields)
    pub fn atom(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            plain: text.clone(),
            grouped: text,
        }
    }

    /// Grouped text begins with a literal minus sign
    ///
    /// A grouped node such as `(-a * d)` is not negative even though its
    /// plain text starts with `-`.
    pub fn is_negative(&self) -> bool {
        self.grouped.starts_with('-')
    }
}

/// Rendered chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedChain {
    pub text: String,

    /// Whole chain wrapped as `-( ... )`
    pub negated: bool,
}

impl NormalizedChain {
    /// The negation wrap already groups the chain
    pub fn needs_brackets(&self) -> bool {
        !self.negated
    }
}
