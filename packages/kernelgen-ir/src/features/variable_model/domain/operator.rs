//! Operator kinds
//!
//! The operation string of an apply is classified once, at construction.
//! Classification order matters: `..len` is a property access, not a
//! method call, and `/` alone is infix, not a prefix function.

use crate::features::arithmetic::ChainOp;

/// Operation string of the negation primitive
pub const NEGATE: &str = "[[negate]]";

/// Rendering rule of an apply node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `..length` -> `v.length`; holds the suffix `.length`
    PropertyAccess(String),

    /// `[[negate]]` -> `-v`, collapsing double negation
    Negate,

    /// `typeof/` -> `typeof/ v`; operation kept verbatim
    PrefixFunction(String),

    /// `.dot` -> `a.dot(b, c)`
    MethodCall(String),

    /// `+` / `-` chains, sign normalized
    AddSub(ChainOp),

    /// `*`, `/`, `&&`, `||` joined with spaces, always grouped
    Infix(String),

    /// `[]` -> `[a, b, c]`
    ListLiteral,

    /// anything else -> `f(a, b)`
    FunctionCall(String),
}

impl Operator {
    pub fn parse(operation: &str) -> Self {
        if let Some(rest) = operation.strip_prefix("..") {
            return Self::PropertyAccess(format!(".{}", rest));
        }
        if operation == NEGATE {
            return Self::Negate;
        }
        if operation.len() > 2 && operation.ends_with('/') {
            return Self::PrefixFunction(operation.to_string());
        }
        if operation.starts_with('.') {
            return Self::MethodCall(operation.to_string());
        }
        if let Some(op) = ChainOp::from_operation(operation) {
            return Self::AddSub(op);
        }
        match operation {
            "*" | "/" | "&&" | "||" => Self::Infix(operation.to_string()),
            "[]" => Self::ListLiteral,
            _ => Self::FunctionCall(operation.to_string()),
        }
    }

    /// Kinds that render exactly one operand
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Self::PropertyAccess(_) | Self::Negate | Self::PrefixFunction(_)
        )
    }
}
