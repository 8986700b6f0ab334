//! Fluent construction of expression trees.
//!
//! The client surface builds one node per call, so a chain of frame
//! operations produces a nested tree; flattening nests of the same
//! list-accepting operator is the optimizer's job, not the builder's.

use crate::node::{Arg, ExprNode};
use crate::ops;

/// Build an arbitrary call node: `(op arg ...)`.
pub fn call(op: impl Into<String>, args: Vec<Arg>) -> ExprNode {
    ExprNode::new(op, args)
}

/// Append a column to a frame under a new name: `(append dst col "name")`.
pub fn append(dst: impl Into<Arg>, col: impl Into<Arg>, name: impl Into<String>) -> ExprNode {
    ExprNode::new(
        ops::APPEND,
        vec![dst.into(), col.into(), Arg::from(name.into())],
    )
}

/// Column-wise concatenation: `(cbind left right)`.
pub fn cbind(left: impl Into<Arg>, right: impl Into<Arg>) -> ExprNode {
    ExprNode::new(ops::CBIND, vec![left.into(), right.into()])
}

/// Row-wise concatenation: `(rbind top bottom)`.
pub fn rbind(top: impl Into<Arg>, bottom: impl Into<Arg>) -> ExprNode {
    ExprNode::new(ops::RBIND, vec![top.into(), bottom.into()])
}

/// Column selection by index: `(cols_py src index)`.
pub fn cols(src: impl Into<Arg>, index: impl Into<Arg>) -> ExprNode {
    ExprNode::new(ops::COLS_PY, vec![src.into(), index.into()])
}

impl ExprNode {
    fn binary(self, op: &str, other: impl Into<Arg>) -> Self {
        Self::new(op, vec![self.into(), other.into()])
    }

    // Arithmetic operators

    /// Addition.
    pub fn add(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::ADD, other)
    }

    /// Subtraction.
    pub fn sub(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::SUB, other)
    }

    /// Multiplication.
    pub fn mul(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::MUL, other)
    }

    /// Division.
    pub fn div(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::DIV, other)
    }

    /// Modulo.
    pub fn modulo(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::MOD, other)
    }

    /// Exponentiation.
    pub fn pow(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::POW, other)
    }

    // Comparison operators

    /// Equality comparison.
    pub fn eq(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::EQ, other)
    }

    /// Inequality comparison.
    pub fn neq(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::NEQ, other)
    }

    /// Greater than comparison.
    pub fn gt(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::GT, other)
    }

    /// Greater than or equal comparison.
    pub fn gte(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::GTE, other)
    }

    /// Less than comparison.
    pub fn lt(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::LT, other)
    }

    /// Less than or equal comparison.
    pub fn lte(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::LTE, other)
    }

    // Logical operators

    /// Logical AND.
    pub fn and(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::AND, other)
    }

    /// Logical OR.
    pub fn or(self, other: impl Into<Arg>) -> Self {
        self.binary(ops::OR, other)
    }

    /// Logical NOT.
    pub fn not(self) -> Self {
        Self::new(ops::NOT, vec![self.into()])
    }
}
