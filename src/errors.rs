//! Evaluation errors.
//!
//! Parse-level failure is not an error: a parser that does not match simply
//! returns `None`. The typed errors here cover the evaluation of expression
//! trees, where a well-formed parse can still fail against a given store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised while evaluating an expression tree.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvalError {
    /// An identifier had no binding in the store.
    #[error("undefined identifier '{name}'")]
    UnboundIdentifier { name: String },

    #[error("division by zero")]
    DivisionByZero,

    /// An arithmetic step left the representable integer range.
    #[error("integer overflow")]
    Overflow,

    /// A tree that the grammar cannot produce, such as a bare chain tail.
    #[error("malformed expression tree: {context}")]
    MalformedTree { context: String },
}

impl EvalError {
    /// Constructs an `UnboundIdentifier` for the given name.
    pub fn unbound(name: impl Into<String>) -> Self {
        EvalError::UnboundIdentifier { name: name.into() }
    }

    /// Constructs a `MalformedTree` describing what was out of place.
    pub fn malformed(context: impl Into<String>) -> Self {
        EvalError::MalformedTree {
            context: context.into(),
        }
    }
}
