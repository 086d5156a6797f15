use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::ast::NumExpr;
use crate::errors::EvalError;

/// Persistent mapping from identifier names to integer values.
///
/// `bind` returns a new store and leaves the receiver untouched, so an
/// evaluation can never observe bindings made after it captured its store.
///
/// # Examples
///
/// ```rust
/// use grantha::eval::Store;
///
/// let base = Store::new();
/// let extended = base.bind("x", 3);
/// assert_eq!(extended.get("x"), Some(3));
/// assert_eq!(base.get("x"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Store {
    bindings: HashMap<String, i64>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            bindings: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Returns a new store that also maps `name` to `value`.
    pub fn bind(&self, name: impl Into<String>, value: i64) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), value);
        Store { bindings }
    }
}

impl FromIterator<(String, i64)> for Store {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Store {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, i64)> for Store {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

impl NumExpr {
    /// Evaluates the tree against `store`.
    ///
    /// Chains are folded left-to-right with an accumulator, which is what
    /// keeps `-` and `/` left-associative despite the right-leaning tree.
    /// Identifier lookup is strict: an unbound name is an error, not zero.
    pub fn eval(&self, store: &Store) -> Result<i64, EvalError> {
        match self {
            NumExpr::Identifier(name) => {
                store.get(name).ok_or_else(|| EvalError::unbound(name))
            }
            NumExpr::Literal(n) => Ok(*n),
            NumExpr::Expr(head, tail)
            | NumExpr::Term(head, tail)
            | NumExpr::Factor(head, tail) => {
                let lhs = head.eval(store)?;
                tail.eval_tail(lhs, store)
            }
            NumExpr::Negate(operand) => operand
                .eval(store)?
                .checked_neg()
                .ok_or(EvalError::Overflow),
            NumExpr::Paren(inner) => inner.eval(store),
            NumExpr::Epsilon => Err(EvalError::malformed("empty tail evaluated as a value")),
            NumExpr::AddTail(..)
            | NumExpr::SubTail(..)
            | NumExpr::MulTail(..)
            | NumExpr::DivTail(..)
            | NumExpr::PowTail(..) => {
                Err(EvalError::malformed("chain tail evaluated without a left-hand side"))
            }
        }
    }

    // Folds one chain link into the accumulator and recurses on the rest.
    fn eval_tail(&self, acc: i64, store: &Store) -> Result<i64, EvalError> {
        match self {
            NumExpr::Epsilon => Ok(acc),
            NumExpr::AddTail(operand, rest) => {
                let value = operand.eval(store)?;
                let next = acc.checked_add(value).ok_or(EvalError::Overflow)?;
                rest.eval_tail(next, store)
            }
            NumExpr::SubTail(operand, rest) => {
                let value = operand.eval(store)?;
                let next = acc.checked_sub(value).ok_or(EvalError::Overflow)?;
                rest.eval_tail(next, store)
            }
            NumExpr::MulTail(operand, rest) => {
                let value = operand.eval(store)?;
                let next = acc.checked_mul(value).ok_or(EvalError::Overflow)?;
                rest.eval_tail(next, store)
            }
            NumExpr::DivTail(operand, rest) => {
                let value = operand.eval(store)?;
                if value == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                let next = acc.checked_div(value).ok_or(EvalError::Overflow)?;
                rest.eval_tail(next, store)
            }
            NumExpr::PowTail(operand, rest) => {
                let value = operand.eval(store)?;
                let next = pow(acc, value)?;
                rest.eval_tail(next, store)
            }
            _ => Err(EvalError::malformed("value node where a chain tail belongs")),
        }
    }
}

// Exponentiation goes through f64 and truncates, so negative exponents
// round toward zero instead of failing.
fn pow(base: i64, exponent: i64) -> Result<i64, EvalError> {
    let result = (base as f64).powf(exponent as f64);
    if !result.is_finite() || result < i64::MIN as f64 || result >= i64::MAX as f64 {
        return Err(EvalError::Overflow);
    }
    Ok(result.trunc() as i64)
}
