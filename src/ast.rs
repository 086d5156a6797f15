//! Parse trees produced by the expression and regex grammars.
//!
//! Both trees are plain immutable data: the grammars build them bottom-up
//! and the evaluators consume them by recursive walks. Nothing here parses
//! or evaluates anything.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cursor::Location;

// ============================================================================
// SPANNED TOKENS
// ============================================================================

/// A token paired with the input locations before and after its parse.
///
/// Produced by the `with_location` combinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub start: Location,
    pub end: Location,
}

// ============================================================================
// ARITHMETIC EXPRESSION TREE
// ============================================================================

/// A parsed arithmetic expression.
///
/// Each precedence level is encoded as a head followed by a tail: `Expr`
/// holds a term and a chain of `AddTail`/`SubTail` nodes, `Term` holds a
/// factor and a chain of `MulTail`/`DivTail` nodes, and `Factor` holds an
/// operand and a chain of `PowTail` nodes. A chain always ends in
/// `Epsilon`. The encoding leans right, but evaluation folds each chain
/// left-to-right with an accumulator, so `-` and `/` stay left-associative.
///
/// # Examples
///
/// ```rust
/// use grantha::parser::Parse;
/// use grantha::expr::expression;
///
/// let (tree, rest) = expression().parse_str("1 + 2").unwrap();
/// assert_eq!(rest, "");
/// assert_eq!(tree.to_string(), "1 + 2");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumExpr {
    /// A variable reference, resolved against a `Store` at evaluation time.
    Identifier(String),
    /// A natural-number literal.
    Literal(i64),
    /// Lowest precedence level: a term and its `+`/`-` chain.
    Expr(Box<NumExpr>, Box<NumExpr>),
    /// `+ term` followed by the rest of the chain.
    AddTail(Box<NumExpr>, Box<NumExpr>),
    /// `- term` followed by the rest of the chain.
    SubTail(Box<NumExpr>, Box<NumExpr>),
    /// Middle precedence level: a factor and its `*`/`/` chain.
    Term(Box<NumExpr>, Box<NumExpr>),
    /// `* factor` followed by the rest of the chain.
    MulTail(Box<NumExpr>, Box<NumExpr>),
    /// `/ factor` followed by the rest of the chain.
    DivTail(Box<NumExpr>, Box<NumExpr>),
    /// Highest precedence level: an operand and its `^` chain.
    Factor(Box<NumExpr>, Box<NumExpr>),
    /// `^ operand` followed by the rest of the chain.
    PowTail(Box<NumExpr>, Box<NumExpr>),
    /// Unary minus applied to an operand.
    Negate(Box<NumExpr>),
    /// A parenthesized subexpression.
    Paren(Box<NumExpr>),
    /// The empty tail that terminates every chain.
    Epsilon,
}

impl NumExpr {
    pub fn expr(head: NumExpr, tail: NumExpr) -> NumExpr {
        NumExpr::Expr(Box::new(head), Box::new(tail))
    }

    pub fn add_tail(operand: NumExpr, rest: NumExpr) -> NumExpr {
        NumExpr::AddTail(Box::new(operand), Box::new(rest))
    }

    pub fn sub_tail(operand: NumExpr, rest: NumExpr) -> NumExpr {
        NumExpr::SubTail(Box::new(operand), Box::new(rest))
    }

    pub fn term(head: NumExpr, tail: NumExpr) -> NumExpr {
        NumExpr::Term(Box::new(head), Box::new(tail))
    }

    pub fn mul_tail(operand: NumExpr, rest: NumExpr) -> NumExpr {
        NumExpr::MulTail(Box::new(operand), Box::new(rest))
    }

    pub fn div_tail(operand: NumExpr, rest: NumExpr) -> NumExpr {
        NumExpr::DivTail(Box::new(operand), Box::new(rest))
    }

    pub fn factor(head: NumExpr, tail: NumExpr) -> NumExpr {
        NumExpr::Factor(Box::new(head), Box::new(tail))
    }

    pub fn pow_tail(operand: NumExpr, rest: NumExpr) -> NumExpr {
        NumExpr::PowTail(Box::new(operand), Box::new(rest))
    }

    pub fn negate(operand: NumExpr) -> NumExpr {
        NumExpr::Negate(Box::new(operand))
    }

    pub fn paren(inner: NumExpr) -> NumExpr {
        NumExpr::Paren(Box::new(inner))
    }
}

impl fmt::Display for NumExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumExpr::Identifier(name) => write!(f, "{}", name),
            NumExpr::Literal(n) => write!(f, "{}", n),
            NumExpr::Expr(head, tail)
            | NumExpr::Term(head, tail)
            | NumExpr::Factor(head, tail) => write!(f, "{}{}", head, tail),
            NumExpr::AddTail(operand, rest) => write!(f, " + {}{}", operand, rest),
            NumExpr::SubTail(operand, rest) => write!(f, " - {}{}", operand, rest),
            NumExpr::MulTail(operand, rest) => write!(f, " * {}{}", operand, rest),
            NumExpr::DivTail(operand, rest) => write!(f, " / {}{}", operand, rest),
            NumExpr::PowTail(operand, rest) => write!(f, " ^ {}{}", operand, rest),
            NumExpr::Negate(operand) => write!(f, "-{}", operand),
            NumExpr::Paren(inner) => write!(f, "({})", inner),
            NumExpr::Epsilon => Ok(()),
        }
    }
}

// ============================================================================
// REGULAR EXPRESSION TREE
// ============================================================================

/// A parsed regular expression pattern.
///
/// The grammar folds as it parses, so the tree carries no epsilon or tail
/// nodes: a pattern without alternation simply has no `Alt` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Regex {
    /// A single literal character.
    Char(char),
    /// Two patterns in sequence.
    Concat(Box<Regex>, Box<Regex>),
    /// Ordered alternation; the left side is preferred.
    Alt(Box<Regex>, Box<Regex>),
    /// Zero or more repetitions.
    Star(Box<Regex>),
    /// A parenthesized subpattern.
    Group(Box<Regex>),
}

impl Regex {
    pub fn concat(first: Regex, second: Regex) -> Regex {
        Regex::Concat(Box::new(first), Box::new(second))
    }

    pub fn alt(preferred: Regex, fallback: Regex) -> Regex {
        Regex::Alt(Box::new(preferred), Box::new(fallback))
    }

    pub fn star(inner: Regex) -> Regex {
        Regex::Star(Box::new(inner))
    }

    pub fn group(inner: Regex) -> Regex {
        Regex::Group(Box::new(inner))
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regex::Char(c) => write!(f, "{}", c),
            Regex::Concat(first, second) => write!(f, "{}{}", first, second),
            Regex::Alt(preferred, fallback) => write!(f, "{}|{}", preferred, fallback),
            Regex::Star(inner) => write!(f, "{}*", inner),
            Regex::Group(inner) => write!(f, "({})", inner),
        }
    }
}
