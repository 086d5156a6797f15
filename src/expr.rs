//! The arithmetic expression grammar.
//!
//! Five precedence-layered rules, each a process-wide static built once.
//! Recursive references go through [`lazy`], so a rule can mention itself
//! or a rule defined below it without recursing at construction time.
//! Every terminal is token-wrapped: whitespace between tokens is free.
//!
//! ```text
//! expression  -> term term_tail
//! term_tail   -> '+' term term_tail | '-' term term_tail | epsilon
//! term        -> factor factor_tail
//! factor_tail -> '*' factor factor_tail | '/' factor factor_tail | epsilon
//! factor      -> operand power_tail
//! power_tail  -> '^' operand power_tail | epsilon
//! operand     -> '(' expression ')' | natural | identifier
//!              | '-' operand | '+' operand
//! ```

use once_cell::sync::Lazy;

use crate::ast::NumExpr;
use crate::parser::{lazy, sequence, Parse, Parser};
use crate::primitives::{identifier, natural, success, symbol};

static EXPRESSION: Lazy<Parser<NumExpr>> =
    Lazy::new(|| sequence(TERM.clone(), TERM_TAIL.clone(), NumExpr::expr));

static TERM_TAIL: Lazy<Parser<NumExpr>> = Lazy::new(|| {
    let add = sequence(
        symbol("+").ignore_then(TERM.clone()),
        lazy(|| TERM_TAIL.clone()),
        NumExpr::add_tail,
    );
    let sub = sequence(
        symbol("-").ignore_then(TERM.clone()),
        lazy(|| TERM_TAIL.clone()),
        NumExpr::sub_tail,
    );
    add.or(sub).or(success(NumExpr::Epsilon))
});

static TERM: Lazy<Parser<NumExpr>> =
    Lazy::new(|| sequence(FACTOR.clone(), FACTOR_TAIL.clone(), NumExpr::term));

static FACTOR_TAIL: Lazy<Parser<NumExpr>> = Lazy::new(|| {
    let mul = sequence(
        symbol("*").ignore_then(FACTOR.clone()),
        lazy(|| FACTOR_TAIL.clone()),
        NumExpr::mul_tail,
    );
    let div = sequence(
        symbol("/").ignore_then(FACTOR.clone()),
        lazy(|| FACTOR_TAIL.clone()),
        NumExpr::div_tail,
    );
    mul.or(div).or(success(NumExpr::Epsilon))
});

static FACTOR: Lazy<Parser<NumExpr>> =
    Lazy::new(|| sequence(OPERAND.clone(), POWER_TAIL.clone(), NumExpr::factor));

static POWER_TAIL: Lazy<Parser<NumExpr>> = Lazy::new(|| {
    let pow = sequence(
        symbol("^").ignore_then(OPERAND.clone()),
        lazy(|| POWER_TAIL.clone()),
        NumExpr::pow_tail,
    );
    pow.or(success(NumExpr::Epsilon))
});

static OPERAND: Lazy<Parser<NumExpr>> = Lazy::new(|| {
    let paren = symbol("(")
        .ignore_then(lazy(|| EXPRESSION.clone()))
        .then_ignore(symbol(")"))
        .map(NumExpr::paren);
    let literal = natural().map(NumExpr::Literal);
    let variable = identifier().map(NumExpr::Identifier);
    let negate = symbol("-")
        .ignore_then(lazy(|| OPERAND.clone()))
        .map(NumExpr::negate);
    let positive = symbol("+").ignore_then(lazy(|| OPERAND.clone()));
    paren.or(literal).or(variable).or(negate).or(positive)
});

/// The arithmetic expression grammar.
///
/// # Examples
///
/// ```rust
/// use grantha::eval::Store;
/// use grantha::expr::expression;
/// use grantha::parser::Parse;
///
/// let (tree, rest) = expression().parse_str("(8 + 4) * 12").unwrap();
/// assert_eq!(rest, "");
/// assert_eq!(tree.eval(&Store::new()), Ok(144));
/// ```
pub fn expression() -> Parser<NumExpr> {
    EXPRESSION.clone()
}
