//! The regular expression grammar and its compiler.
//!
//! Patterns support concatenation, `|` alternation, `*` repetition and
//! `(...)` grouping; any other character matches itself. Unlike the
//! arithmetic grammar nothing here is token-wrapped: a space in a pattern
//! is a literal space.
//!
//! ```text
//! expr   -> term '|' expr | term
//! term   -> factor term | factor
//! factor -> basic '*' | basic
//! basic  -> '(' expr ')' | any char except ( ) * |
//! ```
//!
//! Compiling a tree yields an ordinary [`Parser`] over input text, so a
//! compiled pattern composes with everything else in the crate.

use once_cell::sync::Lazy;

use crate::ast::Regex;
use crate::parser::{lazy, sequence, Parse, Parser};
use crate::primitives::{char, failure, satisfy};

static EXPR: Lazy<Parser<Regex>> = Lazy::new(|| {
    let alt = sequence(
        TERM.clone().then_ignore(char('|')),
        lazy(|| EXPR.clone()),
        Regex::alt,
    );
    alt.or(TERM.clone())
});

static TERM: Lazy<Parser<Regex>> = Lazy::new(|| {
    let concat = sequence(FACTOR.clone(), lazy(|| TERM.clone()), Regex::concat);
    concat.or(FACTOR.clone())
});

static FACTOR: Lazy<Parser<Regex>> = Lazy::new(|| {
    let starred = BASIC.clone().then_ignore(char('*')).map(Regex::star);
    starred.or(BASIC.clone())
});

static BASIC: Lazy<Parser<Regex>> = Lazy::new(|| {
    let group = char('(')
        .ignore_then(lazy(|| EXPR.clone()))
        .then_ignore(char(')'))
        .map(Regex::group);
    let single = satisfy(|c| !matches!(c, '(' | ')' | '*' | '|')).map(Regex::Char);
    group.or(single)
});

/// The pattern grammar. Parses a prefix of the pattern text into a
/// [`Regex`] tree.
pub fn regex() -> Parser<Regex> {
    EXPR.clone()
}

impl Regex {
    /// Interprets the tree as a parser over input text.
    ///
    /// The compiled parser matches a prefix of its input and yields the
    /// matched text. Alternation keeps the grammar's left bias; `*` is
    /// greedy.
    pub fn compile(&self) -> Parser<String> {
        match self {
            Regex::Char(c) => char(*c).map(|matched| matched.to_string()),
            Regex::Concat(first, second) => {
                sequence(first.compile(), second.compile(), |mut left, right: String| {
                    left.push_str(&right);
                    left
                })
            }
            Regex::Alt(preferred, fallback) => preferred.compile().or(fallback.compile()),
            Regex::Star(inner) => inner.compile().many().map(|pieces| {
                let mut joined = String::new();
                for piece in pieces {
                    joined.push_str(&piece);
                }
                joined
            }),
            Regex::Group(inner) => inner.compile(),
        }
    }
}

/// Parses `pattern` and compiles it in one step.
///
/// A pattern the grammar cannot parse at all compiles to the
/// always-failing parser; pattern text after the parsed prefix is
/// ignored.
///
/// # Examples
///
/// ```rust
/// use grantha::parser::Parse;
/// use grantha::regex::compile;
///
/// let p = compile("a(b)*a");
/// assert_eq!(p.parse_str("abbbbac"), Some(("abbbba".to_string(), "c")));
/// ```
pub fn compile(pattern: &str) -> Parser<String> {
    match regex().parse_str(pattern) {
        Some((tree, _)) => tree.compile(),
        None => failure(),
    }
}
