//! Primitive parsers: the atoms every grammar is assembled from.
//!
//! Character-level matching lives here, along with the small lexical
//! helpers (identifiers, naturals, symbols) that grammars reach for
//! constantly. Everything else in the crate is composition of these.

use crate::cursor::Location;
use crate::parser::{sequence, Parse, Parser};

// ============================================================================
// CHARACTER PRIMITIVES
// ============================================================================

/// Consumes a single character, whatever it is. Fails only at end of
/// input.
pub fn item() -> Parser<char> {
    Parser::new(|input| input.advance())
}

/// Consumes one character iff `pred` accepts it.
pub fn satisfy<F>(pred: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    item().and_then(move |c| if pred(c) { success(c) } else { failure() })
}

/// Consumes exactly the character `expected`.
pub fn char(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

/// Consumes exactly the string `expected`, character by character.
///
/// The empty string always matches without consuming anything. On a
/// mismatch nothing is consumed from the caller's point of view; the
/// cursor handed to the next alternative is the original one.
pub fn literal(expected: &str) -> Parser<String> {
    let expected = expected.to_string();
    Parser::new(move |input| {
        let mut rest = input;
        for want in expected.chars() {
            let (got, next) = rest.advance()?;
            if got != want {
                return None;
            }
            rest = next;
        }
        Some((expected.clone(), rest))
    })
}

/// Always succeeds with `value`, consuming nothing.
pub fn success<T: Clone + Send + Sync + 'static>(value: T) -> Parser<T> {
    Parser::new(move |input| Some((value.clone(), input)))
}

/// Never matches.
pub fn failure<T: Clone + Send + Sync + 'static>() -> Parser<T> {
    Parser::new(|_input| None)
}

/// Succeeds with the current input location, consuming nothing.
pub fn location() -> Parser<Location> {
    Parser::new(|input| Some((input.location(), input)))
}

// ============================================================================
// CLASSIFIERS (ASCII)
// ============================================================================

pub fn letter() -> Parser<char> {
    satisfy(|c| c.is_ascii_alphabetic())
}

pub fn digit() -> Parser<char> {
    satisfy(|c| c.is_ascii_digit())
}

pub fn upper() -> Parser<char> {
    satisfy(|c| c.is_ascii_uppercase())
}

pub fn lower() -> Parser<char> {
    satisfy(|c| c.is_ascii_lowercase())
}

pub fn alphanumeric() -> Parser<char> {
    satisfy(|c| c.is_ascii_alphanumeric())
}

// ============================================================================
// LEXICAL HELPERS
// ============================================================================

/// Skips zero or more spaces, tabs, newlines and carriage returns.
pub fn whitespace() -> Parser<()> {
    satisfy(|c| matches!(c, ' ' | '\n' | '\r' | '\t')).many().ignored()
}

/// An identifier: a letter followed by alphanumerics. No whitespace
/// handling; see [`identifier`] for the token-level version.
pub fn ident() -> Parser<String> {
    sequence(letter(), alphanumeric().many(), |first, rest| {
        let mut name = String::new();
        name.push(first);
        name.extend(rest);
        name
    })
}

/// A natural number: one or more digits, converted to `i64`.
///
/// A digit run too large for `i64` is treated as no match, not as a
/// separate error kind.
pub fn nat() -> Parser<i64> {
    digit().many1().and_then(|digits| {
        let text: String = digits.into_iter().collect();
        match text.parse::<i64>() {
            Ok(n) => success(n),
            Err(_) => failure(),
        }
    })
}

/// [`ident`] with surrounding whitespace skipped.
pub fn identifier() -> Parser<String> {
    ident().token()
}

/// [`nat`] with surrounding whitespace skipped.
pub fn natural() -> Parser<i64> {
    nat().token()
}

/// Matches `expected` exactly, with surrounding whitespace skipped.
pub fn symbol(expected: &str) -> Parser<String> {
    literal(expected).token()
}
