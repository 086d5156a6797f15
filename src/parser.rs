//! The parser abstraction and its combinators.
//!
//! Anything that can attempt a parse implements [`Parse`]; the combinator
//! methods live on the trait so every parser shape gets them. [`Parser`] is
//! the concrete workhorse, a shared closure from cursor to result, and
//! [`Lazy`] defers construction so recursive grammars can reference rules
//! that are not built yet.
//!
//! There is exactly one failure mode: `None`, meaning "no match". Choice
//! re-runs the alternative from the same cursor, so failure never needs to
//! undo anything.

use std::sync::Arc;

use im::Vector;

use crate::ast::Spanned;
use crate::cursor::Cursor;
use crate::primitives::{location, success, whitespace};

// ============================================================================
// CORE TYPES
// ============================================================================

/// The outcome of a parse attempt: the token plus the cursor after it, or
/// `None` when the input does not match.
pub type Parsed<'s, T> = Option<(T, Cursor<'s>)>;

type Run<T> = dyn for<'s> Fn(Cursor<'s>) -> Parsed<'s, T> + Send + Sync;

/// A parser as a shared closure.
///
/// Cloning is cheap (an `Arc` bump), which is what lets grammar rules be
/// built once, stored in statics, and handed out freely.
pub struct Parser<T> {
    run: Arc<Run<T>>,
}

impl<T> Parser<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: for<'s> Fn(Cursor<'s>) -> Parsed<'s, T> + Send + Sync + 'static,
    {
        Parser { run: Arc::new(run) }
    }
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

/// A parser built on demand.
///
/// The thunk runs on every parse call, so a rule can refer to itself (or to
/// a rule defined later) without recursing while the grammar is being
/// constructed.
#[derive(Clone)]
pub struct Lazy<F> {
    thunk: F,
}

/// Wraps a thunk as a parser. See [`Lazy`].
///
/// # Examples
///
/// ```rust
/// use grantha::parser::{lazy, Parse, Parser};
/// use grantha::primitives::{char, success};
///
/// // How deeply nested is a balanced run of parentheses?
/// fn depth() -> Parser<i64> {
///     let deeper = char('(')
///         .ignore_then(lazy(depth))
///         .then_ignore(char(')'))
///         .map(|d| d + 1);
///     deeper.or(success(0))
/// }
///
/// assert_eq!(depth().parse_str("((()))"), Some((3, "")));
/// ```
pub fn lazy<F, P>(thunk: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parse,
{
    Lazy { thunk }
}

// ============================================================================
// THE PARSE TRAIT
// ============================================================================

/// The single capability every parser has: attempt a parse against a
/// cursor. All combinators are provided methods built on top of it.
pub trait Parse {
    /// The value produced by a successful parse.
    type Token: Clone + Send + Sync + 'static;

    /// Attempts to parse a prefix of the input at `input`.
    fn parse<'s>(&self, input: Cursor<'s>) -> Parsed<'s, Self::Token>;

    /// Runs the parser over a string, returning the token and the
    /// unconsumed remainder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grantha::parser::Parse;
    /// use grantha::primitives::literal;
    ///
    /// let p = literal("he");
    /// assert_eq!(p.parse_str("hello"), Some(("he".to_string(), "llo")));
    /// assert_eq!(p.parse_str("goodbye"), None);
    /// ```
    fn parse_str<'s>(&self, input: &'s str) -> Option<(Self::Token, &'s str)> {
        let (token, rest) = self.parse(Cursor::new(input))?;
        Some((token, rest.remaining()))
    }

    /// Transforms the token of a successful parse.
    fn map<U, F>(self, f: F) -> Parser<U>
    where
        Self: Sized + Send + Sync + 'static,
        U: Clone + Send + Sync + 'static,
        F: Fn(Self::Token) -> U + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (token, rest) = self.parse(input)?;
            Some((f(token), rest))
        })
    }

    /// Monadic bind: feeds the token to `f` and runs the parser it returns
    /// on the remainder.
    fn and_then<Q, F>(self, f: F) -> Parser<Q::Token>
    where
        Self: Sized + Send + Sync + 'static,
        Q: Parse,
        F: Fn(Self::Token) -> Q + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (token, rest) = self.parse(input)?;
            f(token).parse(rest)
        })
    }

    /// Ordered choice. Runs `self`; if it does not match, runs `other` on
    /// the same input. The left side always wins when both would match.
    fn or<P>(self, other: P) -> Parser<Self::Token>
    where
        Self: Sized + Send + Sync + 'static,
        P: Parse<Token = Self::Token> + Send + Sync + 'static,
    {
        Parser::new(move |input| self.parse(input).or_else(|| other.parse(input)))
    }

    /// Runs `self` then `next`, pairing the tokens.
    fn then<P>(self, next: P) -> Parser<(Self::Token, P::Token)>
    where
        Self: Sized + Send + Sync + 'static,
        P: Parse + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (first, rest) = self.parse(input)?;
            let (second, rest) = next.parse(rest)?;
            Some(((first, second), rest))
        })
    }

    /// Runs `self` then `next`, keeping only `next`'s token.
    fn ignore_then<P>(self, next: P) -> Parser<P::Token>
    where
        Self: Sized + Send + Sync + 'static,
        P: Parse + Send + Sync + 'static,
    {
        sequence(self, next, |_, second| second)
    }

    /// Runs `self` then `next`, keeping only `self`'s token.
    fn then_ignore<P>(self, next: P) -> Parser<Self::Token>
    where
        Self: Sized + Send + Sync + 'static,
        P: Parse + Send + Sync + 'static,
    {
        sequence(self, next, |first, _| first)
    }

    /// Zero or more repetitions, collected in order.
    ///
    /// Matching zero times succeeds without consuming anything. The
    /// repetition is expressed through [`lazy`], so a parser that succeeds
    /// without consuming input will recurse here without making progress;
    /// callers must not put such a parser under `many`.
    fn many(self) -> Parser<Vector<Self::Token>>
    where
        Self: Sized + Clone + Send + Sync + 'static,
    {
        let parser = self;
        lazy(move || parser.clone().many1()).or(success(Vector::new()))
    }

    /// One or more repetitions. Fails if the first match fails.
    ///
    /// The zero-consumption caveat on [`many`](Parse::many) applies here
    /// too.
    fn many1(self) -> Parser<Vector<Self::Token>>
    where
        Self: Sized + Clone + Send + Sync + 'static,
    {
        let rest = self.clone().many();
        self.then(rest).map(|(head, mut tail)| {
            tail.push_front(head);
            tail
        })
    }

    /// Falls back to `default` without consuming input when `self` does
    /// not match.
    fn or_value(self, default: Self::Token) -> Parser<Self::Token>
    where
        Self: Sized + Send + Sync + 'static,
    {
        self.or(success(default))
    }

    /// Discards the token, keeping only the fact of the match.
    fn ignored(self) -> Parser<()>
    where
        Self: Sized + Send + Sync + 'static,
    {
        self.map(|_| ())
    }

    /// Skips surrounding whitespace on both sides of `self`.
    fn token(self) -> Parser<Self::Token>
    where
        Self: Sized + Send + Sync + 'static,
    {
        whitespace().ignore_then(self).then_ignore(whitespace())
    }

    /// Wraps the token with the locations before and after its parse.
    fn with_location(self) -> Parser<Spanned<Self::Token>>
    where
        Self: Sized + Send + Sync + 'static,
    {
        sequence3(location(), self, location(), |start, value, end| Spanned {
            value,
            start,
            end,
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Parse for Parser<T> {
    type Token = T;

    fn parse<'s>(&self, input: Cursor<'s>) -> Parsed<'s, T> {
        (self.run)(input)
    }
}

impl<F, P> Parse for Lazy<F>
where
    F: Fn() -> P,
    P: Parse,
{
    type Token = P::Token;

    fn parse<'s>(&self, input: Cursor<'s>) -> Parsed<'s, Self::Token> {
        (self.thunk)().parse(input)
    }
}

// ============================================================================
// SEQUENCING
// ============================================================================

/// Runs two parsers in order and combines their tokens. Fails if either
/// side fails; the caller's cursor is untouched either way.
pub fn sequence<A, B, F, U>(first: A, second: B, combine: F) -> Parser<U>
where
    A: Parse + Send + Sync + 'static,
    B: Parse + Send + Sync + 'static,
    F: Fn(A::Token, B::Token) -> U + Send + Sync + 'static,
    U: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let (a, rest) = first.parse(input)?;
        let (b, rest) = second.parse(rest)?;
        Some((combine(a, b), rest))
    })
}

/// Three-parser version of [`sequence`].
pub fn sequence3<A, B, C, F, U>(first: A, second: B, third: C, combine: F) -> Parser<U>
where
    A: Parse + Send + Sync + 'static,
    B: Parse + Send + Sync + 'static,
    C: Parse + Send + Sync + 'static,
    F: Fn(A::Token, B::Token, C::Token) -> U + Send + Sync + 'static,
    U: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let (a, rest) = first.parse(input)?;
        let (b, rest) = second.parse(rest)?;
        let (c, rest) = third.parse(rest)?;
        Some((combine(a, b, c), rest))
    })
}
