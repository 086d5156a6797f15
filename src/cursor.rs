//! Input cursor for the combinator engine.
//!
//! A `Cursor` is a cheap, copyable view into the source text. Parsers never
//! mutate a cursor; consuming a character yields a *new* cursor, which is
//! what makes backtracking in ordered choice free.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based row/column position in the input.
///
/// # Examples
///
/// ```rust
/// use grantha::cursor::Location;
/// let loc = Location { row: 2, col: 7 };
/// assert_eq!(loc.to_string(), "2:7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A position in the input text: the unconsumed remainder plus the row and
/// column of the next character.
///
/// Equality compares the position (row and column) and the remaining text,
/// so two cursors over equal inputs that have consumed the same prefix
/// compare equal even if they came from different strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'s> {
    rest: &'s str,
    row: usize,
    col: usize,
}

impl<'s> Cursor<'s> {
    /// Creates a cursor at the start of `input`, row 1, column 1.
    pub fn new(input: &'s str) -> Self {
        Cursor {
            rest: input,
            row: 1,
            col: 1,
        }
    }

    /// Consumes one character, yielding it together with the cursor that
    /// follows it. Returns `None` at end of input.
    ///
    /// A newline moves to the start of the next row; any other character
    /// advances the column.
    pub fn advance(self) -> Option<(char, Cursor<'s>)> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        let next = if c == '\n' {
            Cursor {
                rest: chars.as_str(),
                row: self.row + 1,
                col: 1,
            }
        } else {
            Cursor {
                rest: chars.as_str(),
                row: self.row,
                col: self.col + 1,
            }
        };
        Some((c, next))
    }

    /// The row and column of the next character to be consumed.
    pub fn location(&self) -> Location {
        Location {
            row: self.row,
            col: self.col,
        }
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'s str {
        self.rest
    }

    pub fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_one_one() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.location(), Location { row: 1, col: 1 });
        assert_eq!(cursor.remaining(), "abc");
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance_yields_char_and_next_cursor() {
        let cursor = Cursor::new("ab");
        let (c, next) = cursor.advance().expect("input is not empty");
        assert_eq!(c, 'a');
        assert_eq!(next.remaining(), "b");
        assert_eq!(next.location(), Location { row: 1, col: 2 });
    }

    #[test]
    fn test_advance_at_end_returns_none() {
        assert!(Cursor::new("").advance().is_none());
    }

    #[test]
    fn test_newline_moves_to_next_row() {
        let cursor = Cursor::new("\nx");
        let (c, next) = cursor.advance().unwrap();
        assert_eq!(c, '\n');
        assert_eq!(next.location(), Location { row: 2, col: 1 });
        let (_, after) = next.advance().unwrap();
        assert_eq!(after.location(), Location { row: 2, col: 2 });
    }

    #[test]
    fn test_equality_compares_position_and_remainder() {
        let a = Cursor::new("xyz").advance().unwrap().1;
        let b = Cursor::new("xyz").advance().unwrap().1;
        assert_eq!(a, b);

        // Same remainder but a different position is a different cursor.
        let c = Cursor::new("yz");
        assert_ne!(a, c);
    }

    #[test]
    fn test_location_display() {
        let loc = Location { row: 3, col: 14 };
        assert_eq!(format!("{}", loc), "3:14");
    }
}
