pub use crate::ast::{NumExpr, Regex, Spanned};
pub use crate::cursor::{Cursor, Location};
pub use crate::errors::EvalError;
pub use crate::eval::Store;
pub use crate::parser::{lazy, sequence, sequence3, Parse, Parsed, Parser};

pub mod ast;
pub mod cursor;
pub mod errors;
pub mod eval;
pub mod expr;
pub mod parser;
pub mod primitives;
pub mod regex;
