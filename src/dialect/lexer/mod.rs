//! Tokenizer for the subset of C that dialect headers and translation units
//! are written in.  Only the lexical shape matters here: numbers are kept as
//! text, literals keep their quotes, and newlines are tokens so that the
//! header reader can find where a directive ends.

use super::Located;

mod error;
mod lexer;
pub mod tokens;

pub use error::LexerError;
pub use lexer::{tokenize, Lexer};
pub use tokens::{spell, Lex, Token};

pub type LexerResult<T> = Result<T, Located<LexerError>>;
