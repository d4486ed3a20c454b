use crate::dialect::LexerError;

/// Errors which can be encountered while rewriting a translation unit
#[derive(Clone, Debug, PartialEq)]
pub enum RewriteError {
    Lexer(LexerError),

    /// A call to the named macro has no closing parenthesis
    UnterminatedArguments(String),

    ArgumentCountMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    /// Rescanning the expansion of the named macro nested too deeply
    ExpansionTooDeep(String),
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RewriteError::*;
        match self {
            Lexer(e) => write!(f, "{}", e),
            UnterminatedArguments(symbol) => {
                write!(f, "Argument list of {} is missing its closing )", symbol)
            }
            ArgumentCountMismatch {
                symbol,
                expected,
                found,
            } => write!(
                f,
                "{} expects {} arguments but was given {}",
                symbol, expected, found
            ),
            ExpansionTooDeep(symbol) => write!(
                f,
                "Expansion of {} exceeds the maximum nesting depth",
                symbol
            ),
        }
    }
}

impl std::error::Error for RewriteError {}
