use crate::dialect::LexerError;

/// Errors which can be encountered while reading a dialect header
#[derive(Clone, Debug, PartialEq)]
pub enum HeaderError {
    Lexer(LexerError),
    UnknownDirective(String),
    ExpectedIdentifier(String),
    ExpectedParameter(String),
    UnterminatedParameters,
    ExpectedSemicolon,
    UnsupportedDeclaration(String),
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use HeaderError::*;
        match self {
            Lexer(e) => write!(f, "{}", e),
            UnknownDirective(d) => write!(f, "Unknown directive #{}", d),
            ExpectedIdentifier(found) => write!(f, "Expected a macro name but found {}", found),
            ExpectedParameter(found) => write!(f, "Expected a parameter name but found {}", found),
            UnterminatedParameters => write!(f, "Macro parameter list is missing its closing )"),
            ExpectedSemicolon => write!(f, "Expected ; at the end of the declaration"),
            UnsupportedDeclaration(text) => write!(
                f,
                "Declaration is neither a typedef nor a function prototype: {}",
                text
            ),
        }
    }
}

impl std::error::Error for HeaderError {}
