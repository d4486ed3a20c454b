/// Errors which can be encountered while tokenizing C source text
#[derive(Clone, PartialEq, Debug)]
pub enum LexerError {
    Locked(Option<char>),
    UnterminatedString,
    UnterminatedChar,
    UnterminatedComment,
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LexerError::*;
        match self {
            Locked(None) => write!(f, "Lexer locked on EOF"),
            Locked(Some(c)) => write!(f, "Lexer locked on {}", c),
            UnterminatedString => write!(f, "String literal is missing its closing quote"),
            UnterminatedChar => write!(f, "Character literal is missing its closing quote"),
            UnterminatedComment => write!(f, "Block comment is missing its closing */"),
        }
    }
}

impl std::error::Error for LexerError {}
