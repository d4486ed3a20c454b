use crate::dialect::{Source, Span};

/// Punctuators of C, longest first so that the lexer can take the first match.
pub const PUNCTUATORS: &[&str] = &[
    "...", "<<=", ">>=", "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "*=",
    "/=", "%=", "+=", "-=", "&=", "^=", "|=", "##", "[", "]", "(", ")", "{", "}", ".", "&", "*",
    "+", "-", "~", "!", "/", "%", "<", ">", "^", "|", "?", ":", ";", "=", ",", "#", "@", "\\",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Lex {
    Identifier(String),

    /// A preprocessing number: digits, letters, `.` and signed exponents,
    /// e.g. `0x80`, `6100100`, `1.0e-7F`, `9223372036854775807LL`
    Number(String),

    /// String literal, including its quotes and any encoding prefix
    StringLiteral(String),

    /// Character literal, including its quotes and any encoding prefix
    CharLiteral(String),

    Punct(&'static str),

    /// End of a line.  Directives are delimited by these.
    Newline,
}

impl Lex {
    pub fn get_id(&self) -> Option<&str> {
        match self {
            Lex::Identifier(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_punct(&self, p: &str) -> bool {
        match self {
            Lex::Punct(q) => *q == p,
            _ => false,
        }
    }

    pub fn is_newline(&self) -> bool {
        *self == Lex::Newline
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Lex::Number(_))
    }
}

impl std::fmt::Display for Lex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Lex::*;
        match self {
            Identifier(id) => f.write_fmt(format_args!("identifier {}", id)),
            Number(n) => f.write_fmt(format_args!("number {}", n)),
            StringLiteral(s) => f.write_fmt(format_args!("literal {}", s)),
            CharLiteral(c) => f.write_fmt(format_args!("character {}", c)),
            Punct(p) => f.write_str(p),
            Newline => f.write_str("end of line"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The value of the token
    pub sym: Lex,

    pub span: Span,

    /// The line the token starts on
    pub line: u32,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("L{}: {}", self.line, self.sym))
    }
}

impl Token {
    pub fn new(sym: Lex, span: Span, line: u32) -> Token {
        Token { sym, span, line }
    }

    pub fn is_punct(&self, p: &str) -> bool {
        self.sym.is_punct(p)
    }

    pub fn is_newline(&self) -> bool {
        self.sym.is_newline()
    }

    pub fn is_number(&self) -> bool {
        self.sym.is_number()
    }

    pub fn id(&self) -> Option<&str> {
        self.sym.get_id()
    }
}

/// Spells out `tokens` from the text of `source`.  Tokens that were separated
/// by whitespace, comments, or escaped line breaks are separated by a single
/// space; tokens that touched still touch.
pub fn spell(source: &Source, tokens: &[Token]) -> String {
    let mut text = String::new();
    let mut prev: Option<Span> = None;

    for token in tokens {
        if prev.map_or(false, |p| !p.touches(token.span)) {
            text.push(' ');
        }
        text.push_str(source.slice(token.span).unwrap_or_default());
        prev = Some(token.span);
    }

    text
}
