use std::fmt::Display;

use super::header::HeaderError;
use super::lexer::LexerError;
use super::profile::ProfileError;
use super::registry::RegistryError;
use super::rewrite::RewriteError;
use super::table::TableError;
use super::Span;

/// Wraps an error that was caused by a specific piece of source text.
///
/// This type captures the metadata which is common to every error raised
/// while reading text: the line the error occurred on and the exact span of
/// the offending text.  The `inner` error carries the stage specific detail.
#[derive(Clone, Debug, PartialEq)]
pub struct Located<IE> {
    line: u32,
    span: Span,
    inner: IE,
}

impl<IE> Located<IE> {
    pub fn new(line: u32, span: Span, inner: IE) -> Self {
        Located { line, span, inner }
    }

    pub fn inner(&self) -> &IE {
        &self.inner
    }

    pub fn into_inner(self) -> IE {
        self.inner
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Converts the inner error into another error type while keeping the
    /// location.
    pub fn map<F, OE>(self, f: F) -> Located<OE>
    where
        F: FnOnce(IE) -> OE,
    {
        Located {
            line: self.line,
            span: self.span,
            inner: f(self.inner),
        }
    }
}

impl<IE: Display> Display for Located<IE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}: {}", self.line, self.inner)
    }
}

impl<IE: Display + std::fmt::Debug> std::error::Error for Located<IE> {}

/// Every error which can surface from loading dialect tables or applying
/// them.  Used by callers which drive several stages at once.
#[derive(Debug)]
pub enum DialectError {
    Registry(RegistryError),
    Profile(ProfileError),
    Header {
        source: String,
        error: Located<HeaderError>,
    },
    Rewrite {
        source: String,
        error: Located<RewriteError>,
    },
    Table(TableError),
    Io(String, std::io::Error),
}

impl Display for DialectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialectError::Registry(e) => write!(f, "{}", e),
            DialectError::Profile(e) => write!(f, "{}", e),
            DialectError::Header { source, error } => {
                write!(f, "{}:{}: {}", source, error.line(), error.inner())
            }
            DialectError::Rewrite { source, error } => {
                write!(f, "{}:{}: {}", source, error.line(), error.inner())
            }
            DialectError::Table(e) => write!(f, "{}", e),
            DialectError::Io(path, e) => write!(f, "{}: {}", path, e),
        }
    }
}

impl std::error::Error for DialectError {}

impl From<RegistryError> for DialectError {
    fn from(e: RegistryError) -> Self {
        DialectError::Registry(e)
    }
}

impl From<ProfileError> for DialectError {
    fn from(e: ProfileError) -> Self {
        DialectError::Profile(e)
    }
}

impl From<TableError> for DialectError {
    fn from(e: TableError) -> Self {
        DialectError::Table(e)
    }
}

impl From<Located<LexerError>> for Located<HeaderError> {
    fn from(e: Located<LexerError>) -> Self {
        e.map(HeaderError::Lexer)
    }
}

impl From<Located<LexerError>> for Located<RewriteError> {
    fn from(e: Located<LexerError>) -> Self {
        e.map(RewriteError::Lexer)
    }
}
