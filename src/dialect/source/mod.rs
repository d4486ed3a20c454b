//! This module abstracts out the text that the dialect tools read.  A
//! [`Source`] is either a dialect header, a translation unit handed over by the
//! host tool, or a fragment produced while expanding a macro body.  Every
//! character is paired with its byte offset within its [`Source`] so that
//! tokens can always be mapped back to the exact text they came from.

use std::fmt::{Display, Write};
use std::path::Path;

mod span;

pub use span::Span;

/// Represents a single char from a unit of source text along with the byte
/// offset of that character within the text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceChar {
    offset: usize,
    c: char,
}

impl SourceChar {
    pub fn new(offset: usize, c: char) -> SourceChar {
        SourceChar { c, offset }
    }

    pub fn char(&self) -> char {
        self.c
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The offset of the first byte after this character.
    pub fn end(&self) -> usize {
        self.offset + self.c.len_utf8()
    }

    pub fn is_alphabetic(&self) -> bool {
        self.c.is_alphabetic()
    }

    pub fn is_alphanumeric(&self) -> bool {
        self.c.is_alphanumeric()
    }

    pub fn is_ascii_digit(&self) -> bool {
        self.c.is_ascii_digit()
    }

    /// Whitespace which does not end a line.
    pub fn is_blank(&self) -> bool {
        self.c != '\n' && self.c.is_whitespace()
    }
}

impl PartialEq<char> for SourceChar {
    fn eq(&self, other: &char) -> bool {
        self.c == *other
    }
}

impl Display for SourceChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.char())
    }
}

/// A named unit of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Name used when reporting errors (usually the file path)
    name: String,

    text: String,
}

impl Source {
    pub fn new(name: &str, text: &str) -> Source {
        Source {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads the file at `path` into a new [`Source`] named after the path.
    pub fn from_file(path: &Path) -> Result<Source, std::io::Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(Source {
            name: format!("{}", path.display()),
            text,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text covered by `span`.  Returns [`None`] if the span does
    /// not fall within this source or does not sit on character boundaries.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.low()..span.high())
    }

    /// Splits the text into [`SourceChar`]s.
    pub fn chars(&self) -> Vec<SourceChar> {
        self.text
            .char_indices()
            .map(|(offset, c)| SourceChar::new(offset, c))
            .collect()
    }

    /// Returns the 1-based line number that contains `offset`.
    pub fn line_of(&self, offset: usize) -> u32 {
        let end = offset.min(self.text.len());
        self.text.as_bytes()[..end]
            .iter()
            .filter(|b| **b == b'\n')
            .count() as u32
            + 1
    }
}
