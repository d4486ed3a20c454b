use crate::diagnostics::TracingConfig;
use crate::dialect::source::{Source, SourceChar, Span};

use super::tokens::{Lex, Token, PUNCTUATORS};
use super::{LexerError, LexerResult};

/// Prefixes which may precede a string or character literal
const ENCODING_PREFIXES: [&str; 4] = ["u8", "u", "U", "L"];

struct LexerBranch<'a, 'src> {
    lexer: &'a mut Lexer<'src>,
    index: usize,
}

impl<'a, 'src> LexerBranch<'a, 'src> {
    fn from(l: &'a mut Lexer<'src>) -> LexerBranch<'a, 'src> {
        LexerBranch {
            index: l.index,
            lexer: l,
        }
    }

    /// Merges this branch back into its source Lexer.  Merging has the effect
    /// of accepting the current branch as correct and moving the cursor of the
    /// source lexer to match the cursor of the branch.
    fn merge(mut self) -> Option<(String, Span)> {
        let cut = self.cut();
        if cut.is_some() {
            self.lexer.advance_to(self.index);
        }
        cut
    }

    /// Cuts the text from the source lexer's cursor up to the branch cursor.
    /// This will NOT update the source.  That must be done with `merge`.
    fn cut(&self) -> Option<(String, Span)> {
        let start = self.lexer.index;
        let stop = self.index;

        if start >= stop {
            None
        } else {
            let s: String = self.lexer.chars[start..stop]
                .iter()
                .map(|c| c.char())
                .collect();
            let low = self.lexer.chars[start].offset();
            let high = self.lexer.offset_at(stop);

            Some((s, Span::new(low, high)))
        }
    }

    /// Advances the cursor one character and returns the character that was
    /// pointed to by the cursor before the advance.  Returns None if the cursor
    /// was already at the end of the stream.
    fn next(&mut self) -> Option<SourceChar> {
        let c = self.peek()?;
        self.index += 1;
        Some(c)
    }

    /// Advances the cursor one character, if the next character matches the given
    /// test character.
    fn next_if(&mut self, t: char) -> bool {
        if self.peek_if(t) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Will advance the cursor if the stream after the cursor starts with the
    /// given test string.  If the remaining stream does not start with the
    /// test string then the cursor is not advanced.
    fn next_if_word(&mut self, t: &str) -> bool {
        if self.peek_ifn(t) {
            self.index += t.chars().count();
            true
        } else {
            false
        }
    }

    fn next_if_one_of<'s>(&mut self, words: &[&'s str]) -> Option<&'s str> {
        for w in words {
            if self.next_if_word(w) {
                return Some(w);
            }
        }

        None
    }

    /// Returns the character pointed at by the cursor which is the next
    /// character in the stream.
    fn peek(&self) -> Option<SourceChar> {
        self.lexer.chars.get(self.index).copied()
    }

    /// Returns the character `n` places past the cursor.
    fn peek_at(&self, n: usize) -> Option<SourceChar> {
        self.lexer.chars.get(self.index + n).copied()
    }

    fn peek_if(&self, t: char) -> bool {
        self.peek().map_or(false, |c| c == t)
    }

    /// Checks if the character stream from the current cursor starts with
    /// the given test string, without advancing the cursor.
    fn peek_ifn(&self, t: &str) -> bool {
        let mut i = self.index;
        for tc in t.chars() {
            match self.lexer.chars.get(i) {
                Some(c) if *c == tc => i += 1,
                _ => return false,
            }
        }
        true
    }
}

/// Converts a [`Source`] into C tokens.
pub struct Lexer<'src> {
    source: &'src Source,
    chars: Vec<SourceChar>,
    index: usize,

    /// The line that the cursor is on
    line: u32,

    tracing: TracingConfig,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src Source, tracing: TracingConfig) -> Lexer<'src> {
        Lexer {
            source,
            chars: source.chars(),
            index: 0,
            line: 1,
            tracing,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Converts the source text to a vector of tokens.  Tokenizing stops at the
    /// first error, which is the last element of the result.
    pub fn tokenize(&mut self) -> Vec<LexerResult<Token>> {
        let mut tokens = vec![];

        while self.index < self.chars.len() {
            // Comments and whitespace separate tokens but are not tokens
            if let Err(err) = self.consume_trivia() {
                tokens.push(Err(err));
                break;
            }

            if self.index >= self.chars.len() {
                break;
            }

            // Record the current index position, so that we can see if the lexer
            // has advanced
            let prev_index = self.index;

            match self.next_token() {
                Ok(Some(t)) => {
                    crate::trace!(self, "{}", t.sym);
                    tokens.push(Ok(t))
                }
                Ok(None) => (),
                Err(err) => {
                    tokens.push(Err(err));
                    break;
                }
            }

            // Can no longer consume the input text
            if prev_index == self.index {
                tokens.push(err!(
                    self.line,
                    self.current_char_span(),
                    LexerError::Locked(self.current_char().map(|c| c.char()))
                ));
                break;
            }
        }

        tokens
    }

    /// Attempt to parse the token which immediately follows from where the lexer
    /// cursor is currently pointing.
    fn next_token(&mut self) -> LexerResult<Option<Token>> {
        let line = self.line;
        self.consume_newline()
            .transpose()
            .or_else(|| self.consume_literal().transpose())
            .or_else(|| self.consume_number().transpose())
            .or_else(|| self.consume_identifier().transpose())
            .or_else(|| self.consume_punctuator().transpose())
            .transpose()
            .map(|ok| ok.map(|(sym, span)| Token::new(sym, span, line)))
    }

    /// Skips blanks, escaped line breaks, and comments.
    fn consume_trivia(&mut self) -> LexerResult<()> {
        loop {
            let start = self.index;
            self.consume_whitespace();
            self.consume_line_comment();
            self.consume_block_comment()?;

            if start == self.index {
                return Ok(());
            }
        }
    }

    fn consume_whitespace(&mut self) {
        let mut branch = LexerBranch::from(self);
        loop {
            if branch.peek().map_or(false, |c| c.is_blank()) {
                branch.next();
            } else if !(branch.next_if_word("\\\n") || branch.next_if_word("\\\r\n")) {
                break;
            }
        }
        branch.merge();
    }

    fn consume_line_comment(&mut self) {
        let mut branch = LexerBranch::from(self);
        if branch.next_if_word("//") {
            // The line break belongs to the token stream
            while branch.peek().map_or(false, |c| c != '\n') {
                branch.next();
            }

            branch.merge();
            crate::trace!(self, "Line Comment");
        }
    }

    fn consume_block_comment(&mut self) -> LexerResult<()> {
        let line = self.line;
        let span = Span::new(self.offset_at(self.index), self.source.len());
        let mut branch = LexerBranch::from(self);
        if branch.next_if_word("/*") {
            while !branch.next_if_word("*/") {
                if branch.next().is_none() {
                    return err!(line, span, LexerError::UnterminatedComment);
                }
            }

            branch.merge();
            crate::trace!(self, "Block Comment");
        }

        Ok(())
    }

    fn consume_newline(&mut self) -> LexerResult<Option<(Lex, Span)>> {
        let mut branch = LexerBranch::from(self);
        if branch.next_if('\n') {
            Ok(branch.merge().map(|(_, span)| (Lex::Newline, span)))
        } else {
            Ok(None)
        }
    }

    /// String and character literals, with an optional encoding prefix.
    fn consume_literal(&mut self) -> LexerResult<Option<(Lex, Span)>> {
        let line = self.line;
        let low = self.offset_at(self.index);
        let end = self.source.len();
        let mut branch = LexerBranch::from(self);
        branch.next_if_one_of(&ENCODING_PREFIXES);

        let (quote, unterminated) = if branch.next_if('"') {
            ('"', LexerError::UnterminatedString)
        } else if branch.next_if('\'') {
            ('\'', LexerError::UnterminatedChar)
        } else {
            return Ok(None);
        };

        loop {
            match branch.next() {
                Some(c) if c == quote => break,
                Some(c) if c == '\\' => {
                    // Escaped characters, including escaped line breaks, are
                    // kept as they are
                    if branch.next().is_none() {
                        return err!(line, Span::new(low, end), unterminated);
                    }
                }
                Some(c) if c == '\n' => {
                    return err!(line, Span::new(low, c.offset()), unterminated);
                }
                Some(_) => (),
                None => return err!(line, Span::new(low, end), unterminated),
            }
        }

        Ok(branch.merge().map(|(text, span)| {
            if quote == '"' {
                (Lex::StringLiteral(text), span)
            } else {
                (Lex::CharLiteral(text), span)
            }
        }))
    }

    /// Preprocessing numbers: a digit, or a `.` followed by a digit, then any
    /// run of identifier characters, dots, and signed exponents.
    fn consume_number(&mut self) -> LexerResult<Option<(Lex, Span)>> {
        let mut branch = LexerBranch::from(self);

        let starts_number = match branch.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some(c) if c == '.' => branch.peek_at(1).map_or(false, |d| d.is_ascii_digit()),
            _ => false,
        };
        if !starts_number {
            return Ok(None);
        }

        while let Some(c) = branch.next() {
            let signed_exponent = "eEpP".contains(c.char())
                && branch.peek().map_or(false, |s| s == '+' || s == '-');
            if signed_exponent {
                branch.next();
            }

            match branch.peek() {
                Some(n) if n.is_alphanumeric() || n == '_' || n == '.' => (),
                _ => break,
            }
        }

        Ok(branch.merge().map(|(n, span)| (Lex::Number(n), span)))
    }

    /// Identifiers may contain `$`, as armclang, GCC and IAR allow.
    fn consume_identifier(&mut self) -> LexerResult<Option<(Lex, Span)>> {
        let mut branch = LexerBranch::from(self);
        if branch
            .peek()
            .map_or(false, |c| c.is_alphabetic() || c == '_' || c == '$')
        {
            while branch
                .peek()
                .map_or(false, |c| c.is_alphanumeric() || c == '_' || c == '$')
            {
                branch.next();
            }
        }

        Ok(branch.merge().map(|(id, span)| (Lex::Identifier(id), span)))
    }

    fn consume_punctuator(&mut self) -> LexerResult<Option<(Lex, Span)>> {
        let mut branch = LexerBranch::from(self);
        match branch.next_if_one_of(PUNCTUATORS) {
            Some(p) => Ok(branch.merge().map(|(_, span)| (Lex::Punct(p), span))),
            None => Ok(None),
        }
    }

    /// Moves the cursor forward to `index`, counting the lines passed over.
    fn advance_to(&mut self, index: usize) {
        let passed = self.chars[self.index..index]
            .iter()
            .filter(|c| **c == '\n')
            .count();
        self.line += passed as u32;
        self.index = index;
    }

    /// Returns the byte offset of the character at `index`, or the end of the
    /// source if `index` is past the last character.
    fn offset_at(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.source.len(), |c| c.offset())
    }

    /// Returns the character that the lexer cursor is currently pointing to.
    fn current_char(&self) -> Option<SourceChar> {
        self.chars.get(self.index).copied()
    }

    /// Returns the span covered by the character the lexer cursor is currently
    /// pointing at.  At the end of the input this is an empty span at the end.
    fn current_char_span(&self) -> Span {
        let low = self.offset_at(self.index);
        let high = self.offset_at(self.index + 1);
        Span::new(low, high)
    }
}

/// Tokenizes all of `source`, stopping at the first error.
pub fn tokenize(source: &Source, tracing: TracingConfig) -> LexerResult<Vec<Token>> {
    Lexer::new(source, tracing).tokenize().into_iter().collect()
}
