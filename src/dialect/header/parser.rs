use crate::diagnostics::TracingConfig;
use crate::dialect::lexer::{spell, tokenize, Lex, Token};
use crate::dialect::{Located, Source, Span, SymbolRewriteRule};

use super::HeaderError;

pub type HeaderResult<T> = Result<T, Located<HeaderError>>;

/// Directives which carry no rule.  Conditional structure in a dialect
/// header is only include-guard boilerplate; the prologue regenerates it.
const SKIPPED_DIRECTIVES: [&str; 11] = [
    "if", "ifdef", "ifndef", "elif", "else", "endif", "error", "warning", "pragma", "include",
    "line",
];

/// One definition read from a dialect header
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderItem {
    Rule { rule: SymbolRewriteRule, line: u32 },
    Undefine { name: String, line: u32 },
}

impl HeaderItem {
    pub fn line(&self) -> u32 {
        match self {
            HeaderItem::Rule { line, .. } | HeaderItem::Undefine { line, .. } => *line,
        }
    }
}

/// Reads the definitions of a dialect header, in the order they appear.
pub fn parse_header(source: &Source, tracing: TracingConfig) -> HeaderResult<Vec<HeaderItem>> {
    let tokens = tokenize(source, tracing)?;
    let mut parser = HeaderParser::new(source, &tokens, tracing);
    parser.parse()
}

struct HeaderParser<'a> {
    source: &'a Source,
    tokens: &'a [Token],
    index: usize,
    tracing: TracingConfig,
}

impl<'a> HeaderParser<'a> {
    fn new(source: &'a Source, tokens: &'a [Token], tracing: TracingConfig) -> HeaderParser<'a> {
        HeaderParser {
            source,
            tokens,
            index: 0,
            tracing,
        }
    }

    /// The line of the token under the cursor
    fn line(&self) -> u32 {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn parse(&mut self) -> HeaderResult<Vec<HeaderItem>> {
        let mut items = vec![];

        loop {
            while self.next_if(|t| t.is_newline()).is_some() {}

            let item = match self.peek() {
                None => break,
                Some(t) if t.is_punct("#") => self.directive()?,
                Some(_) => Some(self.declaration()?),
            };

            if let Some(item) = item {
                crate::trace!(self, "{:?}", item);
                items.push(item);
            }
        }

        Ok(items)
    }

    fn directive(&mut self) -> HeaderResult<Option<HeaderItem>> {
        let hash = self.next_token();
        let line = hash.map_or(1, |t| t.line);

        let (name, span) = match self.peek() {
            // The null directive
            None => return Ok(None),
            Some(t) if t.is_newline() => return Ok(None),
            Some(t) => match t.id() {
                Some(id) => (id.to_string(), t.span),
                None => return err!(t.line, t.span, HeaderError::UnknownDirective(t.sym.to_string())),
            },
        };
        self.index += 1;

        match name.as_str() {
            "define" => self.define(line).map(Some),
            "undef" => {
                let (name, _) = self.macro_name()?;
                self.skip_line();
                Ok(Some(HeaderItem::Undefine { name, line }))
            }
            d if SKIPPED_DIRECTIVES.contains(&d) => {
                crate::trace!(self, "Skipping #{}", d);
                self.skip_line();
                Ok(None)
            }
            _ => err!(line, span, HeaderError::UnknownDirective(name)),
        }
    }

    /// `#define NAME`, `#define NAME body`, `#define NAME(params)`, or
    /// `#define NAME(params) body`
    fn define(&mut self, line: u32) -> HeaderResult<HeaderItem> {
        let (name, name_span) = self.macro_name()?;

        // A macro is function-like only if the parenthesis touches its name
        let function_like = self
            .peek()
            .map_or(false, |t| t.is_punct("(") && name_span.touches(t.span));
        let params = if function_like {
            self.index += 1;
            Some(self.parameters(line)?)
        } else {
            None
        };

        let body = self.rest_of_line();
        let body = spell(self.source, body);

        let rule = match params {
            None if body.is_empty() => SymbolRewriteRule::keyword(&name),
            None => SymbolRewriteRule::value(&name, &body),
            Some(params) => {
                let params: Vec<&str> = params.iter().map(|p| p.as_str()).collect();
                if body.is_empty() {
                    SymbolRewriteRule::elide_call(&name, &params)
                } else {
                    SymbolRewriteRule::function_macro(&name, &params, &body)
                }
            }
        };

        Ok(HeaderItem::Rule { rule, line })
    }

    /// Reads the parameter names of a function-like macro, up to and
    /// including the closing parenthesis.
    fn parameters(&mut self, line: u32) -> HeaderResult<Vec<String>> {
        let mut params = vec![];

        if self.next_if(|t| t.is_punct(")")).is_some() {
            return Ok(params);
        }

        loop {
            match self.next_token() {
                Some(t) if t.is_punct("...") => params.push("...".into()),
                Some(Token {
                    sym: Lex::Identifier(id),
                    ..
                }) => params.push(id.clone()),
                Some(t) if t.is_newline() => {
                    return err!(line, t.span, HeaderError::UnterminatedParameters)
                }
                Some(t) => {
                    return err!(t.line, t.span, HeaderError::ExpectedParameter(t.sym.to_string()))
                }
                None => return err!(line, self.end_span(), HeaderError::UnterminatedParameters),
            }

            match self.next_token() {
                Some(t) if t.is_punct(",") => (),
                Some(t) if t.is_punct(")") => return Ok(params),
                Some(t) if t.is_newline() => {
                    return err!(line, t.span, HeaderError::UnterminatedParameters)
                }
                Some(t) => {
                    return err!(t.line, t.span, HeaderError::ExpectedParameter(t.sym.to_string()))
                }
                None => return err!(line, self.end_span(), HeaderError::UnterminatedParameters),
            }
        }
    }

    /// `typedef TYPE NAME;` or `RETURNS NAME(PARAMS);`
    fn declaration(&mut self) -> HeaderResult<HeaderItem> {
        let line = self.line();
        let start = self.index;
        let mut depth = 0;

        let end = loop {
            match self.next_token() {
                None => return err!(line, self.span_from(start), HeaderError::ExpectedSemicolon),
                Some(t) if t.is_punct(";") && depth == 0 => break self.index - 1,
                Some(t) if t.is_punct("(") || t.is_punct("{") || t.is_punct("[") => depth += 1,
                Some(t) if t.is_punct(")") || t.is_punct("}") || t.is_punct("]") => depth -= 1,
                Some(_) => (),
            }
        };

        let decl: Vec<Token> = self.tokens[start..end]
            .iter()
            .filter(|t| !t.is_newline())
            .cloned()
            .collect();

        let rule = if decl.first().and_then(|t| t.id()) == Some("typedef") {
            self.typedef(&decl[1..])
        } else {
            self.prototype(&decl)
        };

        match rule {
            Some(rule) => Ok(HeaderItem::Rule { rule, line }),
            None => err!(
                line,
                self.span_from(start),
                HeaderError::UnsupportedDeclaration(spell(self.source, &decl))
            ),
        }
    }

    fn typedef(&self, decl: &[Token]) -> Option<SymbolRewriteRule> {
        let (name, target) = decl.split_last()?;
        let name = name.id()?;
        if target.is_empty() {
            return None;
        }

        Some(SymbolRewriteRule::type_alias(name, &spell(self.source, target)))
    }

    fn prototype(&self, decl: &[Token]) -> Option<SymbolRewriteRule> {
        let (close, rest) = decl.split_last()?;
        if !close.is_punct(")") {
            return None;
        }

        // Find the parenthesis which opens the parameter list
        let mut depth = 0;
        let mut open = None;
        for (i, t) in rest.iter().enumerate().rev() {
            if t.is_punct(")") {
                depth += 1;
            } else if t.is_punct("(") {
                if depth == 0 {
                    open = Some(i);
                    break;
                }
                depth -= 1;
            }
        }

        let open = open?;
        let (name_index, name) = open.checked_sub(1).map(|i| (i, &rest[i]))?;
        let name = name.id()?;
        let returns = &rest[..name_index];
        if returns.is_empty() {
            return None;
        }

        Some(SymbolRewriteRule::prototype(
            name,
            &spell(self.source, returns),
            &spell(self.source, &rest[open + 1..]),
        ))
    }

    fn macro_name(&mut self) -> HeaderResult<(String, Span)> {
        match self.peek() {
            Some(Token {
                sym: Lex::Identifier(id),
                span,
                ..
            }) => {
                let name = (id.clone(), *span);
                self.index += 1;
                Ok(name)
            }
            Some(t) => err!(t.line, t.span, HeaderError::ExpectedIdentifier(t.sym.to_string())),
            None => err!(
                self.line(),
                self.end_span(),
                HeaderError::ExpectedIdentifier("end of file".into())
            ),
        }
    }

    /// Consumes the tokens up to the end of the current line and returns them.
    /// The newline itself is left in the stream.
    fn rest_of_line(&mut self) -> &'a [Token] {
        let start = self.index;
        while self.peek().map_or(false, |t| !t.is_newline()) {
            self.index += 1;
        }
        &self.tokens[start..self.index]
    }

    fn skip_line(&mut self) {
        self.rest_of_line();
    }

    fn next_token(&mut self) -> Option<&'a Token> {
        let t = self.tokens.get(self.index)?;
        self.index += 1;
        Some(t)
    }

    fn next_if<F>(&mut self, test: F) -> Option<&'a Token>
    where
        F: Fn(&Token) -> bool,
    {
        match self.peek() {
            Some(t) if test(t) => self.next_token(),
            _ => None,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn end_span(&self) -> Span {
        Span::new(self.source.len(), self.source.len())
    }

    /// The span from the token at `start` to the cursor
    fn span_from(&self, start: usize) -> Span {
        let low = self.tokens.get(start).map_or(self.source.len(), |t| t.span.low());
        let high = self
            .index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(low, |t| t.span.high().max(low));
        Span::new(low, high)
    }
}
