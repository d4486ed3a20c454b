use log::debug;

use crate::diagnostics::TracingConfig;
use crate::dialect::lexer::{spell, tokenize, Token};
use crate::dialect::{
    render_rule, DialectProfile, Located, Replacement, Source, Span, SymbolRewriteRule,
};

use super::RewriteError;

pub type RewriteResult<T> = Result<T, Located<RewriteError>>;

/// How many expansions may nest inside one another before rewriting gives up
pub const MAX_EXPANSION_DEPTH: usize = 32;

/// Directives whose first operand is a macro name rather than code
const NAME_DIRECTIVES: [&str; 4] = ["define", "undef", "ifdef", "ifndef"];

/// Keywords of standard C.  An elided call named after one of these only
/// removes the call form; the bare keyword is kept.
const C_KEYWORDS: [&str; 44] = [
    "_Alignas", "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary",
    "_Noreturn", "_Static_assert", "_Thread_local", "auto", "break", "case", "char", "const",
    "continue", "default", "do", "double", "else", "enum", "extern", "float", "for", "goto",
    "if", "inline", "int", "long", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// Applies every rule of a profile to translation units.
pub struct Rewriter<'p> {
    profile: &'p DialectProfile,
    tracing: TracingConfig,
}

impl<'p> Rewriter<'p> {
    pub fn new(profile: &'p DialectProfile, tracing: TracingConfig) -> Rewriter<'p> {
        Rewriter { profile, tracing }
    }

    pub fn profile(&self) -> &DialectProfile {
        self.profile
    }

    /// Returns the text of `source` with every symbol of the profile
    /// neutralized.  Declarations of the intrinsics that the unit uses are
    /// prepended to the result.
    pub fn rewrite(&self, source: &Source) -> RewriteResult<String> {
        let mut expander = Expander::new(Rules::Profile(self.profile), self.tracing);
        let text = expander.expand(source, 0)?;
        let stubs = expander.stubs()?;

        debug!(
            "{}: rewrote {} ({} bytes in, {} bytes out)",
            self.profile.id(),
            source.name(),
            source.len(),
            stubs.len() + text.len()
        );
        Ok(stubs + &text)
    }
}

/// Applies a single rule to `source`.
pub fn apply(rule: &SymbolRewriteRule, source: &Source) -> RewriteResult<String> {
    let mut expander = Expander::new(Rules::Single(rule), TracingConfig::Off);
    let text = expander.expand(source, 0)?;
    let stubs = expander.stubs()?;
    Ok(stubs + &text)
}

#[derive(Clone, Copy)]
enum Rules<'a> {
    Profile(&'a DialectProfile),
    Single(&'a SymbolRewriteRule),
}

impl<'a> Rules<'a> {
    fn get(&self, symbol: &str) -> Option<&'a SymbolRewriteRule> {
        match *self {
            Rules::Profile(profile) => profile.get(symbol),
            Rules::Single(rule) if rule.symbol_name() == symbol => Some(rule),
            Rules::Single(_) => None,
        }
    }
}

/// The argument list of a macro invocation
struct Call {
    args: Vec<Vec<Token>>,

    /// Index of the first token after the closing parenthesis
    end: usize,

    /// From the macro name through the closing parenthesis
    span: Span,
}

struct Expander<'a> {
    rules: Rules<'a>,

    /// Macros whose expansion is being rescanned
    hidden: Vec<&'a str>,

    /// Prototype stubs in the order they were first used
    referenced: Vec<&'a SymbolRewriteRule>,

    tracing: TracingConfig,
    line: u32,
}

impl<'a> Expander<'a> {
    fn new(rules: Rules<'a>, tracing: TracingConfig) -> Expander<'a> {
        Expander {
            rules,
            hidden: vec![],
            referenced: vec![],
            tracing,
            line: 1,
        }
    }

    fn line(&self) -> u32 {
        self.line
    }

    /// Rewrites `source`.  `depth` is 0 for a translation unit and counts
    /// nested expansions otherwise; directives are only recognized in a
    /// translation unit.
    fn expand(&mut self, source: &Source, depth: usize) -> RewriteResult<String> {
        let tokens = tokenize(source, self.tracing)?;
        let text = source.text();

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut index = 0;

        let mut line_start = true;
        let mut in_directive = false;
        let mut directive_name = false;
        let mut protect = false;

        while index < tokens.len() {
            let token = &tokens[index];
            index += 1;
            self.line = token.line;

            if token.is_newline() {
                line_start = true;
                in_directive = false;
                protect = false;
                continue;
            }

            if std::mem::replace(&mut line_start, false) && depth == 0 && token.is_punct("#") {
                in_directive = true;
                directive_name = true;
                continue;
            }

            let id = match token.id() {
                Some(id) => id,
                None => continue,
            };

            if in_directive {
                if directive_name {
                    directive_name = false;
                    protect = NAME_DIRECTIVES.contains(&id);
                    continue;
                }
                if protect {
                    protect = false;
                    continue;
                }
                if id == "defined" {
                    protect = true;
                    continue;
                }
            }

            let rule = match self.rules.get(id) {
                Some(rule) if !self.hidden.contains(&rule.symbol_name()) => rule,
                _ => continue,
            };
            crate::trace!(self, "{} at {}", rule, token.span);

            match rule.replacement() {
                Replacement::Nothing => elide(&mut out, text, &mut cursor, token.span),
                Replacement::Arguments(params) => {
                    let span = match self.call(rule, token, &tokens, index, in_directive)? {
                        Some(call) => {
                            index = call.end;
                            call.span
                        }
                        None if C_KEYWORDS.contains(&id) => continue,
                        // A single numeric argument may follow without
                        // parentheses: `interrupt 1`, `using 2`
                        None => match tokens.get(index) {
                            Some(operand) if params.len() == 1 && operand.is_number() => {
                                index += 1;
                                Span::cover(token.span, operand.span)
                            }
                            _ => token.span,
                        },
                    };
                    elide(&mut out, text, &mut cursor, span);
                }
                Replacement::Expression { params: None, body } => {
                    let (span, body) =
                        match self.trailing_call(rule, body, token, &tokens, index, in_directive)? {
                            Some(call) => {
                                let args: Vec<Token> = tokens[index..call.end]
                                    .iter()
                                    .filter(|t| !t.is_newline())
                                    .cloned()
                                    .collect();
                                index = call.end;
                                (call.span, format!("{}{}", body, spell(source, &args)))
                            }
                            None => (token.span, body.clone()),
                        };
                    let expansion = self.rescan(rule, &body, token, depth)?;
                    replace(&mut out, text, &mut cursor, span, &expansion);
                }
                Replacement::Expression {
                    params: Some(params),
                    body,
                } => {
                    // Without arguments the name is not an invocation
                    let call = match self.call(rule, token, &tokens, index, in_directive)? {
                        Some(call) => call,
                        None => continue,
                    };
                    index = call.end;
                    let expansion = self.invoke(rule, params, body, source, call.args, token, depth)?;
                    replace(&mut out, text, &mut cursor, call.span, &expansion);
                }
                Replacement::Prototype { .. } => {
                    if !self
                        .referenced
                        .iter()
                        .any(|r| r.symbol_name() == rule.symbol_name())
                    {
                        self.referenced.push(rule);
                    }
                }
                Replacement::Type(target) => {
                    let expansion = self.rescan(rule, target, token, depth)?;
                    replace(&mut out, text, &mut cursor, token.span, &expansion);
                }
            }
        }

        out.push_str(&text[cursor..]);
        Ok(out)
    }

    /// Renders the declarations of every referenced prototype, one per line.
    fn stubs(&mut self) -> RewriteResult<String> {
        let referenced = std::mem::take(&mut self.referenced);
        let mut text = String::new();

        for rule in referenced {
            let decl = Source::new(rule.symbol_name(), &render_rule(rule));
            text.push_str(&self.expand(&decl, 1)?);
            text.push('\n');
        }

        self.referenced.clear();
        Ok(text)
    }

    /// Reads the argument list which follows the macro name at `tokens[index - 1]`.
    /// Returns [`None`] if the name is not followed by `(`.
    fn call(
        &self,
        rule: &SymbolRewriteRule,
        name: &Token,
        tokens: &[Token],
        index: usize,
        in_directive: bool,
    ) -> RewriteResult<Option<Call>> {
        let mut open = index;
        while !in_directive && tokens.get(open).map_or(false, |t| t.is_newline()) {
            open += 1;
        }
        match tokens.get(open) {
            Some(t) if t.is_punct("(") => (),
            _ => return Ok(None),
        }

        let mut args: Vec<Vec<Token>> = vec![vec![]];
        let mut depth = 0;
        for (i, t) in tokens.iter().enumerate().skip(open + 1) {
            if t.is_newline() {
                if in_directive {
                    break;
                }
                continue;
            }

            if t.is_punct("(") {
                depth += 1;
            } else if t.is_punct(")") {
                if depth == 0 {
                    if args.len() == 1 && args[0].is_empty() {
                        args.clear();
                    }
                    return Ok(Some(Call {
                        args,
                        end: i + 1,
                        span: Span::cover(name.span, t.span),
                    }));
                }
                depth -= 1;
            } else if t.is_punct(",") && depth == 0 {
                args.push(vec![]);
                continue;
            }

            if let Some(arg) = args.last_mut() {
                arg.push(t.clone());
            }
        }

        err!(
            name.line,
            name.span,
            RewriteError::UnterminatedArguments(rule.symbol_name().into())
        )
    }

    /// A body which ends with the name of a function-like macro takes that
    /// macro's arguments from the text after the expansion, as in
    /// `__ALIGNOF__(x)` expanding through `__alignof__(x)`.
    fn trailing_call(
        &self,
        rule: &SymbolRewriteRule,
        body: &str,
        name: &Token,
        tokens: &[Token],
        index: usize,
        in_directive: bool,
    ) -> RewriteResult<Option<Call>> {
        let tail = body
            .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or_default();

        match self.rules.get(tail) {
            Some(callee)
                if is_function_like(callee)
                    && callee.symbol_name() != rule.symbol_name()
                    && !self.hidden.contains(&callee.symbol_name()) =>
            {
                self.call(callee, name, tokens, index, in_directive)
            }
            _ => Ok(None),
        }
    }

    /// Expands an invocation of a function-like macro.  Arguments are
    /// expanded before they are substituted into the body, then the result
    /// is rescanned.
    #[allow(clippy::too_many_arguments)]
    fn invoke(
        &mut self,
        rule: &'a SymbolRewriteRule,
        params: &[String],
        body: &str,
        source: &Source,
        mut args: Vec<Vec<Token>>,
        name: &Token,
        depth: usize,
    ) -> RewriteResult<String> {
        let variadic = params.last().map_or(false, |p| p == "...");
        let named = if variadic { params.len() - 1 } else { params.len() };

        // `F()` passes one empty argument to a macro of one parameter
        if args.is_empty() && named == 1 {
            args.push(vec![]);
        }

        let arity = if variadic {
            args.len() >= named
        } else {
            args.len() == named
        };
        if !arity {
            return err!(
                name.line,
                name.span,
                RewriteError::ArgumentCountMismatch {
                    symbol: rule.symbol_name().into(),
                    expected: named,
                    found: args.len(),
                }
            );
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in &args {
            let value = self.fragment(rule, &spell(source, arg), name, depth + 1)?;
            values.push(value);
        }

        let template = Source::new(rule.symbol_name(), body);
        let body_tokens = tokenize(&template, self.tracing)
            .map_err(|e| Located::new(name.line, name.span, RewriteError::Lexer(e.into_inner())))?;

        let mut text = String::with_capacity(body.len());
        let mut cursor = 0;
        for t in &body_tokens {
            let value = match t.id() {
                Some("__VA_ARGS__") if variadic => values[named..].join(", "),
                Some(id) => match params[..named].iter().position(|p| p == id) {
                    Some(i) => values[i].clone(),
                    None => continue,
                },
                None => continue,
            };
            text.push_str(&body[cursor..t.span.low()]);
            text.push_str(&value);
            cursor = t.span.high();
        }
        text.push_str(&body[cursor..]);

        self.hidden.push(rule.symbol_name());
        let expansion = self.fragment(rule, &text, name, depth + 1);
        self.hidden.pop();
        expansion
    }

    /// Rescans the replacement text of `rule` with `rule` hidden.
    fn rescan(
        &mut self,
        rule: &'a SymbolRewriteRule,
        text: &str,
        name: &Token,
        depth: usize,
    ) -> RewriteResult<String> {
        self.hidden.push(rule.symbol_name());
        let expansion = self.fragment(rule, text, name, depth + 1);
        self.hidden.pop();
        expansion
    }

    /// Rewrites text produced by expanding `rule` at `site`.  Errors are
    /// reported at the site.
    fn fragment(
        &mut self,
        rule: &SymbolRewriteRule,
        text: &str,
        site: &Token,
        depth: usize,
    ) -> RewriteResult<String> {
        if depth > MAX_EXPANSION_DEPTH {
            return err!(
                site.line,
                site.span,
                RewriteError::ExpansionTooDeep(rule.symbol_name().into())
            );
        }

        let line = self.line;
        let source = Source::new(rule.symbol_name(), text);
        let expansion = self
            .expand(&source, depth)
            .map_err(|e| Located::new(site.line, site.span, e.into_inner()));
        self.line = line;
        expansion
    }
}

fn is_function_like(rule: &SymbolRewriteRule) -> bool {
    matches!(
        rule.replacement(),
        Replacement::Arguments(_) | Replacement::Expression { params: Some(_), .. }
    )
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Removes the text in `span`.  The blanks after it go with it; if there
/// are none, the blanks before it on the same line go instead.
fn elide(out: &mut String, text: &str, cursor: &mut usize, span: Span) {
    out.push_str(&text[*cursor..span.low()]);

    let rest = &text[span.high()..];
    let trailing = rest.len() - rest.trim_start_matches(is_blank).len();
    if trailing > 0 {
        *cursor = span.high() + trailing;
    } else {
        let kept = out.trim_end_matches(is_blank).len();
        out.truncate(kept);
        *cursor = span.high();
    }
}

/// Replaces the text in `span` with `replacement`.  An empty replacement is
/// an elision.
fn replace(out: &mut String, text: &str, cursor: &mut usize, span: Span, replacement: &str) {
    if replacement.is_empty() {
        elide(out, text, cursor, span);
    } else {
        out.push_str(&text[*cursor..span.low()]);
        out.push_str(replacement);
        *cursor = span.high();
    }
}
