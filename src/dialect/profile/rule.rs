use serde::{Deserialize, Serialize};

/// How a vendor symbol is neutralized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// The token is removed: `__irq`, `_at_`, `xdata`
    KeywordElision,

    /// The token and its argument list are removed: `__attribute__((packed))`
    ParameterizedElision,

    /// The token is replaced by an expression, which may take arguments
    ValueMacro,

    /// The symbol is an intrinsic; it is declared with an inert prototype
    PrototypeStub,

    /// The token is replaced by a standard type: `sfr16` to `volatile unsigned short`
    TypeAlias,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuleKind::KeywordElision => "keyword elision",
            RuleKind::ParameterizedElision => "parameterized elision",
            RuleKind::ValueMacro => "value macro",
            RuleKind::PrototypeStub => "prototype stub",
            RuleKind::TypeAlias => "type alias",
        };
        f.write_str(name)
    }
}

/// What replaces a symbol.  Every text field is kept in normal form: runs of
/// whitespace are collapsed to one space and the ends are trimmed, so that
/// two definitions which differ only in layout compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    Nothing,

    /// The parameter names that the elided macro was declared with
    Arguments(Vec<String>),

    /// A replacement body.  If `params` is set, the macro is function-like.
    Expression {
        params: Option<Vec<String>>,
        body: String,
    },

    /// Return type and parameter list of an intrinsic's declaration
    Prototype { returns: String, params: String },

    /// Target type text
    Type(String),
}

/// Maps one vendor symbol onto the standard C that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRewriteRule {
    symbol_name: String,
    replacement: Replacement,
}

impl SymbolRewriteRule {
    pub fn new(symbol_name: &str, replacement: Replacement) -> SymbolRewriteRule {
        let replacement = match replacement {
            Replacement::Nothing => Replacement::Nothing,
            Replacement::Arguments(params) => Replacement::Arguments(normalize_params(&params)),
            // An empty body elides, whatever the rule was declared as
            Replacement::Expression { params, body } => match (params, normalize(&body)) {
                (None, body) if body.is_empty() => Replacement::Nothing,
                (Some(params), body) if body.is_empty() => {
                    Replacement::Arguments(normalize_params(&params))
                }
                (params, body) => Replacement::Expression {
                    params: params.map(|p| normalize_params(&p)),
                    body,
                },
            },
            Replacement::Prototype { returns, params } => Replacement::Prototype {
                returns: normalize(&returns),
                params: normalize(&params),
            },
            Replacement::Type(target) => Replacement::Type(normalize(&target)),
        };

        SymbolRewriteRule {
            symbol_name: symbol_name.into(),
            replacement,
        }
    }

    /// `#define NAME`
    pub fn keyword(name: &str) -> SymbolRewriteRule {
        Self::new(name, Replacement::Nothing)
    }

    /// `#define NAME(params)`
    pub fn elide_call(name: &str, params: &[&str]) -> SymbolRewriteRule {
        Self::new(name, Replacement::Arguments(to_strings(params)))
    }

    /// `#define NAME body`
    pub fn value(name: &str, body: &str) -> SymbolRewriteRule {
        Self::new(
            name,
            Replacement::Expression {
                params: None,
                body: body.into(),
            },
        )
    }

    /// `#define NAME(params) body`
    pub fn function_macro(name: &str, params: &[&str], body: &str) -> SymbolRewriteRule {
        Self::new(
            name,
            Replacement::Expression {
                params: Some(to_strings(params)),
                body: body.into(),
            },
        )
    }

    /// `returns NAME(params);`
    pub fn prototype(name: &str, returns: &str, params: &str) -> SymbolRewriteRule {
        Self::new(
            name,
            Replacement::Prototype {
                returns: returns.into(),
                params: params.into(),
            },
        )
    }

    /// `typedef target NAME;`
    pub fn type_alias(name: &str, target: &str) -> SymbolRewriteRule {
        Self::new(name, Replacement::Type(target.into()))
    }

    pub fn symbol_name(&self) -> &str {
        &self.symbol_name
    }

    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    pub fn kind(&self) -> RuleKind {
        match &self.replacement {
            Replacement::Nothing => RuleKind::KeywordElision,
            Replacement::Arguments(_) => RuleKind::ParameterizedElision,
            Replacement::Expression { .. } => RuleKind::ValueMacro,
            Replacement::Prototype { .. } => RuleKind::PrototypeStub,
            Replacement::Type(_) => RuleKind::TypeAlias,
        }
    }

    /// True if uses of the symbol are removed from the text.
    pub fn is_elision(&self) -> bool {
        matches!(
            self.kind(),
            RuleKind::KeywordElision | RuleKind::ParameterizedElision
        )
    }
}

impl std::fmt::Display for SymbolRewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol_name, self.kind())
    }
}

/// Collapses whitespace runs to a single space and trims both ends.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_params(params: &[String]) -> Vec<String> {
    params.iter().map(|p| normalize(p)).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
