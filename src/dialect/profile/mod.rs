//! A dialect profile: the rewrite rules for one compiler family and target.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

mod builder;
mod error;
mod rule;
mod tests;

pub use builder::ProfileBuilder;
pub use error::ProfileError;
pub use rule::{Replacement, RuleKind, SymbolRewriteRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompilerFamily {
    ArmClang,
    ArmCc,
    KeilC51,
    Sdcc,
    IarArm,
    IarStm8,
    Other,
}

impl CompilerFamily {
    pub fn name(&self) -> &'static str {
        match self {
            CompilerFamily::ArmClang => "arm-clang",
            CompilerFamily::ArmCc => "arm-cc",
            CompilerFamily::KeilC51 => "keil-c51",
            CompilerFamily::Sdcc => "sdcc",
            CompilerFamily::IarArm => "iar-arm",
            CompilerFamily::IarStm8 => "iar-stm8",
            CompilerFamily::Other => "other",
        }
    }
}

impl std::fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CompilerFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use CompilerFamily::*;
        [ArmClang, ArmCc, KeilC51, Sdcc, IarArm, IarStm8, Other]
            .iter()
            .find(|family| family.name() == s)
            .copied()
            .ok_or_else(|| format!("Unknown compiler family: {}", s))
    }
}

/// Where a rule was defined.  Used to report conflicting definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    source: String,

    /// 1-based line, or 0 if the source has no lines
    line: u32,
}

impl Origin {
    pub fn new(source: &str, line: u32) -> Origin {
        Origin {
            source: source.into(),
            line,
        }
    }

    /// The origin of rules from the built in table of `profile`
    pub fn builtin(profile: &str) -> Origin {
        Origin {
            source: format!("<builtin {}>", profile),
            line: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            f.write_str(&self.source)
        } else {
            write!(f, "{}:{}", self.source, self.line)
        }
    }
}

/// The complete, canonical rule table for one compiler and target.  Profiles
/// are built once with a [`ProfileBuilder`] and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectProfile {
    id: String,
    family: CompilerFamily,
    target: String,
    description: String,

    /// Host compiler macros which must be retracted before the rules apply
    undefines: Vec<String>,

    /// Rules in the order they were authored
    rules: Vec<SymbolRewriteRule>,

    index: HashMap<String, usize>,
}

impl DialectProfile {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn family(&self) -> CompilerFamily {
        self.family
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn undefines(&self) -> &[String] {
        &self.undefines
    }

    pub fn rules(&self) -> &[SymbolRewriteRule] {
        &self.rules
    }

    /// Returns the rule for `symbol`, if this profile has one.
    pub fn get(&self, symbol: &str) -> Option<&SymbolRewriteRule> {
        self.index.get(symbol).map(|i| &self.rules[*i])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.symbol_name())
    }
}

impl std::fmt::Display for DialectProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.family, self.target)
    }
}
