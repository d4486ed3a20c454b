//! The canonical dialect tables shipped with the crate, one per supported
//! toolchain.  Each table lists every vendor symbol exactly once.

use super::{CompilerFamily, DialectProfile, Origin, ProfileBuilder, ProfileError, SymbolRewriteRule};

pub mod armcc;
pub mod armclang;
pub mod iar_arm;
pub mod iar_stm8;
pub mod keil_c51;
pub mod sdcc;

/// Host compiler macros which every profile retracts
const HOST_MACROS: &[&str] = &["_WIN32", "_MSC_VER"];

/// One built in table.  The rules of a table are produced in a fixed order:
/// values, keywords, elided calls, function-like macros, type aliases, and
/// then prototypes, so that a rendered prologue declares types before the
/// intrinsics which use them.
pub struct BuiltinTable {
    pub id: &'static str,
    pub family: CompilerFamily,
    pub target: &'static str,
    pub description: &'static str,

    /// Retracted in addition to the common host macros
    pub undefines: &'static [&'static str],

    /// `(name, body)`
    pub values: &'static [(&'static str, &'static str)],

    pub keywords: &'static [&'static str],

    /// `(name, parameters)`
    pub elided_calls: &'static [(&'static str, &'static [&'static str])],

    /// `(name, parameters, body)`
    pub function_macros: &'static [(&'static str, &'static [&'static str], &'static str)],

    /// `(name, target type)`
    pub type_aliases: &'static [(&'static str, &'static str)],

    /// `(return type, name, parameters)`
    pub prototypes: &'static [(&'static str, &'static str, &'static str)],
}

impl BuiltinTable {
    pub fn rules(&self) -> Vec<SymbolRewriteRule> {
        let values = self
            .values
            .iter()
            .map(|(name, body)| SymbolRewriteRule::value(name, body));
        let keywords = self.keywords.iter().map(|name| SymbolRewriteRule::keyword(name));
        let elided = self
            .elided_calls
            .iter()
            .map(|(name, params)| SymbolRewriteRule::elide_call(name, params));
        let macros = self
            .function_macros
            .iter()
            .map(|(name, params, body)| SymbolRewriteRule::function_macro(name, params, body));
        let aliases = self
            .type_aliases
            .iter()
            .map(|(name, target)| SymbolRewriteRule::type_alias(name, target));
        let prototypes = self
            .prototypes
            .iter()
            .map(|(returns, name, params)| SymbolRewriteRule::prototype(name, returns, params));

        values
            .chain(keywords)
            .chain(elided)
            .chain(macros)
            .chain(aliases)
            .chain(prototypes)
            .collect()
    }

    pub fn profile(&self) -> Result<DialectProfile, ProfileError> {
        let mut builder = ProfileBuilder::new(self.id, self.family, self.target);
        builder.description(self.description);
        for name in HOST_MACROS.iter().chain(self.undefines) {
            builder.undefine(name);
        }
        builder.extend(self.rules(), &Origin::builtin(self.id))?;
        Ok(builder.build())
    }
}

/// All built in tables, in id order.
pub fn tables() -> [&'static BuiltinTable; 6] {
    [
        &armcc::TABLE,
        &armclang::TABLE,
        &iar_arm::TABLE,
        &iar_stm8::TABLE,
        &keil_c51::TABLE,
        &sdcc::TABLE,
    ]
}

/// Builds the profile of every built in table.
pub fn profiles() -> Result<Vec<DialectProfile>, ProfileError> {
    tables().iter().map(|t| t.profile()).collect()
}
