use std::collections::HashMap;

use log::{debug, warn};

use super::{CompilerFamily, DialectProfile, Origin, ProfileError, SymbolRewriteRule};

/// Collects the rules of a profile from any number of sources.
///
/// Every symbol may be defined once.  A second definition which is identical
/// to the first is dropped with a warning, as C allows for benign macro
/// redefinitions.  A second definition which differs from the first is an
/// error: the builder never lets a later source silently win.
#[derive(Debug)]
pub struct ProfileBuilder {
    id: String,
    family: CompilerFamily,
    target: String,
    description: String,
    undefines: Vec<String>,
    rules: Vec<SymbolRewriteRule>,
    origins: Vec<Origin>,
    index: HashMap<String, usize>,
}

impl ProfileBuilder {
    pub fn new(id: &str, family: CompilerFamily, target: &str) -> ProfileBuilder {
        ProfileBuilder {
            id: id.into(),
            family,
            target: target.into(),
            description: String::new(),
            undefines: vec![],
            rules: vec![],
            origins: vec![],
            index: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&mut self, text: &str) {
        self.description = text.into();
    }

    /// Adds a host macro that the prologue must `#undef`.
    pub fn undefine(&mut self, name: &str) {
        if !self.undefines.iter().any(|u| u == name) {
            self.undefines.push(name.into());
        }
    }

    /// Adds a rule, defined at `origin`, to the profile.
    pub fn add(&mut self, rule: SymbolRewriteRule, origin: Origin) -> Result<(), ProfileError> {
        if !is_identifier(rule.symbol_name()) {
            return Err(ProfileError::InvalidSymbol {
                profile: self.id.clone(),
                symbol: rule.symbol_name().into(),
                origin,
            });
        }

        match self.index.get(rule.symbol_name()) {
            Some(&i) if self.rules[i] == rule => {
                warn!(
                    "{}: {} redefines {} identically (first defined at {})",
                    self.id, origin, rule, self.origins[i]
                );
                Ok(())
            }
            Some(&i) => Err(ProfileError::DuplicateSymbolDefinition {
                profile: self.id.clone(),
                symbol: rule.symbol_name().into(),
                first: self.origins[i].clone(),
                second: origin,
            }),
            None => {
                debug!("{}: {} from {}", self.id, rule, origin);
                self.index.insert(rule.symbol_name().into(), self.rules.len());
                self.rules.push(rule);
                self.origins.push(origin);
                Ok(())
            }
        }
    }

    /// Adds every rule in `rules`, all defined at `origin`.
    pub fn extend<I>(&mut self, rules: I, origin: &Origin) -> Result<(), ProfileError>
    where
        I: IntoIterator<Item = SymbolRewriteRule>,
    {
        for rule in rules {
            self.add(rule, origin.clone())?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn build(self) -> DialectProfile {
        DialectProfile {
            id: self.id,
            family: self.family,
            target: self.target,
            description: self.description,
            undefines: self.undefines,
            rules: self.rules,
            index: self.index,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}
