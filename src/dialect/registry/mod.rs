//! The set of dialect profiles a host can choose from.  A registry is built
//! once and then only read, so a single instance can be shared by reference
//! between any number of analysis sessions.

use std::collections::BTreeMap;

use log::info;

use crate::diagnostics::TracingConfig;

use super::{builtin, render_prologue, DialectError, DialectProfile, Rewriter, Source};

mod error;
mod tests;

pub use error::RegistryError;

/// Maps profile ids onto their profiles.  Ids are matched exactly.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    profiles: BTreeMap<String, DialectProfile>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            profiles: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every built in profile.
    pub fn builtin() -> Result<Registry, DialectError> {
        let mut registry = Registry::new();
        for profile in builtin::profiles()? {
            registry.register(profile)?;
        }
        info!("Loaded {} built in profiles", registry.len());
        Ok(registry)
    }

    /// Adds `profile`.  A registered profile is never replaced.
    pub fn register(&mut self, profile: DialectProfile) -> Result<(), RegistryError> {
        if self.profiles.contains_key(profile.id()) {
            return Err(RegistryError::DuplicateProfile(profile.id().into()));
        }

        info!("Registered {} with {} rules", profile, profile.len());
        self.profiles.insert(profile.id().into(), profile);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&DialectProfile, RegistryError> {
        self.profiles
            .get(id)
            .ok_or_else(|| RegistryError::UnknownProfile(id.into()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }

    /// Renders the force include header of the profile `id`.
    pub fn prologue(&self, id: &str) -> Result<String, RegistryError> {
        self.lookup(id).map(render_prologue)
    }

    pub fn rewriter(&self, id: &str, tracing: TracingConfig) -> Result<Rewriter<'_>, RegistryError> {
        self.lookup(id).map(|profile| Rewriter::new(profile, tracing))
    }

    /// Rewrites `source` with the rules of the profile `id`.
    pub fn rewrite(&self, id: &str, source: &Source) -> Result<String, DialectError> {
        self.rewriter(id, TracingConfig::Off)?
            .rewrite(source)
            .map_err(|error| DialectError::Rewrite {
                source: source.name().into(),
                error,
            })
    }

    /// Every registered profile, in id order
    pub fn profiles(&self) -> impl Iterator<Item = &DialectProfile> {
        self.profiles.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|id| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
