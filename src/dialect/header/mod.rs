//! Reads dialect headers: the force-include headers written in preprocessor
//! syntax which describe a vendor dialect.
//!
//! Each `#define` becomes a rule whose kind follows from its shape, `#undef`
//! retracts a host macro, `typedef` declarations become type aliases, and
//! function declarations become prototype stubs.  Conditional directives
//! are skipped, so every definition in the header is read regardless of
//! which branch it sits in.

use log::info;

use crate::diagnostics::TracingConfig;

use super::{DialectError, Origin, ProfileBuilder, Source};

mod error;
mod parser;
mod tests;

pub use error::HeaderError;
pub use parser::{parse_header, HeaderItem, HeaderResult};

/// Reads the header in `source` and adds its definitions to `builder`.
pub fn load_header(
    builder: &mut ProfileBuilder,
    source: &Source,
    tracing: TracingConfig,
) -> Result<(), DialectError> {
    let items = parse_header(source, tracing).map_err(|error| DialectError::Header {
        source: source.name().into(),
        error,
    })?;

    let mut rules = 0;
    for item in items {
        match item {
            HeaderItem::Rule { rule, line } => {
                builder.add(rule, Origin::new(source.name(), line))?;
                rules += 1;
            }
            HeaderItem::Undefine { name, .. } => builder.undefine(&name),
        }
    }

    info!(
        "Loaded {} definitions from {} into {}",
        rules,
        source.name(),
        builder.id()
    );
    Ok(())
}
