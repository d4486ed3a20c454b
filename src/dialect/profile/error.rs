use super::Origin;

/// Errors raised while assembling a profile from its rule sources
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileError {
    /// The same symbol was given two different definitions
    DuplicateSymbolDefinition {
        profile: String,
        symbol: String,
        first: Origin,
        second: Origin,
    },
    InvalidSymbol {
        profile: String,
        symbol: String,
        origin: Origin,
    },
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::DuplicateSymbolDefinition {
                profile,
                symbol,
                first,
                second,
            } => write!(
                f,
                "{}: conflicting definitions of {} at {} and {}",
                profile, symbol, first, second
            ),
            ProfileError::InvalidSymbol {
                profile,
                symbol,
                origin,
            } => write!(
                f,
                "{}: '{}' at {} is not a valid identifier",
                profile, symbol, origin
            ),
        }
    }
}

impl std::error::Error for ProfileError {}
