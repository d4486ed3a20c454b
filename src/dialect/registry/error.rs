/// Errors raised when looking up or registering profiles
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryError {
    /// No profile has exactly this id
    UnknownProfile(String),
    DuplicateProfile(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownProfile(id) => write!(f, "Unknown dialect profile: {}", id),
            RegistryError::DuplicateProfile(id) => {
                write!(f, "A profile with id {} is already registered", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
