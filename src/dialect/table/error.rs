use crate::dialect::ProfileError;

/// Errors raised while reading or writing a table file
#[derive(Debug)]
pub enum TableError {
    Io(String, std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),

    /// The file extension names no table format
    UnknownFormat(String),

    /// A rule lacks a field which its kind requires
    MissingField {
        symbol: String,
        field: &'static str,
    },
    Profile(ProfileError),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TableError::*;
        match self {
            Io(path, e) => write!(f, "{}: {}", path, e),
            Yaml(e) => write!(f, "Invalid YAML table: {}", e),
            Json(e) => write!(f, "Invalid JSON table: {}", e),
            UnknownFormat(path) => write!(
                f,
                "{}: expected a table file ending in .yaml, .yml or .json",
                path
            ),
            MissingField { symbol, field } => {
                write!(f, "Rule for {} is missing its {} field", symbol, field)
            }
            Profile(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TableError {}

impl From<serde_yaml::Error> for TableError {
    fn from(e: serde_yaml::Error) -> Self {
        TableError::Yaml(e)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        TableError::Json(e)
    }
}

impl From<ProfileError> for TableError {
    fn from(e: ProfileError) -> Self {
        TableError::Profile(e)
    }
}
