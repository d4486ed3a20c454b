//! Serialized profiles.  A table file holds one profile in YAML or JSON and
//! loads through a [`ProfileBuilder`], so a table is checked for conflicting
//! definitions exactly as a dialect header is.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CompilerFamily, DialectProfile, Origin, ProfileBuilder, Replacement, RuleKind,
    SymbolRewriteRule,
};

mod error;
mod tests;

pub use error::TableError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableFormat {
    Yaml,
    Json,
}

impl TableFormat {
    /// Picks the format from the extension of `path`
    pub fn from_path(path: &Path) -> Option<TableFormat> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(TableFormat::Yaml),
            "json" => Some(TableFormat::Json),
            _ => None,
        }
    }
}

impl std::str::FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(TableFormat::Yaml),
            "json" => Ok(TableFormat::Json),
            _ => Err(format!("Unknown table format: {}", s)),
        }
    }
}

/// One rule as it is written in a table file.  Which of the optional fields
/// must be present depends on `kind`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct RuleEntry {
    symbol: String,
    kind: RuleKind,

    /// Macro parameter names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,

    /// Return type of a prototype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    returns: Option<String>,

    /// Parameter list of a prototype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signature: Option<String>,

    /// Target type of an alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl RuleEntry {
    fn from_rule(rule: &SymbolRewriteRule) -> RuleEntry {
        let mut entry = RuleEntry {
            symbol: rule.symbol_name().into(),
            kind: rule.kind(),
            params: None,
            body: None,
            returns: None,
            signature: None,
            target: None,
        };

        match rule.replacement() {
            Replacement::Nothing => (),
            Replacement::Arguments(params) => entry.params = Some(params.clone()),
            Replacement::Expression { params, body } => {
                entry.params = params.clone();
                entry.body = Some(body.clone());
            }
            Replacement::Prototype { returns, params } => {
                entry.returns = Some(returns.clone());
                entry.signature = Some(params.clone());
            }
            Replacement::Type(target) => entry.target = Some(target.clone()),
        }

        entry
    }

    fn into_rule(self) -> Result<SymbolRewriteRule, TableError> {
        let symbol = self.symbol;
        let missing = |field| TableError::MissingField {
            symbol: symbol.clone(),
            field,
        };

        let replacement = match self.kind {
            RuleKind::KeywordElision => Replacement::Nothing,
            RuleKind::ParameterizedElision => {
                Replacement::Arguments(self.params.unwrap_or_default())
            }
            RuleKind::ValueMacro => Replacement::Expression {
                params: self.params,
                body: self.body.ok_or_else(|| missing("body"))?,
            },
            RuleKind::PrototypeStub => Replacement::Prototype {
                returns: self.returns.ok_or_else(|| missing("returns"))?,
                params: self.signature.ok_or_else(|| missing("signature"))?,
            },
            RuleKind::TypeAlias => Replacement::Type(self.target.ok_or_else(|| missing("target"))?),
        };

        Ok(SymbolRewriteRule::new(&symbol, replacement))
    }
}

/// The serialized form of a [`DialectProfile`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Table {
    id: String,
    family: CompilerFamily,
    target: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    undefines: Vec<String>,

    #[serde(default)]
    rules: Vec<RuleEntry>,
}

impl Table {
    pub fn extract(profile: &DialectProfile) -> Table {
        Table {
            id: profile.id().into(),
            family: profile.family(),
            target: profile.target().into(),
            description: profile.description().into(),
            undefines: profile.undefines().to_vec(),
            rules: profile.rules().iter().map(RuleEntry::from_rule).collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds the profile this table describes.  `source` names the table
    /// in error messages.
    pub fn into_profile(self, source: &str) -> Result<DialectProfile, TableError> {
        let mut builder = ProfileBuilder::new(&self.id, self.family, &self.target);
        builder.description(&self.description);
        for name in &self.undefines {
            builder.undefine(name);
        }

        for (i, entry) in self.rules.into_iter().enumerate() {
            let origin = Origin::new(&format!("{} rule {}", source, i + 1), 0);
            builder.add(entry.into_rule()?, origin)?;
        }

        Ok(builder.build())
    }

    /// Loads a table from `reader`.
    pub fn read<R: std::io::Read>(reader: R, format: TableFormat) -> Result<Table, TableError> {
        let table: Table = match format {
            TableFormat::Yaml => serde_yaml::from_reader(reader)?,
            TableFormat::Json => serde_json::from_reader(reader)?,
        };
        Ok(table)
    }

    /// Writes the table to `writer`
    pub fn write<W: std::io::Write>(&self, writer: W, format: TableFormat) -> Result<(), TableError> {
        match format {
            TableFormat::Yaml => serde_yaml::to_writer(writer, self)?,
            TableFormat::Json => serde_json::to_writer_pretty(writer, self)?,
        }
        Ok(())
    }

    /// Loads the table file at `path`, in the format its extension names.
    pub fn load(path: &Path) -> Result<Table, TableError> {
        let name = format!("{}", path.display());
        let format = TableFormat::from_path(path).ok_or_else(|| TableError::UnknownFormat(name.clone()))?;
        let file = std::fs::File::open(path).map_err(|e| TableError::Io(name, e))?;
        Table::read(std::io::BufReader::new(file), format)
    }
}
