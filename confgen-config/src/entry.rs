use confgen_core::{Kind, to_identifier};
use figment::value::{Dict, Value};

use crate::infer::infer_kind;

/// Field name under which the TOML decoder wraps a datetime value.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

/// A flattened configuration key with the kind of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    key: String,
    kind: Option<Kind>,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, kind: Option<Kind>) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Dotted path of this entry (e.g., "db.host")
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Kind of the value, `None` when the value is null.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Identifier generated for this entry (e.g., "DB_HOST")
    pub fn identifier(&self) -> String {
        to_identifier(&self.key)
    }
}

/// Flatten a decoded root map into dotted-path entries.
///
/// Non-empty maps are descended into; every other value, including an empty
/// map, becomes a leaf. A TOML datetime is a string leaf. Entries follow the
/// map's key order.
pub(crate) fn flatten(root: &Dict) -> Vec<ConfigEntry> {
    let mut entries = Vec::new();
    flatten_into(None, root, &mut entries);
    entries
}

fn flatten_into(prefix: Option<&str>, dict: &Dict, out: &mut Vec<ConfigEntry>) {
    for (key, value) in dict {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };

        let kind = match value {
            Value::Dict(_, nested) if is_toml_datetime(nested) => Some(Kind::String),
            Value::Dict(_, nested) if !nested.is_empty() => {
                flatten_into(Some(&path), nested, out);
                continue;
            }
            _ => infer_kind(value),
        };

        match kind {
            Some(kind) => tracing::trace!(key = %path, %kind, "flattened entry"),
            None => tracing::trace!(key = %path, "flattened null entry"),
        }
        out.push(ConfigEntry::new(path, kind));
    }
}

fn is_toml_datetime(dict: &Dict) -> bool {
    dict.len() == 1 && dict.contains_key(TOML_DATETIME_FIELD)
}
