use confgen_config::ConfigEntry;
use confgen_core::Kind;
use thiserror::Error;

/// Result type for code generation
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load the Go grammar: {0}")]
    Language(String),

    #[error("{origin}:{line}:{column}: syntax error")]
    Parse {
        origin: String,
        line: usize,
        column: usize,
    },

    #[error("config key '{key}' is a {kind}, which has no Go type or getter")]
    Ambiguous { key: String, kind: Kind },

    #[error("config key '{key}' has a null value")]
    NullValue { key: String },
}

/// Kind of an entry that is about to be emitted.
pub(crate) fn emitted_kind(entry: &ConfigEntry) -> Result<Kind> {
    entry.kind().ok_or_else(|| Error::NullValue {
        key: entry.key().to_string(),
    })
}
