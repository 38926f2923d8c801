//! Loading a config file into a flattened entry set.

use std::path::Path;

use crate::{
    ConfigEntry, Error, Result,
    entry::flatten,
    format::Format,
};

/// The flattened contents of one configuration file.
///
/// Produced once per run and read-only afterwards. Entries are enumerated in
/// the decoder's sorted key order, which is stable across runs.
#[derive(Debug, Clone)]
pub struct ConfigSet {
    format: Format,
    entries: Vec<ConfigEntry>,
}

impl ConfigSet {
    /// Read and decode the config file at `path`.
    ///
    /// The format is selected by the file's final extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let set = Self::parse(&content, format, path)?;

        tracing::info!(
            path = %path.display(),
            format = %set.format,
            entries = set.entries.len(),
            "loaded config"
        );
        Ok(set)
    }

    /// Decode config content of a known format.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(content: &str, format: Format, path: impl AsRef<Path>) -> Result<Self> {
        let root = format
            .decode(content)
            .map_err(|e| Error::decode(path.as_ref(), e))?;

        Ok(Self {
            format,
            entries: flatten(&root),
        })
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Flattened entries in enumeration order
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
