//! Config file formats, selected by file extension.

use std::{fmt, path::Path};

use figment::{
    Figment,
    providers::{Format as _, Json, Toml, Yaml},
    value::Dict,
};

use crate::{Error, Result};

/// A structured config format supported by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Select the format from a path's final extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            })
        })
    }

    /// Select the format from a bare extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Get the format name
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Decode content into its root map.
    pub(crate) fn decode(&self, content: &str) -> std::result::Result<Dict, figment::Error> {
        let figment = match self {
            Format::Toml => Figment::from(Toml::string(content)),
            Format::Json => Figment::from(Json::string(content)),
            Format::Yaml => Figment::from(Yaml::string(content)),
        };
        figment.extract()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
