use std::path::PathBuf;

use thiserror::Error;

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Failure to read a configuration file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format '{extension}' for '{path}' (expected toml, json, yaml or yml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to decode '{path}'")]
    Decode {
        path: PathBuf,
        #[source]
        source: figment::Error,
    },
}

impl Error {
    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a decode error for the given path
    pub fn decode(path: impl Into<PathBuf>, source: figment::Error) -> Box<Self> {
        Box::new(Error::Decode {
            path: path.into(),
            source,
        })
    }
}
