//! Configuration loading for confgen.
//!
//! Decodes a TOML, JSON or YAML file (selected by extension) and flattens it
//! into an ordered list of [`ConfigEntry`] values keyed by dotted path.

mod entry;
mod error;
mod format;
mod infer;
mod loader;

pub use entry::ConfigEntry;
pub use error::{Error, Result};
pub use figment::value::Value;
pub use format::Format;
pub use infer::infer_kind;
pub use loader::ConfigSet;
