//! Core utilities and types for confgen.
//!
//! This crate provides the closed set of configuration value kinds, their
//! mapping onto Go types and loader getters, identifier helpers, and the
//! target file writer shared by the other confgen crates.

mod file;
mod kind;
mod type_mapper;
mod utils;

// File operations
pub use file::TargetFile;
// Fundamental types
pub use kind::Kind;
pub use type_mapper::{GoTypeMapper, TypeMapper};
// String utilities
pub use utils::{capitalize_first, to_identifier};
