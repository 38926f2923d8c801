//! Core operations.
//!
//! The business logic of a confgen run, separated from CLI argument parsing.

pub mod generate;

pub use generate::{GenerateOptions, generate};
