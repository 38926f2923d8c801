//! Go source regeneration for confgen.
//!
//! Parses a Go file into a [`GoSource`], locates declarations flagged by
//! marker comments with a [`MarkerScanner`], and rewrites them from a set of
//! config entries:
//!
//! - `// config vars` above a `var ( ... )` group regenerates the group as one
//!   variable per config key ([`VarBlockSynthesizer`]).
//! - `// <name> config func` above a function regenerates its body into a
//!   viper load-and-assign sequence ([`FuncBodySynthesizer`]).
//!
//! Everything outside the rewritten regions is reproduced byte for byte.

mod code_builder;
mod error;
mod func_body;
mod generator;
mod marker;
mod scanner;
mod syntax;
mod vars;

pub use code_builder::CodeBuilder;
pub use error::{Error, Result};
pub use func_body::{FuncBodySynthesizer, LoaderPath};
pub use generator::{GenerationSummary, Generator};
pub use marker::{FuncMarker, Marker, VarsMarker};
pub use scanner::{MarkerScanner, Target, TargetKind};
pub use syntax::{GoSource, Layout};
pub use vars::VarBlockSynthesizer;
