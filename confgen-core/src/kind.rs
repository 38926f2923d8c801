//! Closed classification of decoded configuration values.

use std::fmt;

/// Kind of a decoded configuration value.
///
/// The set is closed: every value produced by the config loader falls into
/// exactly one of these variants, except null which has no kind. Only the
/// scalar kinds have a type that can be declared in generated code; see
/// [`TypeMapper`](crate::TypeMapper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
}

impl Kind {
    /// Get the kind name as shown in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
