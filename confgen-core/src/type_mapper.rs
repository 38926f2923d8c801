//! Type mapping between value kinds and language-specific types.

use crate::{kind::Kind, utils::capitalize_first};

/// Trait for mapping value kinds to language-specific type strings.
///
/// Implement this trait for each target language/loader pair. Composite
/// kinds have no mapping and yield `None`.
pub trait TypeMapper {
    /// Canonical declared type for a kind, usable verbatim in a declaration
    fn type_name(&self, kind: Kind) -> Option<&'static str>;

    /// Name of the loader accessor returning a value of this kind.
    ///
    /// Derived by capitalizing the first letter of the canonical type name.
    fn getter_name(&self, kind: Kind) -> Option<String> {
        self.type_name(kind)
            .map(|ty| format!("Get{}", capitalize_first(ty)))
    }
}

/// Go types as read back through a viper loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn type_name(&self, kind: Kind) -> Option<&'static str> {
        match kind {
            Kind::Bool => Some("bool"),
            Kind::Int => Some("int"),
            Kind::Float => Some("float64"),
            Kind::String => Some("string"),
            Kind::List | Kind::Map => None,
        }
    }
}
