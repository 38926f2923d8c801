//! Kind inference for decoded config values.

use confgen_core::Kind;
use figment::value::{Num, Value};

/// Classify a decoded value into its [`Kind`].
///
/// Returns `None` only for null values, which have no kind.
pub fn infer_kind(value: &Value) -> Option<Kind> {
    let kind = match value {
        Value::Bool(..) => Kind::Bool,
        Value::Num(_, num) => match num {
            Num::F32(_) | Num::F64(_) => Kind::Float,
            _ => Kind::Int,
        },
        Value::String(..) | Value::Char(..) => Kind::String,
        Value::Array(..) => Kind::List,
        Value::Dict(..) => Kind::Map,
        Value::Empty(..) => return None,
    };
    Some(kind)
}
