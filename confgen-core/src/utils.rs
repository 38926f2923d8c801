//! Shared string helpers for code generation.

/// Convert a dotted config key into a generated identifier (e.g., "db.host" -> "DB_HOST").
///
/// No further sanitizing is applied, so distinct keys may collide.
pub fn to_identifier(key: &str) -> String {
    key.to_uppercase().replace('.', "_")
}

/// Uppercase only the first character (e.g., "float64" -> "Float64")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
