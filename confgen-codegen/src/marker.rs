//! Marker comments that flag declarations for regeneration.

use std::sync::LazyLock;

use regex::Regex;

static VARS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//\s*config\s+vars\s*$").expect("valid vars marker pattern"));

static FUNC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^//\s*\w+\s+config\s+func\s*$").expect("valid func marker pattern")
});

/// A predicate over the text of one comment line.
///
/// The scanner only asks whether some leading comment of a node matches, so
/// any comment grammar can be plugged in without touching synthesis.
pub trait Marker {
    fn matches(&self, comment: &str) -> bool;
}

/// `// config vars`, flagging a `var ( ... )` group.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarsMarker;

impl Marker for VarsMarker {
    fn matches(&self, comment: &str) -> bool {
        VARS_PATTERN.is_match(comment)
    }
}

/// `// <word> config func`, flagging a function whose body is regenerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuncMarker;

impl Marker for FuncMarker {
    fn matches(&self, comment: &str) -> bool {
        FUNC_PATTERN.is_match(comment)
    }
}
