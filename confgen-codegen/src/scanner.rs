//! Locating marker-flagged declarations in a Go tree.

use std::ops::Range;

use tree_sitter::Node;

use crate::{
    marker::{FuncMarker, Marker, VarsMarker},
    syntax::{GoSource, Layout},
};

/// What a located target is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// A parenthesized `var` group carrying a vars marker.
    VarsBlock,
    /// A function or method carrying a func marker.
    ConfigFunc { name: String },
}

/// A region of the source owned by one of the synthesizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    /// Bytes between the opening and closing delimiter, replaced wholesale.
    pub inner: Range<usize>,
    /// Indentation and line ending around the declaration.
    pub layout: Layout,
    /// 1-based line of the declaration.
    pub line: usize,
}

/// Walks a Go tree and collects marker-flagged var groups and functions.
///
/// Scanning never edits the source. Nodes nested inside a matched target
/// are not visited, since the target's contents are about to be discarded.
pub struct MarkerScanner {
    vars: Box<dyn Marker>,
    func: Box<dyn Marker>,
}

impl MarkerScanner {
    /// Scanner using the `// config vars` and `// <word> config func` markers.
    pub fn new() -> Self {
        Self::with_markers(VarsMarker, FuncMarker)
    }

    pub fn with_markers(vars: impl Marker + 'static, func: impl Marker + 'static) -> Self {
        Self {
            vars: Box::new(vars),
            func: Box::new(func),
        }
    }

    /// Visit every node in pre-order and return the matched targets in
    /// source order.
    pub fn scan(&self, source: &GoSource) -> Vec<Target> {
        let mut targets = Vec::new();
        let mut cursor = source.root().walk();

        loop {
            let descend = self.visit(source, cursor.node(), &mut targets);
            if descend && cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return targets;
                }
            }
        }
    }

    /// Classify one node, returning whether its children should be visited.
    fn visit(&self, source: &GoSource, node: Node<'_>, targets: &mut Vec<Target>) -> bool {
        match node.kind() {
            "var_declaration" => {
                let Some(inner) = group_interior(node) else {
                    return true;
                };
                if !carries(source, node, self.vars.as_ref()) {
                    return true;
                }

                tracing::debug!(line = node.start_position().row + 1, "found vars block");
                targets.push(target(source, node, TargetKind::VarsBlock, inner));
                false
            }
            "function_declaration" | "method_declaration" => {
                let Some(inner) = node
                    .child_by_field_name("body")
                    .and_then(|body| delimited(body, "{", "}"))
                else {
                    return true;
                };
                if !carries(source, node, self.func.as_ref()) {
                    return true;
                }

                let name = node
                    .child_by_field_name("name")
                    .map(|name| source.node_text(name).to_string())
                    .unwrap_or_default();
                tracing::debug!(line = node.start_position().row + 1, %name, "found config func");
                targets.push(target(source, node, TargetKind::ConfigFunc { name }, inner));
                false
            }
            _ => true,
        }
    }
}

impl Default for MarkerScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn target(source: &GoSource, node: Node<'_>, kind: TargetKind, inner: Range<usize>) -> Target {
    Target {
        kind,
        inner,
        layout: source.layout_at(node.start_byte()),
        line: node.start_position().row + 1,
    }
}

fn carries(source: &GoSource, node: Node<'_>, marker: &dyn Marker) -> bool {
    source
        .leading_comments(node)
        .into_iter()
        .any(|comment| marker.matches(comment))
}

/// Interior of a `var ( ... )` group; `None` for the single-spec form.
fn group_interior(decl: Node<'_>) -> Option<Range<usize>> {
    delimited(decl, "(", ")").or_else(|| {
        let mut cursor = decl.walk();
        let list = decl
            .children(&mut cursor)
            .find(|child| child.kind() == "var_spec_list");
        list.and_then(|list| delimited(list, "(", ")"))
    })
}

/// Bytes between a node's direct `open` and `close` children, when both are
/// actually present in the source.
fn delimited(node: Node<'_>, open: &str, close: &str) -> Option<Range<usize>> {
    let mut start = None;
    let mut end = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_missing() {
            continue;
        }
        if child.kind() == open && start.is_none() {
            start = Some(child.end_byte());
        } else if child.kind() == close {
            end = Some(child.start_byte());
        }
    }

    match (start, end) {
        (Some(start), Some(end)) if start <= end => Some(start..end),
        _ => None,
    }
}
