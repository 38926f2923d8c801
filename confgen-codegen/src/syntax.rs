//! Go source files as a parsed tree plus pending text edits.

use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use crate::{Error, Result};

/// A parsed Go source file.
///
/// The tree is built once from the original text. Rewrites are recorded as
/// byte-range replacements and only applied by [`GoSource::print`], so every
/// byte outside a replaced range is reproduced exactly as it was read.
pub struct GoSource {
    origin: String,
    text: String,
    tree: Tree,
    edits: Vec<Edit>,
}

/// Whitespace conventions of the code around a replaced region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Leading whitespace of the line the enclosing declaration starts on.
    pub indent: String,
    /// Line ending used by the source, `\n` or `\r\n`.
    pub newline: &'static str,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent: String::new(),
            newline: "\n",
        }
    }
}

#[derive(Debug, Clone)]
struct Edit {
    range: Range<usize>,
    text: String,
}

impl GoSource {
    /// Parse Go source text.
    ///
    /// `origin` names the source in error messages (usually its path). Any
    /// syntax error in the file is fatal.
    pub fn parse(text: impl Into<String>, origin: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let origin = origin.into();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| Error::Language(e.to_string()))?;

        let tree = parser.parse(&text, None).ok_or_else(|| Error::Parse {
            origin: origin.clone(),
            line: 1,
            column: 1,
        })?;

        if let Some(node) = first_error(tree.root_node()) {
            let position = node.start_position();
            return Err(Error::Parse {
                origin,
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(Self {
            origin,
            text,
            tree,
            edits: Vec::new(),
        })
    }

    /// Name of the source used in error messages
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The original, unedited text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root node of the parsed tree
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Original text covered by a node
    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.byte_range()]
    }

    /// Leading whitespace of the line containing `byte`.
    pub fn line_indent(&self, byte: usize) -> &str {
        let line_start = self.text[..byte].rfind('\n').map_or(0, |i| i + 1);
        let line = &self.text[line_start..];
        let width = line
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(line.len());
        &line[..width]
    }

    /// Line ending of the source, taken from its first line break.
    pub fn newline(&self) -> &'static str {
        match self.text.find('\n') {
            Some(i) if self.text[..i].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }

    /// Layout of the line containing `byte`.
    pub fn layout_at(&self, byte: usize) -> Layout {
        Layout {
            indent: self.line_indent(byte).to_string(),
            newline: self.newline(),
        }
    }

    /// Comment lines attached in front of a node.
    ///
    /// These are the comments between the node and the previous non-comment
    /// sibling, excluding a comment that trails that sibling on its own line.
    /// A node opening a statement list inherits the comments in front of the
    /// list. Returned in source order.
    pub fn leading_comments(&self, node: Node<'_>) -> Vec<&str> {
        let mut comments = Vec::new();
        let mut boundary_row = None;
        let mut anchor = node;

        'siblings: loop {
            let mut current = anchor.prev_sibling();
            while let Some(sibling) = current {
                match sibling.kind() {
                    "comment" => comments.push(sibling),
                    "\n" | ";" => {}
                    _ => {
                        boundary_row = Some(sibling.end_position().row);
                        break 'siblings;
                    }
                }
                current = sibling.prev_sibling();
            }

            match anchor.parent() {
                Some(parent)
                    if parent.kind() == "statement_list"
                        && parent.start_byte() == anchor.start_byte() =>
                {
                    anchor = parent;
                }
                _ => break,
            }
        }

        comments
            .into_iter()
            .rev()
            .filter(|comment| boundary_row.is_none_or(|row| comment.start_position().row > row))
            .map(|comment| self.node_text(comment))
            .collect()
    }

    /// Replace the original bytes in `range` with `text` when printing.
    ///
    /// Ranges refer to the original text and must not overlap.
    pub fn replace(&mut self, range: Range<usize>, text: impl Into<String>) {
        debug_assert!(range.start <= range.end && range.end <= self.text.len());
        self.edits.push(Edit {
            range,
            text: text.into(),
        });
    }

    /// Serialize the source with all replacements applied.
    pub fn print(&self) -> String {
        let mut edits: Vec<&Edit> = self.edits.iter().collect();
        edits.sort_by_key(|edit| edit.range.start);

        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for edit in edits {
            debug_assert!(edit.range.start >= cursor, "overlapping edits");
            out.push_str(&self.text[cursor..edit.range.start]);
            out.push_str(&edit.text);
            cursor = edit.range.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// Find the first error or missing node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    Some(node)
}
