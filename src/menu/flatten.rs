/// Flatten a menu tree into a list of `FlatItem`s with full path notation.
use std::borrow::Cow;

use super::node::MenuNode;

/// Separator between identifiers in a full entry path.
///
/// Identifiers derived from labels never contain `::`; explicit identifiers
/// that do are escaped as `\::` by [`escape_segment`].
pub const PATH_SEP: &str = "::";

/// Escape literal `::` in an identifier so it won't be confused with [`PATH_SEP`].
#[must_use]
pub fn escape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains(PATH_SEP) {
        Cow::Owned(segment.replace("::", "\\::"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Split a full path on the unescaped `::` separator.
///
/// `\::` inside a segment is preserved (not treated as a split point).
/// Call [`unescape_segment`] on each piece to get the raw identifier.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let bytes = path.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        if i + 2 <= len && &bytes[i..i + 2] == b"::" {
            if i > 0 && bytes[i - 1] == b'\\' {
                i += 2;
            } else {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
            }
        } else {
            i += 1;
        }
    }
    segments.push(&path[start..]);
    segments
}

/// Convert `\::` back to `::`.
#[must_use]
pub fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains("\\::") {
        Cow::Owned(segment.replace("\\::", "::"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// A flat representation of a menu entry (no children).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    /// Identifier of the entry.
    pub identifier: String,
    /// Display text.
    pub label: String,
    /// Identifier path from root (e.g., "catalogue::products").
    pub path: String,
    /// Route reference.
    pub url_name: Option<String>,
    /// Icon reference.
    pub icon: Option<String>,
    /// Explicit position hint.
    pub position: Option<usize>,
    /// Whether the entry is an unmerged placeholder.
    pub placeholder: bool,
    /// Depth in the menu hierarchy (top level = 1).
    pub depth: usize,
    /// Number of direct children (0 for leaf entries).
    pub children_count: usize,
}

/// Flatten a forest of `MenuNode`s into a `Vec<FlatItem>`.
///
/// Traversal is depth-first, pre-order (parent before children).
/// `max_depth` stops descending below that depth when set.
#[must_use]
pub fn flatten(nodes: &[MenuNode], max_depth: Option<usize>) -> Vec<FlatItem> {
    let mut result = Vec::new();
    for node in nodes {
        flatten_node(node, "", 1, max_depth, &mut result);
    }
    result
}

fn flatten_node(
    node: &MenuNode,
    parent_path: &str,
    depth: usize,
    max_depth: Option<usize>,
    out: &mut Vec<FlatItem>,
) {
    let escaped = escape_segment(node.identifier());
    let path = if parent_path.is_empty() {
        escaped.into_owned()
    } else {
        format!("{parent_path}{PATH_SEP}{escaped}")
    };

    out.push(FlatItem {
        identifier: node.identifier().to_owned(),
        label: node.label().to_owned(),
        path: path.clone(),
        url_name: node.url_name().map(str::to_owned),
        icon: node.icon().map(str::to_owned),
        position: node.position(),
        placeholder: node.is_placeholder(),
        depth,
        children_count: node.children().len(),
    });

    if max_depth.is_none_or(|max| depth < max) {
        for child in node.children() {
            flatten_node(child, &path, depth + 1, max_depth, out);
        }
    }
}
