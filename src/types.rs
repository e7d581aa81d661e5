/// Shared serializable output types.
///
/// `NavigationEntry` is the export view handed to renderers. The remaining
/// types are what the CLI writes to stdout, either as JSON or rendered as a
/// table. They are decoupled from the internal `MenuNode` / `FlatItem` types.
use serde::{Deserialize, Serialize};

use crate::menu::{FlatItem, MenuError};

/// A menu entry in nested navigation form.
///
/// Absent `url_name` / `icon` serialize as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display text.
    pub label: String,
    /// Route reference, or null.
    pub url_name: Option<String>,
    /// Icon reference, or null.
    pub icon: Option<String>,
    /// Nested children, in display order.
    pub children: Vec<NavigationEntry>,
}

/// A menu entry in flat (list) representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemOutput {
    /// Identifier of the entry.
    pub identifier: String,
    /// Display text.
    pub label: String,
    /// Identifier path from root (e.g., "catalogue::products").
    pub path: String,
    /// Route reference, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
    /// Icon reference, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Explicit position hint, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Whether the entry is still an unmerged placeholder.
    pub placeholder: bool,
    /// Number of direct children.
    pub children_count: usize,
    /// Depth from root (1 = top-level menu).
    pub depth: usize,
}

impl From<FlatItem> for MenuItemOutput {
    fn from(f: FlatItem) -> Self {
        Self {
            identifier: f.identifier,
            label: f.label,
            path: f.path,
            url_name: f.url_name,
            icon: f.icon,
            position: f.position,
            placeholder: f.placeholder,
            children_count: f.children_count,
            depth: f.depth,
        }
    }
}

/// A search result with match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultOutput {
    /// The matched entry's label.
    pub label: String,
    /// The matched entry's identifier path.
    pub path: String,
    /// Route reference, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
    /// Match score (higher = better). 0 for exact matches.
    pub score: u32,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional list of candidates (for ambiguous match errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `MenuError`.
    #[must_use]
    pub fn from_menu_error(err: &MenuError) -> Self {
        let candidates = match err {
            MenuError::AmbiguousMatch { candidates, .. } => Some(candidates.clone()),
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }
}
