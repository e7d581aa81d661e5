/// Errors from the menu domain layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, merging, or loading menu trees.
#[derive(Debug, Error)]
pub enum MenuError {
    /// No direct child carries the requested identifier.
    #[error("No child menu with identifier '{identifier}'")]
    ChildNotFound {
        /// The identifier that was looked up.
        identifier: String,
    },

    /// Two menus with different identities cannot be merged.
    #[error("Cannot merge menu '{left}' with menu '{right}': identifiers differ")]
    MismatchedIdentifier {
        /// Identifier of the left-hand (base) menu.
        left: String,
        /// Identifier of the right-hand (overlay) menu.
        right: String,
    },

    /// No menu entry matched the query or path.
    #[error("No menu entry matches '{query}'")]
    ItemNotFound {
        /// The searched query or path.
        query: String,
    },

    /// Several menu entries matched; cannot auto-resolve.
    #[error("Ambiguous match for '{query}'. Candidates:\n  {}", candidates.join("\n  "))]
    AmbiguousMatch {
        /// The searched query.
        query: String,
        /// Full paths of all candidates that matched.
        candidates: Vec<String>,
    },

    /// A menu definition file could not be read.
    #[error("Cannot read menu definitions from '{}': {source}", path.display())]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A menu definition document is not valid JSON or has an unexpected shape.
    #[error("Invalid menu definition in '{source_name}': {source}")]
    Definition {
        /// Where the document came from (file path or caller-supplied name).
        source_name: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Exit code mapping for `MenuError` variants.
impl MenuError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ItemNotFound { .. } | Self::AmbiguousMatch { .. } | Self::ChildNotFound { .. } => 4,
            Self::Io { .. } | Self::Definition { .. } => 2,
            Self::MismatchedIdentifier { .. } => 1,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ChildNotFound { .. } => "child_not_found",
            Self::MismatchedIdentifier { .. } => "mismatched_identifier",
            Self::ItemNotFound { .. } => "item_not_found",
            Self::AmbiguousMatch { .. } => "ambiguous_match",
            Self::Io { .. } => "io_error",
            Self::Definition { .. } => "invalid_definition",
        }
    }
}
