/// Menu registry - collects top-level menus and overlays redefinitions.
///
/// Menus usually arrive from several sources: a default menu shipped with
/// the application, then plugin or site files that extend or redefine it.
/// Each registration whose identifier is already known is overlaid onto the
/// existing menu instead of being added twice.
use std::path::Path;

use tracing::{debug, info};

use super::definition::parse_definitions;
use super::errors::MenuError;
use super::node::{MenuNode, TieBreak};
use crate::types::NavigationEntry;

/// Identifier of the hidden node that holds the top-level menus.
const ROOT_IDENTIFIER: &str = "__root__";

/// Registry of all top-level menus.
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    /// Top-level menus are the children of this node, so they follow the
    /// same position and replacement rules as any submenu.
    root: MenuNode,
}

impl MenuRegistry {
    /// Create an empty registry with the default tie-break policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tie_break(TieBreak::default())
    }

    /// Create an empty registry whose top-level menus use `tie_break`.
    #[must_use]
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            root: MenuNode::placeholder(ROOT_IDENTIFIER).with_tie_break(tie_break),
        }
    }

    /// Register a top-level menu.
    ///
    /// A new identifier is inserted by position. A known identifier is
    /// overlaid: a placeholder only contributes its children to an existing
    /// concrete menu, anything else is merged as `existing + menu`. The
    /// registry's tie-break policy is applied to the whole incoming subtree
    /// first.
    ///
    /// # Errors
    ///
    /// Propagates `MenuError::MismatchedIdentifier` from the merge, which
    /// cannot occur for menus matched by identifier.
    pub fn register(&mut self, mut menu: MenuNode) -> Result<(), MenuError> {
        menu.set_tie_break(self.root.tie_break());
        let identifier = menu.identifier().to_owned();

        let Some(mut existing) = self.root.child(&identifier).cloned() else {
            debug!(menu = %identifier, "registered menu");
            self.root.add_child(menu);
            return Ok(());
        };

        let merged = if menu.is_placeholder() && !existing.is_placeholder() {
            existing.add_children(menu.into_children());
            existing
        } else {
            existing.merge(menu)?
        };

        debug!(
            menu = %identifier,
            children = merged.children().len(),
            "overlaid menu"
        );
        self.root.add_child(merged);
        Ok(())
    }

    /// Parse a definition document and register every menu in it.
    ///
    /// Returns the number of menus registered.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Definition` if the document cannot be parsed. No
    /// menu from a document that fails to parse is registered.
    pub fn register_definitions(&mut self, source_name: &str, json: &str) -> Result<usize, MenuError> {
        let definitions = parse_definitions(source_name, json)?;
        let count = definitions.len();
        for definition in definitions {
            self.register(definition.into_node(self.root.tie_break()))?;
        }
        info!(source = %source_name, menus = count, "loaded menu definitions");
        Ok(count)
    }

    /// Read a definition file and register its menus.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Io` if the file cannot be read, or
    /// `MenuError::Definition` if its contents are invalid.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, MenuError> {
        let json = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.register_definitions(&path.display().to_string(), &json)
    }

    /// Remove a top-level menu.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::ChildNotFound` if no top-level menu has `identifier`.
    pub fn remove(&mut self, identifier: &str) -> Result<MenuNode, MenuError> {
        self.root.remove_child(identifier)
    }

    /// Get a top-level menu by identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&MenuNode> {
        self.root.child(identifier)
    }

    /// All top-level menus in display order.
    #[must_use]
    pub fn menus(&self) -> &[MenuNode] {
        self.root.children()
    }

    /// Export every top-level menu for rendering.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavigationEntry> {
        self.menus().iter().map(MenuNode::to_navigation).collect()
    }

    /// Get top-level menu count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.menus().len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus().is_empty()
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}
