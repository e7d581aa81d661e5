/// The navigation menu tree node.
///
/// A `MenuNode` owns its children in display order. Children are unique by
/// identifier: adding a node whose identifier is already present replaces the
/// existing entry in place instead of appending a duplicate.
///
/// Ordering among siblings:
/// 1. Positioned children always precede unpositioned ones.
/// 2. Positioned children are kept in ascending `position`.
/// 3. Unpositioned children keep their insertion order.
/// 4. Equal positions are resolved by the parent's [`TieBreak`] policy.
///
/// Insertion computes an explicit index at the time of the call; the
/// sequence is never re-sorted afterwards.
use std::ops::Add;

use super::errors::MenuError;
use crate::types::NavigationEntry;

/// Where a positioned child lands relative to siblings that already hold the
/// same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The newly inserted node goes before existing equal-position siblings
    /// (repeated inserts at one position stack last-in-first).
    #[default]
    NewestFirst,
    /// The newly inserted node goes after existing equal-position siblings.
    OldestFirst,
}

/// A node in the navigation menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    label: String,
    url_name: Option<String>,
    icon: Option<String>,
    identifier: String,
    position: Option<usize>,
    children: Vec<MenuNode>,
    /// Set only by [`MenuNode::placeholder`]; cleared for good by the first
    /// non-empty label.
    placeholder: bool,
    tie_break: TieBreak,
}

impl MenuNode {
    /// Create a menu entry whose identifier is derived from `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let identifier = default_identifier(&label);
        Self {
            label,
            url_name: None,
            icon: None,
            identifier,
            position: None,
            children: Vec::new(),
            placeholder: false,
            tie_break: TieBreak::default(),
        }
    }

    /// Create an empty menu that reserves `identifier` until a concrete
    /// definition is merged over it.
    #[must_use]
    pub fn placeholder(identifier: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            url_name: None,
            icon: None,
            identifier: identifier.into(),
            position: None,
            children: Vec::new(),
            placeholder: true,
            tie_break: TieBreak::default(),
        }
    }

    #[must_use]
    pub fn with_url_name(mut self, url_name: impl Into<String>) -> Self {
        self.url_name = Some(url_name.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Override the label-derived identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Set how this node orders children that request the same position.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Owned form of [`MenuNode::add_child`].
    #[must_use]
    pub fn with_child(mut self, child: MenuNode) -> Self {
        self.add_child(child);
        self
    }

    /// Owned form of [`MenuNode::add_children`].
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = MenuNode>) -> Self {
        self.add_children(children);
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn url_name(&self) -> Option<&str> {
        self.url_name.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    #[must_use]
    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Consume the node, keeping only its children.
    #[must_use]
    pub fn into_children(self) -> Vec<MenuNode> {
        self.children
    }

    /// Whether this node still only reserves its identifier.
    ///
    /// True only for nodes built with [`MenuNode::placeholder`] that have
    /// never been given a non-empty label.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder && self.label.is_empty()
    }

    /// Replace the label. The identifier is not recomputed.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        if !self.label.is_empty() {
            self.placeholder = false;
        }
    }

    pub fn set_url_name(&mut self, url_name: Option<String>) {
        self.url_name = url_name;
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    /// Set the tie-break policy on this node and every descendant.
    ///
    /// Only later insertions are affected; children already placed keep
    /// their order.
    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
        for child in &mut self.children {
            child.set_tie_break(tie_break);
        }
    }

    /// Change the position hint. Siblings already placed are not reordered.
    pub fn set_position(&mut self, position: Option<usize>) {
        self.position = position;
    }

    /// Add a child, replacing any existing child with the same identifier.
    ///
    /// A replaced child keeps its slot; the new node (with its own children)
    /// fully supersedes the old one. New children are placed according to
    /// their position hint, or appended when they have none.
    pub fn add_child(&mut self, child: MenuNode) -> &mut Self {
        if let Some(existing) = self
            .children
            .iter_mut()
            .find(|c| c.identifier == child.identifier)
        {
            *existing = child;
            return self;
        }

        let index = match child.position {
            Some(position) => self.insertion_index(position),
            None => self.children.len(),
        };
        self.children.insert(index, child);
        self
    }

    /// Add each child in order, with the same replacement rules as
    /// [`MenuNode::add_child`].
    pub fn add_children(&mut self, children: impl IntoIterator<Item = MenuNode>) -> &mut Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Remove and return the direct child with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::ChildNotFound` if no child has that identifier;
    /// the children are left untouched.
    pub fn remove_child(&mut self, identifier: &str) -> Result<MenuNode, MenuError> {
        let index = self
            .children
            .iter()
            .position(|c| c.identifier == identifier)
            .ok_or_else(|| MenuError::ChildNotFound {
                identifier: identifier.to_owned(),
            })?;
        Ok(self.children.remove(index))
    }

    /// Look up a direct child by identifier.
    #[must_use]
    pub fn child(&self, identifier: &str) -> Option<&MenuNode> {
        self.children.iter().find(|c| c.identifier == identifier)
    }

    /// Mutable lookup of a direct child by identifier.
    pub fn child_mut(&mut self, identifier: &str) -> Option<&mut MenuNode> {
        self.children.iter_mut().find(|c| c.identifier == identifier)
    }

    /// Export the subtree as the nested record consumed by renderers.
    #[must_use]
    pub fn to_navigation(&self) -> NavigationEntry {
        NavigationEntry {
            label: self.label.clone(),
            url_name: self.url_name.clone(),
            icon: self.icon.clone(),
            children: self.children.iter().map(MenuNode::to_navigation).collect(),
        }
    }

    /// Overlay `other` onto `self`.
    ///
    /// The result takes `other`'s label, url name, icon, position and
    /// placeholder status. Its children are `self`'s children with each of
    /// `other`'s children added on top via [`MenuNode::add_child`].
    ///
    /// # Errors
    ///
    /// Returns `MenuError::MismatchedIdentifier` if the identifiers differ.
    pub fn merge(self, other: MenuNode) -> Result<MenuNode, MenuError> {
        if self.identifier != other.identifier {
            return Err(MenuError::MismatchedIdentifier {
                left: self.identifier,
                right: other.identifier,
            });
        }

        let MenuNode {
            label,
            url_name,
            icon,
            position,
            children,
            placeholder,
            ..
        } = other;

        let mut merged = MenuNode {
            label,
            url_name,
            icon,
            identifier: self.identifier,
            position,
            children: self.children,
            placeholder,
            tie_break: self.tie_break,
        };
        merged.add_children(children);
        Ok(merged)
    }

    /// Index at which a new child requesting `position` is inserted.
    ///
    /// The scan stops at the first unpositioned sibling, so the result never
    /// exceeds the current length.
    fn insertion_index(&self, position: usize) -> usize {
        self.children
            .iter()
            .position(|sibling| match sibling.position {
                None => true,
                Some(existing) => match self.tie_break {
                    TieBreak::NewestFirst => existing >= position,
                    TieBreak::OldestFirst => existing > position,
                },
            })
            .unwrap_or(self.children.len())
    }
}

impl Add for MenuNode {
    type Output = Result<MenuNode, MenuError>;

    fn add(self, rhs: MenuNode) -> Self::Output {
        self.merge(rhs)
    }
}

/// Derive the identifier for a label: lowercase ASCII alphanumerics, with
/// every other run of characters collapsed to a single `-`.
fn default_identifier(label: &str) -> String {
    let mut result = String::with_capacity(label.len());
    let mut prev_was_hyphen = true; // skip leading separators
    for c in label.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_was_hyphen = false;
        } else if !prev_was_hyphen {
            result.push('-');
            prev_was_hyphen = true;
        }
    }
    while result.ends_with('-') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn labels(node: &MenuNode) -> Vec<&str> {
        node.children().iter().map(MenuNode::label).collect()
    }

    #[test]
    fn test_default_identifier() {
        assert_eq!(default_identifier("Child"), "child");
        assert_eq!(default_identifier("Child of D1"), "child-of-d1");
        assert_eq!(default_identifier("  Save As…  "), "save-as");
        assert_eq!(default_identifier(""), "");
    }

    #[test]
    fn test_is_placeholder() {
        assert!(MenuNode::placeholder("id").is_placeholder());
        assert!(!MenuNode::new("").is_placeholder());
        assert!(!MenuNode::new("Not placeholder").is_placeholder());
        assert!(!MenuNode::new("").with_icon("Not placeholder").is_placeholder());

        let mut menu = MenuNode::placeholder("id");
        menu.set_label("Makes it non-placeholder");
        assert!(!menu.is_placeholder());
        assert_eq!(menu.identifier(), "id");
    }

    #[test]
    fn test_placeholder_status_is_not_restored() {
        let mut menu = MenuNode::placeholder("id");
        menu.set_label("");
        assert!(menu.is_placeholder());
        menu.set_label("Named");
        menu.set_label("");
        assert!(!menu.is_placeholder());
    }

    #[test]
    fn test_adding_duplicate_children_replaces_them() {
        let child_d1 = MenuNode::new("D1");
        let child_c1 = MenuNode::new("C1");
        let child_c2 = MenuNode::new("C2");

        let mut menu = MenuNode::new("Parent");
        menu.add_child(child_d1.clone())
            .add_child(child_d1.clone())
            .add_children([child_c1.clone(), child_c1.clone(), child_c2.clone()]);
        assert_eq!(
            menu.children(),
            [child_d1.clone(), child_c1.clone(), child_c2.clone()]
        );
        assert!(child_d1.children().is_empty());

        let child_d1_with_children = MenuNode::new(child_d1.label())
            .with_child(MenuNode::new(format!("Child of {}", child_d1.label())));
        menu.add_child(child_d1_with_children.clone());
        assert_eq!(
            menu.children(),
            [child_d1_with_children, child_c1, child_c2]
        );
    }

    #[test]
    fn test_replacement_keeps_slot_and_drops_old_subtree() {
        let old = MenuNode::new("Reports").with_child(MenuNode::new("Old"));
        let mut menu = MenuNode::new("Dashboard")
            .with_child(MenuNode::new("Orders"))
            .with_child(old)
            .with_child(MenuNode::new("Users"));

        menu.add_child(MenuNode::new("Reports").with_child(MenuNode::new("New")));
        assert_eq!(labels(&menu), ["Orders", "Reports", "Users"]);
        let reports = menu.child("reports").unwrap();
        assert_eq!(labels(reports), ["New"]);
    }

    #[test]
    fn test_adding_non_duplicate_children() {
        let mut menu = MenuNode::new("Catalogue").with_url_name("catalogue:index");
        assert!(menu.children().is_empty());

        menu.add_child(MenuNode::new("Products").with_url_name("catalogue:products"));
        assert_eq!(menu.children().len(), 1);

        menu.add_child(MenuNode::new("Categories").with_url_name("catalogue:categories"))
            .add_child(MenuNode::new("Attributes").with_url_name("catalogue:attributes"))
            .add_child(
                MenuNode::new("First position")
                    .with_url_name("catalogue:first")
                    .with_position(1),
            );
        assert_eq!(
            labels(&menu),
            ["First position", "Products", "Categories", "Attributes"]
        );

        menu.add_child(MenuNode::new("FFP").with_url_name("catalogue:ff").with_position(0));
        assert_eq!(
            labels(&menu),
            ["FFP", "First position", "Products", "Categories", "Attributes"]
        );
    }

    #[test]
    fn test_equal_positions_newest_first() {
        let mut menu = MenuNode::new("Root");
        menu.add_child(MenuNode::new("A"))
            .add_child(MenuNode::new("B"))
            .add_child(MenuNode::new("C").with_position(1))
            .add_child(MenuNode::new("D").with_position(0))
            .add_child(MenuNode::new("E").with_position(1));
        assert_eq!(labels(&menu), ["D", "E", "C", "A", "B"]);
    }

    #[test]
    fn test_equal_positions_oldest_first() {
        let mut menu = MenuNode::new("Catalogue").with_tie_break(TieBreak::OldestFirst);
        menu.add_child(MenuNode::new("Products"))
            .add_child(MenuNode::new("Categories"))
            .add_child(MenuNode::new("Attributes"))
            .add_child(MenuNode::new("First position").with_position(1))
            .add_child(MenuNode::new("FFP").with_position(0))
            .add_child(MenuNode::new("CFP").with_position(1));
        assert_eq!(
            labels(&menu),
            ["FFP", "First position", "CFP", "Products", "Categories", "Attributes"]
        );
    }

    #[test]
    fn test_set_tie_break_reaches_descendants() {
        let mut menu = MenuNode::new("Root").with_child(MenuNode::new("Sub"));
        menu.set_tie_break(TieBreak::OldestFirst);
        let sub = menu.child_mut("sub").unwrap();
        assert_eq!(sub.tie_break(), TieBreak::OldestFirst);
        sub.add_child(MenuNode::new("First").with_position(1))
            .add_child(MenuNode::new("Second").with_position(1));
        assert_eq!(labels(sub), ["First", "Second"]);
    }

    #[test]
    fn test_large_position_stays_ahead_of_unpositioned() {
        let mut menu = MenuNode::new("Root");
        menu.add_child(MenuNode::new("A"))
            .add_child(MenuNode::new("Far").with_position(99))
            .add_child(MenuNode::new("Near").with_position(2));
        assert_eq!(labels(&menu), ["Near", "Far", "A"]);
    }

    #[test]
    fn test_remove_child() {
        let mut parent = MenuNode::new("Parent")
            .with_url_name("parent-url-name")
            .with_child(MenuNode::new("Child").with_url_name("child-url-name"));
        assert_eq!(parent.children().len(), 1);

        let removed = parent.remove_child("child").unwrap();
        assert_eq!(removed.label(), "Child");
        assert!(parent.children().is_empty());

        let err = parent.remove_child("unexisting_child").unwrap_err();
        assert!(matches!(err, MenuError::ChildNotFound { ref identifier } if identifier == "unexisting_child"));
    }

    #[test]
    fn test_failed_remove_keeps_children() {
        let mut parent = MenuNode::new("Parent")
            .with_child(MenuNode::new("One"))
            .with_child(MenuNode::new("Two"));
        assert!(parent.remove_child("missing").is_err());
        assert_eq!(labels(&parent), ["One", "Two"]);
    }

    #[test]
    fn test_to_navigation() {
        let mut menu = MenuNode::new("Top level").with_url_name("index");
        assert_eq!(
            serde_json::to_value(menu.to_navigation()).unwrap(),
            json!({
                "label": "Top level",
                "url_name": "index",
                "icon": null,
                "children": [],
            })
        );

        let child_menu = MenuNode::new("Child")
            .with_url_name("child")
            .with_child(MenuNode::new("Inner child").with_url_name("inner-child"));
        menu.add_child(child_menu);
        assert_eq!(
            serde_json::to_value(menu.to_navigation()).unwrap(),
            json!({
                "label": "Top level",
                "url_name": "index",
                "icon": null,
                "children": [
                    {
                        "label": "Child",
                        "url_name": "child",
                        "icon": null,
                        "children": [
                            {
                                "label": "Inner child",
                                "url_name": "inner-child",
                                "icon": null,
                                "children": [],
                            }
                        ],
                    },
                ],
            })
        );
    }

    #[test]
    fn test_to_navigation_deep_tree() {
        let mut node = MenuNode::new("Level 5").with_icon("leaf");
        for depth in (0..5).rev() {
            node = MenuNode::new(format!("Level {depth}")).with_child(node);
        }
        let mut entry = node.to_navigation();
        for depth in 0..5 {
            assert_eq!(entry.label, format!("Level {depth}"));
            assert_eq!(entry.children.len(), 1);
            entry = entry.children.remove(0);
        }
        assert_eq!(entry.icon.as_deref(), Some("leaf"));
        assert!(entry.children.is_empty());
    }

    #[test]
    fn test_merging_menus_with_different_identifiers_fails() {
        let result = MenuNode::placeholder("m1") + MenuNode::new("Menu 2").with_identifier("m2");
        assert!(matches!(
            result,
            Err(MenuError::MismatchedIdentifier { ref left, ref right }) if left == "m1" && right == "m2"
        ));
    }

    #[test]
    fn test_merge_menus() {
        let menu1_child = MenuNode::placeholder("cm1");
        let menu1 = MenuNode::placeholder("m1").with_child(menu1_child.clone());
        let menu2 = MenuNode::new("Menu 2").with_identifier(menu1.identifier());

        let merged = (menu1 + menu2).unwrap();
        assert_eq!(
            merged.to_navigation(),
            NavigationEntry {
                label: "Menu 2".to_owned(),
                url_name: None,
                icon: None,
                children: vec![menu1_child.to_navigation()],
            }
        );
        assert!(!merged.is_placeholder());
    }

    #[test]
    fn test_merge_overlays_children_by_identifier() {
        let base = MenuNode::new("Catalogue")
            .with_child(MenuNode::new("Products").with_url_name("products:old"))
            .with_child(MenuNode::new("Categories"));
        let overlay = MenuNode::new("Shop")
            .with_identifier("catalogue")
            .with_icon("cart")
            .with_position(3)
            .with_child(MenuNode::new("Products").with_url_name("products:new"))
            .with_child(MenuNode::new("Ranges").with_position(0));

        let merged = base.merge(overlay).unwrap();
        assert_eq!(merged.label(), "Shop");
        assert_eq!(merged.identifier(), "catalogue");
        assert_eq!(merged.icon(), Some("cart"));
        assert_eq!(merged.position(), Some(3));
        assert_eq!(labels(&merged), ["Ranges", "Products", "Categories"]);
        assert_eq!(
            merged.child("products").and_then(MenuNode::url_name),
            Some("products:new")
        );
    }
}
