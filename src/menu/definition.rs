/// Menu definitions: the JSON registration format.
///
/// A document holds one definition object or an array of them:
///
/// ```text
/// [
///   {"label": "Catalogue", "url_name": "catalogue:index", "identifier": "catalogue",
///    "children": [{"label": "Products", "url_name": "catalogue:products"}]},
///   {"placeholder": "reports", "children": [{"label": "Sales"}]}
/// ]
/// ```
use serde::{Deserialize, Serialize};

use super::errors::MenuError;
use super::node::{MenuNode, TieBreak};

/// One menu entry as written in a definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuDefinition {
    /// Display text. Ignored when empty on a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Reserve this identifier instead of defining a concrete entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Explicit identifier; defaults to one derived from the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuDefinition>,
}

impl MenuDefinition {
    /// Build the `MenuNode` subtree for this definition.
    ///
    /// Every node in the subtree orders equal-position children with
    /// `tie_break`. Children are added in file order with the usual
    /// replacement and position rules, so a duplicated identifier keeps only
    /// the last entry.
    #[must_use]
    pub fn into_node(self, tie_break: TieBreak) -> MenuNode {
        let mut node = match self.placeholder {
            Some(identifier) => {
                let mut node = MenuNode::placeholder(identifier);
                if let Some(label) = self.label {
                    node.set_label(label);
                }
                node
            }
            None => {
                let node = MenuNode::new(self.label.unwrap_or_default());
                match self.identifier {
                    Some(identifier) => node.with_identifier(identifier),
                    None => node,
                }
            }
        }
        .with_tie_break(tie_break);
        node.set_url_name(self.url_name);
        node.set_icon(self.icon);
        node.set_position(self.position);
        node.add_children(
            self.children
                .into_iter()
                .map(|child| child.into_node(tie_break)),
        );
        node
    }

    /// Reject definitions that name two identifiers for one entry.
    fn validate(&self) -> Result<(), serde_json::Error> {
        if let (Some(placeholder), Some(identifier)) = (&self.placeholder, &self.identifier) {
            return Err(serde::de::Error::custom(format!(
                "placeholder '{placeholder}' also sets identifier '{identifier}'; use one or the other"
            )));
        }
        self.children.iter().try_for_each(MenuDefinition::validate)
    }
}

/// Parse a definition document.
///
/// A document starting with `[` is a list of menus, anything else a single
/// menu. `source_name` only labels errors (typically the file path).
///
/// # Errors
///
/// Returns `MenuError::Definition` if `json` is not a definition object or
/// array, or if an entry sets both `placeholder` and `identifier`.
pub fn parse_definitions(source_name: &str, json: &str) -> Result<Vec<MenuDefinition>, MenuError> {
    let parsed = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<MenuDefinition>>(json)
    } else {
        serde_json::from_str::<MenuDefinition>(json).map(|def| vec![def])
    };
    let definitions = parsed
        .and_then(|defs| {
            defs.iter().try_for_each(MenuDefinition::validate)?;
            Ok(defs)
        })
        .map_err(|source| MenuError::Definition {
            source_name: source_name.to_owned(),
            source,
        })?;
    Ok(definitions)
}
