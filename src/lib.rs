#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! navmenu — build, overlay, and export hierarchical navigation menus.

pub mod menu;
pub mod types;

pub use menu::{MenuError, MenuNode, MenuRegistry, TieBreak};
pub use types::NavigationEntry;
