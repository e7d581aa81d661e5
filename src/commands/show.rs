/// `show` command: print a single resolved menu entry.
use navmenu::MenuError;
use navmenu::menu::flatten::split_path;
use navmenu::menu::resolve_with_path;
use navmenu::types::MenuItemOutput;

use super::load_registry;
use crate::cli::OutputCtx;
use crate::cli::args::ShowArgs;
use crate::cli::output::{DebugTimer, write_menu_items};

/// Run `navmenu show`.
///
/// # Errors
///
/// Returns `MenuError` if a definition file cannot be read or parsed, or if
/// the path does not resolve to exactly one entry.
pub fn run(args: &ShowArgs, ctx: &OutputCtx) -> Result<(), MenuError> {
    let registry = load_registry(&args.files, ctx)?;

    let _t_resolve = DebugTimer::start("resolve_path");
    let (path, node) = resolve_with_path(registry.menus(), &args.path)?;
    drop(_t_resolve);

    let output = MenuItemOutput {
        identifier: node.identifier().to_owned(),
        label: node.label().to_owned(),
        depth: split_path(&path).len(),
        path,
        url_name: node.url_name().map(str::to_owned),
        icon: node.icon().map(str::to_owned),
        position: node.position(),
        placeholder: node.is_placeholder(),
        children_count: node.children().len(),
    };

    write_menu_items(&[output], ctx);
    Ok(())
}
