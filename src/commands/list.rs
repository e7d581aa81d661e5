/// `list` command: list every menu entry with its identifier path.
use navmenu::MenuError;
use navmenu::menu::flatten;
use navmenu::types::MenuItemOutput;

use super::load_registry;
use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::{DebugTimer, write_menu_items};

/// Run `navmenu list`.
///
/// # Errors
///
/// Returns `MenuError` if a definition file cannot be read or parsed.
pub fn run(args: &ListArgs, ctx: &OutputCtx) -> Result<(), MenuError> {
    let registry = load_registry(&args.files, ctx)?;

    let _t_flatten = DebugTimer::start("flatten");
    let mut items: Vec<MenuItemOutput> = flatten(registry.menus(), args.depth)
        .into_iter()
        .map(MenuItemOutput::from)
        .collect();
    drop(_t_flatten);

    if args.placeholders_only {
        items.retain(|i| i.placeholder);
    }

    write_menu_items(&items, ctx);
    Ok(())
}
