/// `render` command: print the merged navigation tree.
use navmenu::MenuError;

use super::load_registry;
use crate::cli::OutputCtx;
use crate::cli::args::RenderArgs;
use crate::cli::output::{DebugTimer, write_navigation};

/// Run `navmenu render`.
///
/// # Errors
///
/// Returns `MenuError` if a definition file cannot be read or parsed.
pub fn run(args: &RenderArgs, ctx: &OutputCtx) -> Result<(), MenuError> {
    let registry = load_registry(&args.files, ctx)?;

    let _t_export = DebugTimer::start("navigation");
    let navigation = registry.navigation();
    drop(_t_export);

    write_navigation(&navigation, ctx);
    Ok(())
}
