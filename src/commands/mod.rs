/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod list;
pub mod render;
pub mod search;
pub mod show;

use std::path::PathBuf;

use navmenu::{MenuError, MenuRegistry};

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::cli::output::DebugTimer;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `MenuError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), MenuError> {
    match command {
        Command::Render(args) => render::run(args, ctx),
        Command::List(args) => list::run(args, ctx),
        Command::Search(args) => search::run(args, ctx),
        Command::Show(args) => show::run(args, ctx),
    }
}

/// Load definition files in order into one registry.
///
/// # Errors
///
/// Returns the first `MenuError` from reading or parsing a file.
fn load_registry(files: &[PathBuf], ctx: &OutputCtx) -> Result<MenuRegistry, MenuError> {
    let _t_load = DebugTimer::start("load_registry");
    let mut registry = MenuRegistry::with_tie_break(ctx.ties);
    for file in files {
        registry.load_file(file)?;
    }
    Ok(registry)
}
