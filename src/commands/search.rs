/// `search` command: fuzzy-search menu entries.
use navmenu::MenuError;
use navmenu::menu::{SearchOptions, flatten, search};
use navmenu::types::SearchResultOutput;

use super::load_registry;
use crate::cli::OutputCtx;
use crate::cli::args::SearchArgs;
use crate::cli::output::{DebugTimer, write_search_results};

/// Run `navmenu search`.
///
/// # Errors
///
/// Returns `MenuError` if a definition file cannot be read or parsed.
pub fn run(args: &SearchArgs, ctx: &OutputCtx) -> Result<(), MenuError> {
    let registry = load_registry(&args.files, ctx)?;
    let flat = flatten(registry.menus(), None);

    let opts = SearchOptions {
        limit: args.limit,
        exact: args.exact,
        case_sensitive: args.case_sensitive,
    };

    let _t_search = DebugTimer::start("search");
    let results = search(&flat, &args.query, &opts);
    drop(_t_search);

    let output: Vec<SearchResultOutput> = results
        .into_iter()
        .map(|r| SearchResultOutput {
            label: r.item.label,
            path: r.item.path,
            url_name: r.item.url_name,
            score: r.score,
        })
        .collect();

    write_search_results(&output, ctx);
    Ok(())
}
