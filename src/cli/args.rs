/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use navmenu::TieBreak;

/// navmenu — build, overlay, and export navigation menus.
#[derive(Debug, Parser)]
#[command(
    name = "navmenu",
    about = "Merge navigation menu definitions and export the resulting tree",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated field names to include in table output (projection).
    #[arg(long, global = true, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log registry activity and command timing to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// How entries that request the same position are ordered.
    #[arg(long, global = true, value_name = "ORDER", default_value = "newest-first")]
    pub ties: TieOrder,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table or tree (human-readable).
    Table,
    /// Identifier path only, one per line.
    Path,
    /// Label only, one per line.
    Id,
}

/// Command-line spelling of [`TieBreak`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum TieOrder {
    /// Later entries go before earlier ones at the same position.
    #[default]
    NewestFirst,
    /// Entries at the same position keep registration order.
    OldestFirst,
}

impl From<TieOrder> for TieBreak {
    fn from(order: TieOrder) -> Self {
        match order {
            TieOrder::NewestFirst => TieBreak::NewestFirst,
            TieOrder::OldestFirst => TieBreak::OldestFirst,
        }
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge definition files and print the navigation tree.
    Render(RenderArgs),
    /// List every menu entry with its identifier path.
    List(ListArgs),
    /// Fuzzy-search menu entries by label or path.
    Search(SearchArgs),
    /// Show a single menu entry.
    Show(ShowArgs),
}

/// Arguments for `navmenu render`.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Definition files, applied in order (later files overlay earlier ones).
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments for `navmenu list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Definition files, applied in order.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Maximum depth to descend (default: unlimited).
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Only include entries that are still unmerged placeholders.
    #[arg(long)]
    pub placeholders_only: bool,
}

/// Arguments for `navmenu search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query string.
    pub query: String,

    /// Definition files, applied in order.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Maximum number of results to return.
    #[arg(long, value_name = "N", default_value = "10")]
    pub limit: usize,

    /// Use exact substring match instead of fuzzy.
    #[arg(long)]
    pub exact: bool,

    /// Case-sensitive matching (default: smart-case).
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Arguments for `navmenu show`.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Identifier path, identifier, or label.
    /// Examples: "catalogue::products", "products", "Products"
    pub path: String,

    /// Definition files, applied in order.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_with_ties() {
        let cli = Cli::parse_from(["navmenu", "--ties", "oldest-first", "render", "a.json", "b.json"]);
        assert_eq!(cli.ties, TieOrder::OldestFirst);
        match cli.command {
            Command::Render(args) => assert_eq!(args.files.len(), 2),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render_requires_files() {
        assert!(Cli::try_parse_from(["navmenu", "render"]).is_err());
    }
}
