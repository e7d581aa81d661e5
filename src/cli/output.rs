/// Output formatting: JSON, table, tree, path/id modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use tracing::debug;

use super::args::OutputFormat;
use navmenu::TieBreak;
use navmenu::types::{ErrorOutput, MenuItemOutput, NavigationEntry, SearchResultOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all commands and formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
    /// Sibling ordering policy for the registry built by each command.
    pub ties: TieBreak,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        fields: Option<&str>,
        no_header: bool,
        ties: TieBreak,
    ) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
            ties,
        }
    }

    /// Whether a field should be included in output.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n == name))
    }
}

// --- Flat menu entry output ---

/// Write a list of `MenuItemOutput` to stdout.
pub fn write_menu_items(items: &[MenuItemOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Compact => print_compact_json(items),
        OutputFormat::Ndjson => print_ndjson(items),
        OutputFormat::Path => {
            for item in items {
                println!("{}", item.path);
            }
        }
        OutputFormat::Id => {
            for item in items {
                println!("{}", item.label);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_menu_items_table(items, ctx),
    }
}

fn write_menu_items_table(items: &[MenuItemOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let columns: [(&str, &str); 6] = [
        ("path", "PATH"),
        ("label", "LABEL"),
        ("url_name", "URL NAME"),
        ("icon", "ICON"),
        ("position", "POSITION"),
        ("placeholder", "PLACEHOLDER"),
    ];

    if !ctx.no_header {
        let headers: Vec<Cell> = columns
            .iter()
            .filter(|(field, _)| ctx.include_field(field))
            .map(|(_, header)| Cell::new(header))
            .collect();
        table.set_header(headers);
    }

    for item in items {
        let mut row: Vec<Cell> = Vec::new();
        if ctx.include_field("path") {
            row.push(Cell::new(&item.path));
        }
        if ctx.include_field("label") {
            row.push(Cell::new(&item.label));
        }
        if ctx.include_field("url_name") {
            row.push(Cell::new(item.url_name.as_deref().unwrap_or("")));
        }
        if ctx.include_field("icon") {
            row.push(Cell::new(item.icon.as_deref().unwrap_or("")));
        }
        if ctx.include_field("position") {
            row.push(Cell::new(
                item.position.map(|p| p.to_string()).unwrap_or_default(),
            ));
        }
        if ctx.include_field("placeholder") {
            row.push(Cell::new(if item.placeholder { "yes" } else { "" }));
        }
        table.add_row(row);
    }

    println!("{table}");
}

// --- Navigation tree output ---

/// Write the navigation tree to stdout.
pub fn write_navigation(entries: &[NavigationEntry], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(entries),
        OutputFormat::Compact => print_compact_json(entries),
        OutputFormat::Ndjson => print_ndjson(entries),
        OutputFormat::Path | OutputFormat::Id => {
            for entry in entries {
                print_tree_labels(entry);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let count = entries.len();
            for (i, entry) in entries.iter().enumerate() {
                print_tree_visual(entry, "", i + 1 == count);
            }
        }
    }
}

fn print_tree_labels(entry: &NavigationEntry) {
    println!("{}", entry.label);
    for child in &entry.children {
        print_tree_labels(child);
    }
}

fn print_tree_visual(entry: &NavigationEntry, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let url_str = entry
        .url_name
        .as_deref()
        .map(|u| format!("  -> {u}"))
        .unwrap_or_default();
    let icon_str = entry
        .icon
        .as_deref()
        .map(|i| format!("  [{i}]"))
        .unwrap_or_default();
    let label = if entry.label.is_empty() {
        "(placeholder)"
    } else {
        entry.label.as_str()
    };
    println!("{prefix}{connector}{label}{url_str}{icon_str}");

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let child_count = entry.children.len();
    for (i, child) in entry.children.iter().enumerate() {
        print_tree_visual(child, &child_prefix, i + 1 == child_count);
    }
}

// --- Search results ---

/// Write search results to stdout.
pub fn write_search_results(results: &[SearchResultOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(results),
        OutputFormat::Compact => print_compact_json(results),
        OutputFormat::Ndjson => print_ndjson(results),
        OutputFormat::Path => {
            for r in results {
                println!("{}", r.path);
            }
        }
        OutputFormat::Id => {
            for r in results {
                println!("{}", r.label);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_search_table(results, ctx),
    }
}

fn write_search_table(results: &[SearchResultOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["PATH", "LABEL", "URL NAME", "SCORE"]);
    }
    for r in results {
        table.add_row([
            r.path.as_str(),
            r.label.as_str(),
            r.url_name.as_deref().unwrap_or(""),
            &r.score.to_string(),
        ]);
    }
    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Started with [`DebugTimer::start`]. Silent unless debug logging is enabled.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    /// Start a named timer.
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(step = self.label, elapsed_ms = ms, "timing");
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Table, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Path, false), OutputFormat::Path);
    }

    #[test]
    fn test_debug_timer_needs_no_context() {
        let timer = DebugTimer::start("load_registry");
        assert_eq!(timer.label, "load_registry");
        drop(timer);
    }

    #[test]
    fn test_field_projection() {
        let ctx = OutputCtx::new(
            OutputFormat::Table,
            false,
            Some("path, label"),
            false,
            TieBreak::default(),
        );
        assert!(ctx.include_field("path"));
        assert!(ctx.include_field("label"));
        assert!(!ctx.include_field("icon"));

        let all = OutputCtx::new(OutputFormat::Table, false, None, false, TieBreak::default());
        assert!(all.include_field("icon"));
    }
}
