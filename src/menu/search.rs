/// Fuzzy and exact search over flat menu entries.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::flatten::FlatItem;

/// A search result with its match score.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The matched entry.
    pub item: FlatItem,
    /// Match score (higher = better match). 0 for exact search (unscored).
    pub score: u32,
}

/// Search options.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of results to return.
    pub limit: usize,
    /// Use exact substring match instead of fuzzy.
    pub exact: bool,
    /// Case-sensitive matching.
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            exact: false,
            case_sensitive: false,
        }
    }
}

/// Search menu entries by query string.
///
/// Matches against the label followed by the identifier path, so both
/// "Stock alerts" and "catalogue::alerts" find the same entry.
///
/// Results are sorted by score descending (best match first).
#[must_use]
pub fn search(items: &[FlatItem], query: &str, opts: &SearchOptions) -> Vec<SearchResult> {
    if query.is_empty() {
        return items
            .iter()
            .take(opts.limit)
            .map(|item| SearchResult {
                item: item.clone(),
                score: 0,
            })
            .collect();
    }

    if opts.exact {
        return exact_search(items, query, opts);
    }

    fuzzy_search(items, query, opts)
}

fn haystack(item: &FlatItem) -> String {
    format!("{} {}", item.label, item.path)
}

fn exact_search(items: &[FlatItem], query: &str, opts: &SearchOptions) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let text = haystack(item);
            if opts.case_sensitive {
                text.contains(query)
            } else {
                text.to_lowercase().contains(&query_lower)
            }
        })
        .take(opts.limit)
        .map(|item| SearchResult {
            item: item.clone(),
            score: 0,
        })
        .collect()
}

fn fuzzy_search(items: &[FlatItem], query: &str, opts: &SearchOptions) -> Vec<SearchResult> {
    let case_matching = if opts.case_sensitive {
        CaseMatching::Respect
    } else {
        CaseMatching::Smart
    };

    let pattern = Pattern::parse(query, case_matching, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT.match_paths());

    let mut scored: Vec<SearchResult> = items
        .iter()
        .filter_map(|item| {
            let text = haystack(item);
            let mut buf = Vec::new();
            pattern
                .score(Utf32Str::new(&text, &mut buf), &mut matcher)
                .map(|score| SearchResult {
                    item: item.clone(),
                    score,
                })
        })
        .collect();

    // Stable sort keeps tree order among equal scores.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(opts.limit);
    scored
}
