/// Path resolution: convert user-provided strings to specific `MenuNode`s.
///
/// Resolution strategy (in priority order):
///
/// 1. **Exact path match**: If input contains "::", walk the tree level-by-level
///    matching identifiers exactly.
/// 2. **Identifier match**: Search the whole tree for an exact identifier.
/// 3. **Label match**: Search the whole tree for a case-insensitive label.
///
/// Steps 2 and 3 succeed only if exactly one entry matches; several matches
/// produce an ambiguity error listing candidate paths.
use super::{
    errors::MenuError,
    flatten::{PATH_SEP, escape_segment, split_path, unescape_segment},
    node::MenuNode,
};

/// Resolve a user-provided path/query to a single `MenuNode`.
///
/// # Errors
///
/// - `MenuError::ItemNotFound` — no entry matches
/// - `MenuError::AmbiguousMatch` — several entries match
pub fn resolve<'a>(nodes: &'a [MenuNode], query: &str) -> Result<&'a MenuNode, MenuError> {
    resolve_with_path(nodes, query).map(|(_, node)| node)
}

/// Like [`resolve`], also returning the entry's full identifier path.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_with_path<'a>(
    nodes: &'a [MenuNode],
    query: &str,
) -> Result<(String, &'a MenuNode), MenuError> {
    if query.contains(PATH_SEP) {
        return resolve_by_exact_path(nodes, query);
    }

    let mut all = Vec::new();
    collect_with_paths(nodes, "", &mut all);

    let by_identifier: Vec<&(String, &MenuNode)> =
        all.iter().filter(|(_, n)| n.identifier() == query).collect();
    if let Some(found) = pick_unique(&by_identifier, query)? {
        return Ok(found);
    }

    let query_lower = query.to_lowercase();
    let by_label: Vec<&(String, &MenuNode)> = all
        .iter()
        .filter(|(_, n)| n.label().to_lowercase() == query_lower)
        .collect();
    pick_unique(&by_label, query)?.ok_or_else(|| MenuError::ItemNotFound {
        query: query.to_owned(),
    })
}

fn pick_unique<'a>(
    matches: &[&(String, &'a MenuNode)],
    query: &str,
) -> Result<Option<(String, &'a MenuNode)>, MenuError> {
    match matches {
        [] => Ok(None),
        [(path, node)] => Ok(Some((path.clone(), *node))),
        _ => Err(MenuError::AmbiguousMatch {
            query: query.to_owned(),
            candidates: matches.iter().map(|(path, _)| path.clone()).collect(),
        }),
    }
}

/// Walk the tree level-by-level using the path segments split by `::`.
fn resolve_by_exact_path<'a>(
    nodes: &'a [MenuNode],
    path: &str,
) -> Result<(String, &'a MenuNode), MenuError> {
    let mut current = nodes;
    let mut found: Option<&MenuNode> = None;

    for segment in split_path(path) {
        let identifier = unescape_segment(segment);
        match current.iter().find(|n| n.identifier() == identifier) {
            Some(node) => {
                found = Some(node);
                current = node.children();
            }
            None => {
                return Err(MenuError::ItemNotFound {
                    query: path.to_owned(),
                });
            }
        }
    }

    found
        .map(|node| (path.to_owned(), node))
        .ok_or_else(|| MenuError::ItemNotFound {
            query: path.to_owned(),
        })
}

fn collect_with_paths<'a>(
    nodes: &'a [MenuNode],
    parent_path: &str,
    out: &mut Vec<(String, &'a MenuNode)>,
) {
    for node in nodes {
        let escaped = escape_segment(node.identifier());
        let path = if parent_path.is_empty() {
            escaped.into_owned()
        } else {
            format!("{parent_path}{PATH_SEP}{escaped}")
        };
        out.push((path.clone(), node));
        collect_with_paths(node.children(), &path, out);
    }
}
