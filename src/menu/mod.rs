/// Menu domain layer: tree nodes, definitions, registry, flattening, search, path resolution.
pub mod definition;
pub mod errors;
pub mod flatten;
pub mod node;
pub mod registry;
pub mod resolve;
pub mod search;

pub use definition::{MenuDefinition, parse_definitions};
pub use errors::MenuError;
pub use flatten::{FlatItem, flatten};
pub use node::{MenuNode, TieBreak};
pub use registry::MenuRegistry;
pub use resolve::{resolve, resolve_with_path};
pub use search::{SearchOptions, SearchResult, search};
