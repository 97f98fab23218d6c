//! Type-graph plugin
//!
//! Expands root types into a deduplicated node graph, resolves display names
//! and derives the links between nodes.

mod builder;
mod filter;
mod links;
mod model;
mod resolver;

pub use builder::{DepthLimit, Expansion, GraphBuilder, GraphOptions, UNIVERSAL_ROOT};
pub use filter::FieldFilter;
pub use links::{collect_links, LinkSet};
pub use model::{FieldType, Node, NodeField, TypeGraph};
pub use resolver::resolve_display_names;
