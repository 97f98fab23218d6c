//! Typegraph - Turn record/entity type metadata into PlantUML class diagrams
//!
//! Starting from one or more root types, the library walks supertypes,
//! interfaces and field types through a [`TypeIntrospector`], builds a
//! cycle-safe graph and prints it as a PlantUML class diagram.
//!
//! # Quick Start
//!
//! ```rust
//! use typegraph::prelude::*;
//!
//! let catalog = TypeCatalog::from_json(r#"{
//!     "types": [
//!         { "name": "shop.Order",
//!           "fields": [{ "name": "customer", "visibility": "public", "type": "shop.Customer" }] },
//!         { "name": "shop.Customer" }
//!     ]
//! }"#).unwrap();
//!
//! let options = GraphOptions::new().with_package_filter("shop");
//! let puml = typegraph::render(&catalog, &["shop.Order"], options).unwrap();
//! assert!(puml.contains("Order --> Customer"));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use typegraph::prelude::*;
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.insert(TypeMetadata::class("shop.Item")).unwrap();
//! catalog.insert(TypeMetadata::class("stock.Item")).unwrap();
//!
//! // Two roots: the diagram is scoped to exactly these types
//! let orchestrator = Orchestrator::new(&catalog);
//! let graph = orchestrator.build_graph(&["shop.Item", "stock.Item"]).unwrap();
//! assert_eq!(graph.get("stock.Item").unwrap().display_name(), "stock.Item");
//!
//! let puml = orchestrator.render_graph(&graph).unwrap();
//! assert!(puml.starts_with("@startuml\n"));
//! ```

pub mod core;
pub mod plugins;

pub use crate::core::*;

use crate::plugins::graph::{GraphOptions, TypeGraph};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        DiagramError, FieldDescriptor, Renderer, TypeIntrospector, TypeKind, TypeMetadata,
        TypeRef, Visibility,
    };
    pub use crate::plugins::catalog::TypeCatalog;
    pub use crate::plugins::graph::{DepthLimit, FieldFilter, GraphOptions, TypeGraph};
    pub use crate::plugins::orchestrator::{Orchestrator, TypeDiagram};
    pub use crate::plugins::plantuml::PlantUmlRenderer;
}

/// Render the diagram for `roots` with the default field filter
///
/// # Example
/// ```rust
/// use typegraph::prelude::*;
///
/// let mut catalog = TypeCatalog::new();
/// catalog.insert(TypeMetadata::enumeration("shop.Status")).unwrap();
///
/// let options = GraphOptions::new().with_package_filter("shop");
/// let puml = typegraph::render(&catalog, &["shop.Status"], options).unwrap();
/// assert!(puml.contains("enum Status {"));
/// ```
pub fn render<S: AsRef<str>>(
    introspector: &dyn TypeIntrospector,
    roots: &[S],
    options: GraphOptions,
) -> anyhow::Result<String> {
    plugins::orchestrator::Orchestrator::new(introspector)
        .with_options(options)
        .generate(roots)
}

/// Build and name-resolve the graph for `roots` without rendering it
pub fn build_graph<S: AsRef<str>>(
    introspector: &dyn TypeIntrospector,
    roots: &[S],
    options: GraphOptions,
) -> anyhow::Result<TypeGraph> {
    plugins::orchestrator::Orchestrator::new(introspector)
        .with_options(options)
        .build_graph(roots)
}
