//! Pipeline orchestrator
//!
//! The orchestrator runs one diagram-generation request through every stage:
//! GraphBuilder → display-name resolution → LinkSet → PlantUmlRenderer.
//! Each call starts from an empty graph and keeps no state afterwards.

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{Renderer as _, TypeIntrospector, TypeKind, TypeRef};
use crate::plugins::graph::{
    resolve_display_names, DepthLimit, FieldFilter, GraphBuilder, GraphOptions, LinkSet, TypeGraph,
};
use crate::plugins::plantuml::PlantUmlRenderer;

/// One diagram produced by [`Orchestrator::generate_per_type`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDiagram {
    pub type_ref: TypeRef,
    pub text: String,
}

impl TypeDiagram {
    /// File name the diagram is conventionally written to
    pub fn file_name(&self) -> String {
        format!("{}.puml", self.type_ref.full_name())
    }
}

/// Runs the type-graph pipeline against one metadata provider
pub struct Orchestrator<'a> {
    introspector: &'a dyn TypeIntrospector,
    options: GraphOptions,
    field_filter: FieldFilter,
    renderer: PlantUmlRenderer,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator with default options and field filter
    pub fn new(introspector: &'a dyn TypeIntrospector) -> Self {
        Self {
            introspector,
            options: GraphOptions::default(),
            field_filter: FieldFilter::default(),
            renderer: PlantUmlRenderer::new(),
        }
    }

    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_field_filter(mut self, field_filter: FieldFilter) -> Self {
        self.field_filter = field_filter;
        self
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    fn builder<S: AsRef<str>>(&self, roots: &[S], options: GraphOptions) -> GraphBuilder<'a> {
        GraphBuilder::new(
            self.introspector,
            roots.iter().map(|r| TypeRef::new(r.as_ref())),
            options,
        )
        .with_field_filter(self.field_filter.clone())
    }

    /// Build the graph for `roots` and resolve its display names
    pub fn build_graph<S: AsRef<str>>(&self, roots: &[S]) -> Result<TypeGraph> {
        let mut graph = self.builder(roots, self.options.clone()).build()?;
        resolve_display_names(&mut graph);
        Ok(graph)
    }

    /// Collect links and render a resolved graph
    pub fn render_graph(&self, graph: &TypeGraph) -> Result<String> {
        let links = LinkSet::collect(graph);
        self.renderer.render(graph, &links)
    }

    /// Run the whole pipeline and return the diagram text
    pub fn generate<S: AsRef<str>>(&self, roots: &[S]) -> Result<String> {
        let generate_span = span!(
            Level::INFO,
            "generate_diagram",
            provider = self.introspector.name(),
            renderer = self.renderer.name(),
            roots = roots.len()
        );
        let _enter = generate_span.enter();

        info!("Starting diagram generation");
        let graph = self.build_graph(roots)?;
        let output = self.render_graph(&graph)?;
        info!(node_count = graph.node_count(), "Diagram generated");
        Ok(output)
    }

    /// One single-root diagram per concrete class reachable from `roots`
    ///
    /// Discovery expands the roots without a depth bound under the roots'
    /// own inclusion policy. Each discovered class (not enums, not
    /// interfaces) is then diagrammed on its own with the configured depth
    /// and package filters. Diagrams come back in discovery order.
    pub fn generate_per_type<S: AsRef<str>>(&self, roots: &[S]) -> Result<Vec<TypeDiagram>> {
        let split_span = span!(Level::INFO, "generate_per_type", roots = roots.len());
        let _enter = split_span.enter();

        let discovery_options = self.options.clone().with_max_depth(DepthLimit::Unbounded);
        let discovered = self.builder(roots, discovery_options).build()?;
        debug!(discovered = discovered.node_count(), "Discovery finished");

        let mut diagrams = Vec::new();
        for node in discovered.nodes().filter(|n| n.kind() == TypeKind::Class) {
            let root = [node.type_ref().full_name()];
            let text = self.generate(&root)?;
            diagrams.push(TypeDiagram {
                type_ref: node.type_ref().clone(),
                text,
            });
        }

        info!(diagram_count = diagrams.len(), "Per-type diagrams generated");
        Ok(diagrams)
    }
}
