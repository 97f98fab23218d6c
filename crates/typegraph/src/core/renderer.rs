//! Core renderer trait for diagram output
//!
//! This trait defines the interface for serializing a finished type graph
//! into a diagram markup format.

use anyhow::Result;

use crate::plugins::graph::{LinkSet, TypeGraph};

/// Core trait for diagram renderers
///
/// Renderers receive a graph whose display names are already resolved and
/// the link set derived from it. Rendering must be a pure function of those
/// two inputs.
///
/// # Example
/// ```
/// use typegraph::core::Renderer;
/// use typegraph::plugins::graph::{LinkSet, TypeGraph};
/// use typegraph::plugins::plantuml::PlantUmlRenderer;
///
/// let graph = TypeGraph::new();
/// let renderer = PlantUmlRenderer::new();
/// let output = renderer.render(&graph, &LinkSet::collect(&graph)).unwrap();
/// assert!(output.starts_with("@startuml"));
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the graph and its links into the output format
    fn render(&self, graph: &TypeGraph, links: &LinkSet) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
