//! PlantUML class-diagram renderer
//!
//! Output layout:
//!
//! ```text
//! @startuml
//! '=====================GENERATED========================
//! package shop {
//!     class Order extends BaseEntity {
//!         - customer : Customer
//!     }
//! }
//! Order --> Customer
//! '=====================end==============================
//! @enduml
//! ```
//!
//! Nodes are printed in reverse registration order, so subtypes come before
//! the supertypes they were expanded from. Consecutive nodes of one package
//! share a `package` block; the same package may open several blocks.

use anyhow::Result;
use std::fmt::Write;
use tracing::{debug, span, Level};

use crate::core::{DiagramError, Renderer, TypeKind};
use crate::plugins::graph::{LinkSet, Node, TypeGraph};

pub const START_MARKER: &str = "@startuml";
pub const GENERATED_BANNER: &str = "'=====================GENERATED========================";
pub const END_BANNER: &str = "'=====================end==============================";
pub const END_MARKER: &str = "@enduml";

const NODE_INDENT: &str = "    ";
const FIELD_INDENT: &str = "        ";

/// PlantUML class-diagram renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlRenderer;

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full document
    pub fn render_document(&self, graph: &TypeGraph, links: &LinkSet) -> Result<String, DiagramError> {
        let render_span = span!(Level::INFO, "render_plantuml", node_count = graph.node_count());
        let _enter = render_span.enter();

        let mut out = String::new();
        Self::write_document(&mut out, graph, links)
            .map_err(|e| DiagramError::render_error(e.to_string()))?;

        debug!(output_len = out.len(), "PlantUML rendered");
        Ok(out)
    }

    fn write_document(out: &mut String, graph: &TypeGraph, links: &LinkSet) -> std::fmt::Result {
        writeln!(out, "{}", START_MARKER)?;
        writeln!(out, "{}", GENERATED_BANNER)?;

        for (package, members) in Self::package_groups(graph) {
            match package {
                Some(package) => {
                    writeln!(out, "package {} {{", package)?;
                    for node in members {
                        Self::write_node(out, node, graph)?;
                    }
                    writeln!(out, "}}")?;
                }
                None => {
                    for node in members {
                        Self::write_node(out, node, graph)?;
                    }
                }
            }
        }

        for node in graph.print_order() {
            let source = node.display_name();
            for target in links.targets(source) {
                writeln!(out, "{} --> {}", source, target)?;
            }
        }

        writeln!(out, "{}", END_BANNER)?;
        writeln!(out, "{}", END_MARKER)
    }

    /// Nodes in print order, split into runs of consecutive nodes that share
    /// a package; a package interrupted by another one opens a new block
    fn package_groups(graph: &TypeGraph) -> Vec<(Option<&str>, Vec<&Node>)> {
        let mut groups: Vec<(Option<&str>, Vec<&Node>)> = Vec::new();
        for node in graph.print_order() {
            let package = node.type_ref().package();
            match groups.last_mut() {
                Some((p, members)) if *p == package => members.push(node),
                _ => groups.push((package, vec![node])),
            }
        }
        groups
    }

    fn write_node(out: &mut String, node: &Node, graph: &TypeGraph) -> std::fmt::Result {
        out.push_str(NODE_INDENT);
        if node.is_abstract() && node.kind() != TypeKind::Interface {
            out.push_str("abstract ");
        }
        write!(out, "{} {}", node.kind().keyword(), node.display_name())?;

        let parents: Vec<&str> = node
            .extends()
            .iter()
            .filter_map(|r| graph.get(r.full_name()))
            .map(Node::display_name)
            .collect();
        if !parents.is_empty() {
            write!(out, " extends {}", parents.join(", "))?;
        }
        writeln!(out, " {{")?;

        for field in node.fields() {
            out.push_str(FIELD_INDENT);
            out.push_str(&field.label);
            if let Some(field_type) = &field.field_type {
                write!(out, " : {}", field_type.type_ref().simple_name())?;
            }
            out.push('\n');
        }

        writeln!(out, "{}}}", NODE_INDENT)
    }
}

impl Renderer for PlantUmlRenderer {
    type Output = String;

    fn render(&self, graph: &TypeGraph, links: &LinkSet) -> Result<String> {
        Ok(self.render_document(graph, links)?)
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn format(&self) -> &'static str {
        "puml"
    }
}
