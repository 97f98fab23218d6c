//! Link collection
//!
//! Derives the directed `source --> target` relationships of a graph from
//! the field types of its nodes. Links are keyed by display name, so they
//! must be collected after display names are resolved.

use std::collections::HashMap;
use tracing::{debug, trace};

use super::model::{Node, TypeGraph};

/// Targets of one node's fields, deduplicated, in first-seen order
///
/// The target is looked up by simple name first and then by fully-qualified
/// name. Self references are kept.
pub fn collect_links(node: &Node, graph: &TypeGraph) -> Vec<String> {
    let mut targets: Vec<String> = Vec::new();
    for field in node.fields() {
        let Some(field_type) = &field.field_type else {
            continue;
        };
        let type_ref = field_type.type_ref();
        let target = graph
            .get(type_ref.simple_name())
            .or_else(|| graph.get(type_ref.full_name()));
        if let Some(target) = target {
            let name = target.display_name();
            if !targets.iter().any(|t| t == name) {
                trace!(source = %node.display_name(), target = %name, "Link");
                targets.push(name.to_string());
            }
        }
    }
    targets
}

/// Links of a whole graph, keyed by source display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    sources: Vec<String>,
    targets: HashMap<String, Vec<String>>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the links of every node, in registration order
    pub fn collect(graph: &TypeGraph) -> Self {
        let mut links = Self::new();
        for node in graph.nodes() {
            for target in collect_links(node, graph) {
                links.add(node.display_name(), target);
            }
        }
        debug!(edge_count = links.edge_count(), "Links collected");
        links
    }

    /// Add a link; returns false if it was already present
    pub fn add(&mut self, source: impl Into<String>, target: impl Into<String>) -> bool {
        let source = source.into();
        let target = target.into();
        if !self.targets.contains_key(&source) {
            self.sources.push(source.clone());
        }
        let entry = self.targets.entry(source).or_default();
        if entry.contains(&target) {
            return false;
        }
        entry.push(target);
        true
    }

    /// Targets of `source`, empty when it has none
    pub fn targets(&self, source: &str) -> &[String] {
        self.targets.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources with their targets, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sources
            .iter()
            .map(move |s| (s.as_str(), self.targets(s)))
    }

    pub fn edge_count(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}
