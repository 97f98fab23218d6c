//! Type graph storage
//!
//! Stores expanded nodes keyed by fully-qualified name, remembering the order
//! in which the builder registered them.

use std::collections::HashMap;
use tracing::trace;

use crate::core::{TypeKind, TypeRef};

/// Type attached to a field
///
/// `Node` means the declared type was registered in the graph when the field
/// was built; `Label` means it was not (outside the inclusion policy, past
/// the depth bound, or unresolvable) and is only printed by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Node(TypeRef),
    Label(TypeRef),
}

impl FieldType {
    pub fn type_ref(&self) -> &TypeRef {
        match self {
            FieldType::Node(r) | FieldType::Label(r) => r,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, FieldType::Node(_))
    }
}

/// A field line of a node: its rendered label and optional type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeField {
    pub label: String,
    pub field_type: Option<FieldType>,
}

impl NodeField {
    pub fn new(label: impl Into<String>, field_type: Option<FieldType>) -> Self {
        Self {
            label: label.into(),
            field_type,
        }
    }
}

/// One expanded type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    type_ref: TypeRef,
    kind: TypeKind,
    is_abstract: bool,
    display_name: String,
    extends: Vec<TypeRef>,
    fields: Vec<NodeField>,
}

impl Node {
    pub fn new(type_ref: TypeRef, kind: TypeKind, is_abstract: bool) -> Self {
        Self {
            display_name: type_ref.simple_name().to_string(),
            type_ref,
            kind,
            is_abstract,
            extends: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Supertypes and interfaces present in the graph, in declaration order
    pub fn extends(&self) -> &[TypeRef] {
        &self.extends
    }

    pub fn fields(&self) -> &[NodeField] {
        &self.fields
    }

    pub(crate) fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    pub(crate) fn set_body(&mut self, extends: Vec<TypeRef>, fields: Vec<NodeField>) {
        self.extends = extends;
        self.fields = fields;
    }
}

/// Graph of expanded types
///
/// At most one node exists per fully-qualified name. Iteration follows
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    nodes: HashMap<String, Node>,
    node_order: Vec<String>,
    names_resolved: bool,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node; returns false and leaves the graph untouched if a
    /// node with the same fully-qualified name already exists
    pub fn insert(&mut self, node: Node) -> bool {
        let key = node.type_ref().full_name().to_string();
        if self.nodes.contains_key(&key) {
            return false;
        }
        trace!(type_name = %key, kind = %node.kind(), "Registering node");
        self.node_order.push(key.clone());
        self.nodes.insert(key, node);
        true
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.nodes.contains_key(full_name)
    }

    pub fn get(&self, full_name: &str) -> Option<&Node> {
        self.nodes.get(full_name)
    }

    pub(crate) fn get_mut(&mut self, full_name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(full_name)
    }

    /// Fully-qualified names in registration order
    pub fn node_order(&self) -> &[String] {
        &self.node_order
    }

    /// Nodes in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|k| self.nodes.get(k))
    }

    /// Nodes in print order (reverse registration order)
    pub fn print_order(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().rev().filter_map(|k| self.nodes.get(k))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn names_resolved(&self) -> bool {
        self.names_resolved
    }

    pub(crate) fn mark_names_resolved(&mut self) {
        self.names_resolved = true;
    }
}
