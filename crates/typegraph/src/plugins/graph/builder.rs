//! Graph builder
//!
//! Expands a working set of root types into a [`TypeGraph`]. Every type is
//! registered before its supertypes and field types are visited, and
//! membership is checked before every recursion, so cyclic type graphs
//! terminate and no type is expanded twice.

use std::fmt;

use tracing::{debug, info, span, trace, warn, Level};

use super::filter::FieldFilter;
use super::model::{FieldType, Node, NodeField, TypeGraph};
use crate::core::{DiagramError, TypeIntrospector, TypeKind, TypeRef};

/// Supertype shared by every class; never drawn
pub const UNIVERSAL_ROOT: &str = "java.lang.Object";

/// How deep the builder may recurse from a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthLimit {
    /// Recurse while `depth + 1 < max`
    Bounded(u32),
    Unbounded,
}

impl DepthLimit {
    /// Negative values mean unbounded, matching the `-1` CLI convention
    pub fn from_signed(value: i64) -> Self {
        if value < 0 {
            DepthLimit::Unbounded
        } else {
            DepthLimit::Bounded(u32::try_from(value).unwrap_or(u32::MAX))
        }
    }

    /// Whether a node at `depth` may expand the types it references
    pub fn allows_descent(self, depth: u32) -> bool {
        match self {
            DepthLimit::Unbounded => true,
            DepthLimit::Bounded(max) => depth.saturating_add(1) < max,
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::Bounded(2)
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Bounded(max) => write!(f, "{}", max),
            DepthLimit::Unbounded => write!(f, "-1"),
        }
    }
}

/// Expansion settings shared by every root of one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    pub max_depth: DepthLimit,
    /// Package substrings accepted in single-root mode
    pub package_filters: Vec<String>,
    /// Supertype that is never expanded or drawn
    pub universal_root: Option<String>,
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: DepthLimit) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_package_filter(mut self, filter: impl Into<String>) -> Self {
        self.package_filters.push(filter.into());
        self
    }

    pub fn with_package_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.package_filters
            .extend(filters.into_iter().map(Into::into));
        self
    }

    pub fn with_universal_root(mut self, root: Option<String>) -> Self {
        self.universal_root = root;
        self
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            max_depth: DepthLimit::default(),
            package_filters: Vec::new(),
            universal_root: Some(UNIVERSAL_ROOT.to_string()),
        }
    }
}

/// Outcome of expanding one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The type was already in the graph and was left untouched
    Existing,
    /// The type was expanded and registered
    Registered,
    /// The type was expanded but is outside the inclusion policy
    Detached(Node),
}

/// Expands root types into a graph using a metadata provider
pub struct GraphBuilder<'a> {
    introspector: &'a dyn TypeIntrospector,
    working_set: Vec<TypeRef>,
    options: GraphOptions,
    field_filter: FieldFilter,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder; duplicate roots are dropped, first occurrence wins
    pub fn new<I, R>(introspector: &'a dyn TypeIntrospector, roots: I, options: GraphOptions) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TypeRef>,
    {
        let mut working_set: Vec<TypeRef> = Vec::new();
        for root in roots {
            let root = root.into();
            if !working_set.contains(&root) {
                working_set.push(root);
            }
        }
        Self {
            introspector,
            working_set,
            options,
            field_filter: FieldFilter::default(),
        }
    }

    pub fn with_field_filter(mut self, field_filter: FieldFilter) -> Self {
        self.field_filter = field_filter;
        self
    }

    pub fn working_set(&self) -> &[TypeRef] {
        &self.working_set
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Inclusion policy
    ///
    /// With several roots the diagram is scoped to exactly those roots. With
    /// zero or one root, any type whose package contains one of the package
    /// filters is kept.
    pub fn keep_it(&self, type_ref: &TypeRef) -> bool {
        if self.working_set.len() > 1 {
            return self.working_set.contains(type_ref);
        }
        match type_ref.package() {
            Some(package) => self
                .options
                .package_filters
                .iter()
                .any(|f| package.contains(f.as_str())),
            None => false,
        }
    }

    /// Expand every root, in order, into a fresh graph
    pub fn build(&self) -> Result<TypeGraph, DiagramError> {
        if self.working_set.is_empty() {
            return Err(DiagramError::EmptyWorkingSet);
        }

        let build_span = span!(
            Level::INFO,
            "build_graph",
            roots = self.working_set.len(),
            max_depth = %self.options.max_depth
        );
        let _enter = build_span.enter();

        let mut graph = TypeGraph::new();
        for root in &self.working_set {
            match self.expand(&mut graph, root, 0) {
                Some(Expansion::Detached(_)) => {
                    debug!(root = %root, "Root is outside the inclusion policy, not registered")
                }
                Some(_) => {}
                None => warn!(root = %root, "Skipping unresolvable root"),
            }
        }

        info!(node_count = graph.node_count(), "Graph built");
        Ok(graph)
    }

    /// Expand `type_ref` at `depth`
    ///
    /// Returns `None` when the metadata lookup fails; the caller treats the
    /// reference as a plain label.
    pub fn expand(&self, graph: &mut TypeGraph, type_ref: &TypeRef, depth: u32) -> Option<Expansion> {
        if graph.contains(type_ref.full_name()) {
            trace!(type_name = %type_ref, "Already expanded");
            return Some(Expansion::Existing);
        }

        let metadata = match self.introspector.lookup(type_ref.full_name()) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(type_name = %type_ref, error = %err, "Unresolvable type, keeping it as a label");
                return None;
            }
        };

        let mut node = Node::new(type_ref.clone(), metadata.kind, metadata.is_abstract);
        let kept = self.keep_it(type_ref);
        if kept {
            // registered before recursing so that cycles find it
            graph.insert(node.clone());
            debug!(type_name = %type_ref, depth, "Expanding type");
        }

        let descend = self.options.max_depth.allows_descent(depth);

        let mut extends = Vec::new();
        if descend {
            let supertype = metadata
                .supertype
                .as_ref()
                .filter(|s| !self.is_universal_root(s));
            for parent in supertype.into_iter().chain(metadata.interfaces.iter()) {
                if let Some(parent) = self.attach_parent(graph, parent, depth) {
                    extends.push(parent);
                }
            }
        }

        let mut fields = Vec::with_capacity(metadata.fields.len());
        for field in &metadata.fields {
            if self.field_filter.is_excluded(field, metadata.kind) {
                trace!(type_name = %type_ref, field = %field.name, "Excluded field");
                continue;
            }

            let declared = &field.declared_type;
            if descend && !graph.contains(declared.full_name()) && self.keep_it(declared) {
                self.expand(graph, declared, depth + 1);
            }

            let field_type = match metadata.kind {
                TypeKind::Enum => None,
                _ if graph.contains(declared.full_name()) => Some(FieldType::Node(declared.clone())),
                _ => {
                    trace!(type_name = %type_ref, field = %field.name, field_type = %declared, "Label-only field");
                    Some(FieldType::Label(declared.clone()))
                }
            };
            fields.push(NodeField::new(field.label(), field_type));
        }

        if kept {
            if let Some(registered) = graph.get_mut(type_ref.full_name()) {
                registered.set_body(extends, fields);
            }
            Some(Expansion::Registered)
        } else {
            node.set_body(extends, fields);
            Some(Expansion::Detached(node))
        }
    }

    fn attach_parent(&self, graph: &mut TypeGraph, parent: &TypeRef, depth: u32) -> Option<TypeRef> {
        if !graph.contains(parent.full_name()) {
            if !self.keep_it(parent) {
                trace!(parent = %parent, "Supertype outside the inclusion policy");
                return None;
            }
            self.expand(graph, parent, depth + 1)?;
        }
        graph
            .contains(parent.full_name())
            .then(|| parent.clone())
    }

    fn is_universal_root(&self, type_ref: &TypeRef) -> bool {
        self.options.universal_root.as_deref() == Some(type_ref.full_name())
    }
}
