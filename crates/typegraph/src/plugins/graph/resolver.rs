//! Display-name resolution
//!
//! Two types from different packages may share a simple name. The type that
//! was registered first keeps the short name; every later one falls back to
//! its fully-qualified name. A type without a package has no longer name to
//! fall back to and keeps the colliding one; its links then merge with those
//! of the other type.

use std::collections::HashMap;
use tracing::{debug, span, warn, Level};

use super::model::TypeGraph;

/// Assign collision-free display names in registration order
///
/// Runs once per graph; later calls leave the names untouched. Returns the
/// number of nodes that were given their fully-qualified name.
pub fn resolve_display_names(graph: &mut TypeGraph) -> usize {
    if graph.names_resolved() {
        debug!("Display names already resolved");
        return 0;
    }

    let resolve_span = span!(Level::DEBUG, "resolve_display_names", node_count = graph.node_count());
    let _enter = resolve_span.enter();

    let order = graph.node_order().to_vec();
    let mut claimed: HashMap<String, String> = HashMap::with_capacity(order.len());
    let mut forced = 0;

    for full_name in &order {
        let Some(node) = graph.get_mut(full_name) else {
            continue;
        };
        let simple_name = node.type_ref().simple_name().to_string();
        if let Some(owner) = claimed.get(&simple_name) {
            if claimed.contains_key(full_name) {
                warn!(type_name = %full_name, claimed_by = %owner, "Display name collision cannot be resolved, names are shared");
            } else {
                debug!(type_name = %full_name, claimed_by = %owner, "Display name collision, using full name");
            }
            node.set_display_name(full_name.clone());
            forced += 1;
        } else {
            node.set_display_name(simple_name);
        }
        claimed.insert(node.display_name().to_string(), full_name.clone());
    }

    graph.mark_names_resolved();
    forced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TypeKind, TypeRef};
    use crate::plugins::graph::Node;

    fn graph_of(names: &[&str]) -> TypeGraph {
        let mut graph = TypeGraph::new();
        for name in names {
            graph.insert(Node::new(TypeRef::new(*name), TypeKind::Class, false));
        }
        graph
    }

    #[test]
    fn test_first_registered_keeps_short_name() {
        let mut graph = graph_of(&["shop.Item", "stock.Item"]);
        assert_eq!(resolve_display_names(&mut graph), 1);

        assert_eq!(graph.get("shop.Item").unwrap().display_name(), "Item");
        assert_eq!(graph.get("stock.Item").unwrap().display_name(), "stock.Item");
    }

    #[test]
    fn test_registration_order_decides() {
        let mut graph = graph_of(&["stock.Item", "shop.Item"]);
        resolve_display_names(&mut graph);

        assert_eq!(graph.get("stock.Item").unwrap().display_name(), "Item");
        assert_eq!(graph.get("shop.Item").unwrap().display_name(), "shop.Item");
    }

    #[test]
    fn test_three_way_collision() {
        let mut graph = graph_of(&["a.Item", "b.Item", "c.Item", "a.Order"]);
        assert_eq!(resolve_display_names(&mut graph), 2);

        let names: Vec<_> = graph.nodes().map(|n| n.display_name()).collect();
        assert_eq!(names, vec!["Item", "b.Item", "c.Item", "Order"]);
    }

    #[test]
    fn test_type_without_package_keeps_colliding_name() {
        let mut graph = graph_of(&["shop.Item", "Item"]);
        assert_eq!(resolve_display_names(&mut graph), 1);

        assert_eq!(graph.get("shop.Item").unwrap().display_name(), "Item");
        assert_eq!(graph.get("Item").unwrap().display_name(), "Item");
    }

    #[test]
    fn test_resolution_is_one_shot() {
        let mut graph = graph_of(&["a.Item", "b.Item"]);
        assert!(!graph.names_resolved());
        resolve_display_names(&mut graph);
        assert!(graph.names_resolved());
        assert_eq!(resolve_display_names(&mut graph), 0);
        assert_eq!(graph.get("b.Item").unwrap().display_name(), "b.Item");
    }
}
