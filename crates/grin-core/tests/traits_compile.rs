use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use grin_core::{CancelToken, Edge, GraphView, GrinError, Interrupt, NodeId, Unbounded};

/// Minimal adjacency-list graph used to exercise the trait defaults.
#[derive(Default)]
struct ListGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl ListGraph {
    fn from_pairs(order: u64, pairs: &[(u64, u64)]) -> Self {
        let mut graph = ListGraph::default();
        for raw in 0..order {
            graph.adjacency.entry(NodeId::from_raw(raw)).or_default();
        }
        for &(a, b) in pairs {
            let (a, b) = (NodeId::from_raw(a), NodeId::from_raw(b));
            graph.adjacency.entry(a).or_default().insert(b);
            graph.adjacency.entry(b).or_default().insert(a);
        }
        graph
    }
}

impl GraphView for ListGraph {
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.adjacency.keys().copied().collect::<Vec<_>>().into_iter())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Edge> + '_> {
        let edges: BTreeSet<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(u, ns)| ns.iter().map(move |v| Edge::new(*u, *v)))
            .collect();
        Box::new(edges.into_iter().collect::<Vec<_>>().into_iter())
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn neighbors(
        &self,
        node: NodeId,
    ) -> Result<Box<dyn ExactSizeIterator<Item = NodeId> + '_>, GrinError> {
        let ns = self
            .adjacency
            .get(&node)
            .ok_or_else(|| GrinError::graph("unknown-node", "missing"))?;
        Ok(Box::new(ns.iter().copied()))
    }

    fn induced_subgraph(&self, nodes: &BTreeSet<NodeId>) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(u, _)| nodes.contains(u))
            .map(|(u, ns)| (*u, ns.intersection(nodes).copied().collect()))
            .collect();
        ListGraph { adjacency }
    }
}

#[test]
fn trait_defaults_follow_adjacency() {
    let path = ListGraph::from_pairs(3, &[(0, 1), (1, 2)]);
    assert_eq!(path.order(), 3);
    assert_eq!(path.size(), 2);
    assert_eq!(path.degree(NodeId::from_raw(1)).unwrap(), 2);
    assert!(path.is_adjacent(NodeId::from_raw(0), NodeId::from_raw(1)));
    assert!(!path.is_adjacent(NodeId::from_raw(0), NodeId::from_raw(2)));
    assert!(path.is_connected());
    assert!(path.degree(NodeId::from_raw(9)).is_err());
}

#[test]
fn null_graph_is_not_connected() {
    let null = ListGraph::default();
    assert!(!null.is_connected());
}

#[test]
fn restrict_drops_foreign_vertices() {
    let path = ListGraph::from_pairs(3, &[(0, 1), (1, 2)]);
    let restricted = path.restrict(&[NodeId::from_raw(2), NodeId::from_raw(10), NodeId::from_raw(2)]);
    assert_eq!(restricted, BTreeSet::from([NodeId::from_raw(2)]));
    let induced = path.induced_subgraph(&BTreeSet::from([NodeId::from_raw(0), NodeId::from_raw(2)]));
    assert!(!induced.is_connected());
}

#[test]
fn cancel_token_fires_after_cancel() {
    let token = CancelToken::new();
    assert!(token.check().is_ok());
    let shared = token.clone();
    shared.cancel();
    let err = token.check().unwrap_err();
    assert!(matches!(err, GrinError::Search(ref info) if info.code == "cancelled"));
    assert!(Unbounded.check().is_ok());
}

#[test]
fn deadline_token_expires() {
    let token = CancelToken::with_time_limit(Duration::from_millis(0));
    let err = token.check().unwrap_err();
    assert_eq!(err.code(), "deadline-exceeded");
}
