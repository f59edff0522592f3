use std::collections::{BTreeMap, BTreeSet};

use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::{Edge, GraphView, NodeId};

/// Finite simple undirected graph backed by ordered adjacency sets.
///
/// Self-loops are rejected and parallel edges collapse, so every instance is a
/// simple graph. Vertices and neighbourhoods iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl SimpleGraph {
    /// Creates the null graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an edgeless graph on vertices `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        let adjacency = (0..n as u64)
            .map(|raw| (NodeId::from_raw(raw), BTreeSet::new()))
            .collect();
        Self { adjacency }
    }

    /// Builds a graph from raw edge pairs, creating endpoints on demand.
    pub fn from_edges<I>(edges: I) -> Result<Self, GrinError>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(NodeId::from_raw(a), NodeId::from_raw(b))?;
        }
        Ok(graph)
    }

    /// Copies any [`GraphView`] into an owned, mutable graph.
    pub fn from_view<G: GraphView>(view: &G) -> Result<Self, GrinError> {
        let mut adjacency = BTreeMap::new();
        for node in view.vertices() {
            adjacency.insert(node, view.neighbors(node)?.collect());
        }
        Ok(Self { adjacency })
    }

    /// Inserts a new isolated vertex.
    pub fn add_node(&mut self, node: NodeId) -> Result<(), GrinError> {
        if self.adjacency.contains_key(&node) {
            return Err(GrinError::Graph(
                ErrorInfo::new("duplicate-node", "vertex already present")
                    .with_context("node", node),
            ));
        }
        self.adjacency.insert(node, BTreeSet::new());
        Ok(())
    }

    /// Inserts every vertex of `nodes` that is not already present.
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for node in nodes {
            self.adjacency.entry(node).or_default();
        }
    }

    /// Inserts the undirected edge `{a, b}`.
    ///
    /// Missing endpoints are created. Re-inserting an existing edge is a no-op.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GrinError> {
        if a == b {
            return Err(GrinError::Graph(
                ErrorInfo::new("self-loop", "simple graphs do not admit self-loops")
                    .with_context("node", a),
            ));
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        Ok(())
    }

    /// Removes a vertex and all incident edges.
    pub fn remove_node(&mut self, node: NodeId) -> Result<(), GrinError> {
        let neighbours = self
            .adjacency
            .remove(&node)
            .ok_or_else(|| unknown_node(node))?;
        for neighbour in neighbours {
            if let Some(set) = self.adjacency.get_mut(&neighbour) {
                set.remove(&node);
            }
        }
        Ok(())
    }

    /// Removes the edge `{a, b}`.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GrinError> {
        let present = self
            .adjacency
            .get(&a)
            .map(|set| set.contains(&b))
            .unwrap_or(false);
        if !present {
            return Err(GrinError::Graph(
                ErrorInfo::new("unknown-edge", "edge not present")
                    .with_context("u", a)
                    .with_context("v", b),
            ));
        }
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
        Ok(())
    }

    /// Returns the neighbour set of a vertex.
    pub fn neighbor_set(&self, node: NodeId) -> Result<&BTreeSet<NodeId>, GrinError> {
        self.adjacency.get(&node).ok_or_else(|| unknown_node(node))
    }

    /// Returns the complement graph on the same vertex set.
    pub fn complement(&self) -> Self {
        let nodes: BTreeSet<NodeId> = self.adjacency.keys().copied().collect();
        let adjacency = self
            .adjacency
            .iter()
            .map(|(node, neighbours)| {
                let others = nodes
                    .iter()
                    .copied()
                    .filter(|other| other != node && !neighbours.contains(other))
                    .collect();
                (*node, others)
            })
            .collect();
        Self { adjacency }
    }

    /// Returns the smallest unused non-negative vertex identifier.
    pub fn next_free_id(&self) -> NodeId {
        self.adjacency
            .keys()
            .next_back()
            .map(|last| NodeId::from_raw(last.as_raw() + 1))
            .unwrap_or(NodeId::from_raw(0))
    }
}

impl GraphView for SimpleGraph {
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Edge> + '_> {
        let edges: Vec<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(u, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |v| *v > u)
                    .map(move |v| Edge::new(*u, *v))
            })
            .collect();
        Box::new(edges.into_iter())
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn neighbors(
        &self,
        node: NodeId,
    ) -> Result<Box<dyn ExactSizeIterator<Item = NodeId> + '_>, GrinError> {
        Ok(Box::new(self.neighbor_set(node)?.iter().copied()))
    }

    fn induced_subgraph(&self, nodes: &BTreeSet<NodeId>) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(node, _)| nodes.contains(node))
            .map(|(node, neighbours)| (*node, neighbours.intersection(nodes).copied().collect()))
            .collect();
        Self { adjacency }
    }

    fn degree(&self, node: NodeId) -> Result<usize, GrinError> {
        Ok(self.neighbor_set(node)?.len())
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn size(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    fn is_adjacent(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .map(|set| set.contains(&v))
            .unwrap_or(false)
    }
}

pub(crate) fn unknown_node(node: NodeId) -> GrinError {
    GrinError::Graph(
        ErrorInfo::new("unknown-node", "vertex is not part of the graph")
            .with_context("node", node),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut graph = SimpleGraph::with_nodes(2);
        let err = graph.add_edge(node(1), node(1)).unwrap_err();
        assert_eq!(err.code(), "self-loop");
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut graph = SimpleGraph::new();
        graph.add_edge(node(0), node(1)).unwrap();
        graph.add_edge(node(1), node(0)).unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 2);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut graph = SimpleGraph::from_edges([(0, 1), (1, 2), (0, 2)]).unwrap();
        graph.remove_node(node(1)).unwrap();
        assert_eq!(graph.size(), 1);
        assert!(graph.remove_node(node(1)).is_err());
        assert!(graph.remove_edge(node(0), node(1)).is_err());
    }

    #[test]
    fn complement_of_path_is_single_edge() {
        let graph = SimpleGraph::from_edges([(0, 1), (1, 2)]).unwrap();
        let complement = graph.complement();
        assert_eq!(complement.edges().collect::<Vec<_>>(), vec![Edge::new(node(0), node(2))]);
    }

    #[test]
    fn from_view_copies_adjacency() {
        let graph = SimpleGraph::from_edges([(0, 1), (1, 2), (5, 6)]).unwrap();
        let copy = SimpleGraph::from_view(&graph).unwrap();
        assert_eq!(copy, graph);
    }

    #[test]
    fn next_free_id_follows_largest() {
        assert_eq!(SimpleGraph::new().next_free_id(), node(0));
        assert_eq!(SimpleGraph::with_nodes(4).next_free_id(), node(4));
    }
}
