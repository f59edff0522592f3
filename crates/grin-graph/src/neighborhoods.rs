//! Neighbourhood queries over vertex sets.
//!
//! Inputs are normalised to `S ∩ V(G)` before use; foreign vertices are ignored.

use std::collections::BTreeSet;

use grin_core::errors::GrinError;
use grin_core::{GraphView, NodeId};

/// Returns `N(S)`, the union of the open neighbourhoods of the members of `S`.
pub fn neighborhood<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<BTreeSet<NodeId>, GrinError> {
    let mut result = BTreeSet::new();
    for node in graph.restrict(nodes) {
        result.extend(graph.neighbors(node)?);
    }
    Ok(result)
}

/// Returns `N[S] = S ∪ N(S)`.
pub fn closed_neighborhood<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
) -> Result<BTreeSet<NodeId>, GrinError> {
    let mut result = neighborhood(graph, nodes)?;
    result.extend(graph.restrict(nodes));
    Ok(result)
}

/// Returns whether `node` is adjacent to some member of `S`.
pub fn are_neighbors<G: GraphView>(graph: &G, node: NodeId, nodes: &[NodeId]) -> Result<bool, GrinError> {
    Ok(neighborhood(graph, nodes)?.contains(&node))
}

/// Returns the vertices adjacent to every member of `S`.
///
/// The common neighbourhood of the empty set is empty.
pub fn common_neighbors<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
) -> Result<BTreeSet<NodeId>, GrinError> {
    let mut members = graph.restrict(nodes).into_iter();
    let Some(first) = members.next() else {
        return Ok(BTreeSet::new());
    };
    let mut result: BTreeSet<NodeId> = graph.neighbors(first)?.collect();
    for node in members {
        let neighbours: BTreeSet<NodeId> = graph.neighbors(node)?.collect();
        result.retain(|candidate| neighbours.contains(candidate));
    }
    Ok(result)
}
