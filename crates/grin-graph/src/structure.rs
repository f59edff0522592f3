//! Forbidden induced subgraph tests.
//!
//! Each test enumerates the vertex subsets of the pattern's order and compares
//! the sorted induced degree sequence, which identifies the triangle, the claw
//! `K_{1,3}` and the bull up to isomorphism.

use std::collections::BTreeSet;

use grin_core::{GraphView, NodeId};
use itertools::Itertools;

/// Returns whether every pair of distinct vertices is adjacent.
pub fn is_complete_graph<G: GraphView>(graph: &G) -> bool {
    let n = graph.order();
    graph.size() == n * n.saturating_sub(1) / 2
}

/// Returns whether the graph has no triangle.
pub fn is_triangle_free<G: GraphView>(graph: &G) -> bool {
    !has_induced(graph, 3, &[2, 2, 2])
}

/// Returns whether the graph has no induced claw.
pub fn is_claw_free<G: GraphView>(graph: &G) -> bool {
    !has_induced(graph, 4, &[1, 1, 1, 3])
}

/// Returns whether the graph has no induced bull (a triangle with two pendant
/// edges on distinct vertices).
pub fn is_bull_free<G: GraphView>(graph: &G) -> bool {
    !has_induced(graph, 5, &[1, 1, 2, 3, 3])
}

fn has_induced<G: GraphView>(graph: &G, order: usize, degrees: &[usize]) -> bool {
    let nodes: Vec<NodeId> = graph.vertices().collect();
    nodes.into_iter().combinations(order).any(|subset| {
        let members: BTreeSet<NodeId> = subset.iter().copied().collect();
        let mut local: Vec<usize> = subset
            .iter()
            .map(|node| {
                graph
                    .neighbors(*node)
                    .map(|ns| ns.filter(|other| members.contains(other)).count())
                    .unwrap_or(0)
            })
            .collect();
        local.sort_unstable();
        local == degrees
    })
}
