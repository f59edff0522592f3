use std::collections::BTreeMap;

use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::{GraphView, NodeId};
use grin_graph::distances_from;
use itertools::Itertools;

/// Largest value of `d(u, v) + d(v, w) + d(u, w)` over vertex triples.
///
/// Defined for connected graphs on at least three vertices.
pub fn triameter<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    if graph.order() < 3 || !graph.is_connected() {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new(
                "triameter-undefined",
                "triameter needs a connected graph on at least three vertices",
            )
            .with_context("order", graph.order()),
        ));
    }
    let mut table: BTreeMap<NodeId, BTreeMap<NodeId, usize>> = BTreeMap::new();
    for node in graph.vertices() {
        table.insert(node, distances_from(graph, node)?);
    }
    let d = |a: NodeId, b: NodeId| table.get(&a).and_then(|row| row.get(&b)).copied().unwrap_or(0);
    let nodes: Vec<NodeId> = table.keys().copied().collect();
    Ok(nodes
        .into_iter()
        .tuple_combinations()
        .map(|(u, v, w)| d(u, v) + d(v, w) + d(u, w))
        .max()
        .unwrap_or(0))
}
