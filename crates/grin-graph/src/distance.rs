use std::collections::{BTreeMap, VecDeque};

use grin_core::errors::GrinError;
use grin_core::{GraphView, NodeId};

use crate::graph::unknown_node;

/// Returns the BFS distance from `source` to every reachable vertex.
pub fn distances_from<G: GraphView>(graph: &G, source: NodeId) -> Result<BTreeMap<NodeId, usize>, GrinError> {
    if !graph.contains(source) {
        return Err(unknown_node(source));
    }
    let mut dist = BTreeMap::from([(source, 0usize)]);
    let mut queue = VecDeque::from([(source, 0usize)]);
    while let Some((node, depth)) = queue.pop_front() {
        for neighbour in graph.neighbors(node)? {
            if !dist.contains_key(&neighbour) {
                dist.insert(neighbour, depth + 1);
                queue.push_back((neighbour, depth + 1));
            }
        }
    }
    Ok(dist)
}

/// Returns the length of a shortest `u`-`v` path, or `None` when `v` is unreachable.
pub fn distance<G: GraphView>(graph: &G, u: NodeId, v: NodeId) -> Result<Option<usize>, GrinError> {
    if !graph.contains(v) {
        return Err(unknown_node(v));
    }
    Ok(distances_from(graph, u)?.get(&v).copied())
}
