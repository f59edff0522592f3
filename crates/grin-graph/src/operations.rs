use std::collections::BTreeSet;

use grin_core::errors::GrinError;
use grin_core::{GraphView, NodeId};

use crate::graph::SimpleGraph;
use crate::neighborhoods::neighborhood;

/// Contracts the vertices of `nodes` into a single vertex, in place.
///
/// The members of `S ∩ V(G)` are removed and `new_node` (default `min(S)`) is
/// inserted adjacent to every vertex of `N(S) \ S`. An empty intersection
/// leaves the graph untouched.
pub fn contract_nodes(
    graph: &mut SimpleGraph,
    nodes: &[NodeId],
    new_node: Option<NodeId>,
) -> Result<(), GrinError> {
    let members = graph.restrict(nodes);
    let Some(&smallest) = members.iter().next() else {
        return Ok(());
    };
    let member_list: Vec<NodeId> = members.iter().copied().collect();
    let boundary: BTreeSet<NodeId> = neighborhood(graph, &member_list)?
        .difference(&members)
        .copied()
        .collect();
    for node in &member_list {
        graph.remove_node(*node)?;
    }
    let merged = new_node.unwrap_or(smallest);
    graph.add_nodes_from([merged]);
    for outside in boundary {
        if outside != merged {
            graph.add_edge(merged, outside)?;
        }
    }
    Ok(())
}
