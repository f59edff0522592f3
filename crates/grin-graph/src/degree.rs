//! Degree statistics.

use std::collections::BTreeSet;

use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::{GraphView, NodeId};

use crate::neighborhoods::{closed_neighborhood, neighborhood};

/// Returns the degrees of the vertices in ascending vertex order.
pub fn degree_sequence<G: GraphView>(graph: &G) -> Result<Vec<usize>, GrinError> {
    graph.vertices().map(|node| graph.degree(node)).collect()
}

/// Returns `δ(G)`, or `0` for the null graph.
pub fn min_degree<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    Ok(degree_sequence(graph)?.into_iter().min().unwrap_or(0))
}

/// Returns `Δ(G)`, or `0` for the null graph.
pub fn max_degree<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    Ok(degree_sequence(graph)?.into_iter().max().unwrap_or(0))
}

/// Returns the mean degree. The null graph has no average degree.
pub fn average_degree<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    let degrees = degree_sequence(graph)?;
    if degrees.is_empty() {
        return Err(GrinError::Graph(ErrorInfo::new(
            "empty-graph",
            "average degree of the null graph is undefined",
        )));
    }
    Ok(degrees.iter().sum::<usize>() as f64 / degrees.len() as f64)
}

/// Counts the vertices of degree exactly `k`.
pub fn number_of_nodes_of_degree_k<G: GraphView>(graph: &G, k: usize) -> Result<usize, GrinError> {
    Ok(degree_sequence(graph)?.into_iter().filter(|d| *d == k).count())
}

/// Counts the leaves.
pub fn number_of_degree_one_nodes<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    number_of_nodes_of_degree_k(graph, 1)
}

/// Counts the vertices of minimum degree.
pub fn number_of_min_degree_nodes<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    number_of_nodes_of_degree_k(graph, min_degree(graph)?)
}

/// Counts the vertices of maximum degree.
pub fn number_of_max_degree_nodes<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    number_of_nodes_of_degree_k(graph, max_degree(graph)?)
}

/// Returns the distinct degrees found in `N(S)`, ascending.
pub fn neighborhood_degree_list<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
) -> Result<Vec<usize>, GrinError> {
    distinct_degrees(graph, neighborhood(graph, nodes)?)
}

/// Returns the distinct degrees found in `N[S]`, ascending.
pub fn closed_neighborhood_degree_list<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
) -> Result<Vec<usize>, GrinError> {
    distinct_degrees(graph, closed_neighborhood(graph, nodes)?)
}

fn distinct_degrees<G: GraphView>(graph: &G, nodes: BTreeSet<NodeId>) -> Result<Vec<usize>, GrinError> {
    let degrees = nodes
        .into_iter()
        .map(|node| graph.degree(node))
        .collect::<Result<BTreeSet<_>, _>>()?;
    Ok(degrees.into_iter().collect())
}

/// Returns whether every vertex has the same degree.
pub fn is_regular<G: GraphView>(graph: &G) -> Result<bool, GrinError> {
    Ok(min_degree(graph)? == max_degree(graph)?)
}

/// Returns whether every vertex has degree `k`.
pub fn is_k_regular<G: GraphView>(graph: &G, k: usize) -> Result<bool, GrinError> {
    Ok(degree_sequence(graph)?.into_iter().all(|d| d == k))
}

/// Returns whether `Δ(G) ≤ 3`.
pub fn is_sub_cubic<G: GraphView>(graph: &G) -> Result<bool, GrinError> {
    Ok(max_degree(graph)? <= 3)
}

/// Returns whether the graph is 3-regular.
pub fn is_cubic<G: GraphView>(graph: &G) -> Result<bool, GrinError> {
    is_k_regular(graph, 3)
}
