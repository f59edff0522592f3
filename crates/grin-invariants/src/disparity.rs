//! Vertex disparity: the number of distinct degrees seen around a vertex.

use std::collections::BTreeSet;

use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::{GraphView, NodeId};
use grin_search::validate_k;

fn neighbour_degrees<G: GraphView>(graph: &G, node: NodeId) -> Result<BTreeSet<usize>, GrinError> {
    let mut degrees = BTreeSet::new();
    for neighbour in graph.neighbors(node)? {
        degrees.insert(graph.degree(neighbour)?);
    }
    Ok(degrees)
}

/// Number of distinct degrees among the neighbours of `node`.
pub fn vertex_disparity<G: GraphView>(graph: &G, node: NodeId) -> Result<usize, GrinError> {
    Ok(neighbour_degrees(graph, node)?.len())
}

/// Number of distinct degrees in the closed neighbourhood of `node`.
pub fn closed_vertex_disparity<G: GraphView>(graph: &G, node: NodeId) -> Result<usize, GrinError> {
    let mut degrees = neighbour_degrees(graph, node)?;
    degrees.insert(graph.degree(node)?);
    Ok(degrees.len())
}

/// Vertex disparities in vertex order.
pub fn disparity_sequence<G: GraphView>(graph: &G) -> Result<Vec<usize>, GrinError> {
    graph.vertices().map(|node| vertex_disparity(graph, node)).collect()
}

/// Closed vertex disparities in vertex order.
pub fn closed_disparity_sequence<G: GraphView>(graph: &G) -> Result<Vec<usize>, GrinError> {
    graph
        .vertices()
        .map(|node| closed_vertex_disparity(graph, node))
        .collect()
}

/// Caro-Wei style sum `Σ 1 / (1 + disp(v))`.
pub fn cw_disparity<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    Ok(disparity_sequence(graph)?.iter().map(|d| 1.0 / (1.0 + *d as f64)).sum())
}

/// Closed variant of [`cw_disparity`].
pub fn closed_cw_disparity<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    Ok(closed_disparity_sequence(graph)?
        .iter()
        .map(|d| 1.0 / (1.0 + *d as f64))
        .sum())
}

fn inverse_sum(sequence: &[usize]) -> Option<f64> {
    if sequence.contains(&0) {
        return None;
    }
    Some(sequence.iter().map(|d| 1.0 / *d as f64).sum())
}

/// `Σ 1 / disp(v)`; undefined when some vertex is isolated.
pub fn inverse_disparity<G: GraphView>(graph: &G) -> Result<Option<f64>, GrinError> {
    Ok(inverse_sum(&disparity_sequence(graph)?))
}

/// `Σ 1 / disp[v]` over closed disparities.
pub fn closed_inverse_disparity<G: GraphView>(graph: &G) -> Result<Option<f64>, GrinError> {
    Ok(inverse_sum(&closed_disparity_sequence(graph)?))
}

fn mean(sequence: &[usize]) -> Option<f64> {
    if sequence.is_empty() {
        return None;
    }
    Some(sequence.iter().sum::<usize>() as f64 / sequence.len() as f64)
}

/// Mean vertex disparity; undefined on the null graph.
pub fn average_vertex_disparity<G: GraphView>(graph: &G) -> Result<Option<f64>, GrinError> {
    Ok(mean(&disparity_sequence(graph)?))
}

/// Mean closed vertex disparity; undefined on the null graph.
pub fn average_closed_vertex_disparity<G: GraphView>(graph: &G) -> Result<Option<f64>, GrinError> {
    Ok(mean(&closed_disparity_sequence(graph)?))
}

fn weighted_top(mut sequence: Vec<usize>, k: usize) -> Result<f64, GrinError> {
    let k = validate_k(k)?;
    if k > sequence.len() {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new("k-exceeds-order", "k must not exceed the order of the graph")
                .with_context("k", k)
                .with_context("order", sequence.len()),
        ));
    }
    sequence.sort_unstable_by(|a, b| b.cmp(a));
    let weighted: usize = sequence
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, d)| (k - i) * d)
        .sum();
    Ok(2.0 * weighted as f64 / (k * (k + 1)) as f64)
}

/// Weighted mean of the `k` largest disparities,
/// `2 / (k(k+1)) · Σ_{i<k} (k - i) · D[i]`.
pub fn k_disparity<G: GraphView>(graph: &G, k: usize) -> Result<f64, GrinError> {
    weighted_top(disparity_sequence(graph)?, k)
}

/// [`k_disparity`] over closed disparities.
pub fn closed_k_disparity<G: GraphView>(graph: &G, k: usize) -> Result<f64, GrinError> {
    weighted_top(closed_disparity_sequence(graph)?, k)
}

/// `closed_k_disparity` with `k = n`.
pub fn irregularity<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    closed_k_disparity(graph, graph.order())
}
