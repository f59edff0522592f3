//! Degree based topological indices, each a fold `Σ_{uv ∈ E} f(d(u), d(v))`.

use grin_core::errors::GrinError;
use grin_core::GraphView;

fn edge_fold<G, F>(graph: &G, weight: F) -> Result<f64, GrinError>
where
    G: GraphView,
    F: Fn(f64, f64) -> f64,
{
    let mut total = 0.0;
    for edge in graph.edges() {
        let du = graph.degree(edge.u())? as f64;
        let dv = graph.degree(edge.v())? as f64;
        total += weight(du, dv);
    }
    Ok(total)
}

/// Randić index, `Σ (d(u) d(v))^(-1/2)`.
pub fn randic_index<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    edge_fold(graph, |du, dv| (du * dv).powf(-0.5))
}

/// Generalised Randić index, `Σ (d(u) d(v))^alpha`.
pub fn generalized_randic_index<G: GraphView>(graph: &G, alpha: f64) -> Result<f64, GrinError> {
    edge_fold(graph, |du, dv| (du * dv).powf(alpha))
}

/// Augmented Randić index, `Σ 1 / max(d(u), d(v))`.
pub fn augmented_randic_index<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    edge_fold(graph, |du, dv| 1.0 / du.max(dv))
}

/// Harmonic index, `Σ 2 / (d(u) + d(v))`.
pub fn harmonic_index<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    edge_fold(graph, |du, dv| 2.0 / (du + dv))
}

/// Atom-bond connectivity index, `Σ sqrt((d(u) + d(v) - 2) / (d(u) d(v)))`.
pub fn atom_bond_connectivity_index<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    edge_fold(graph, |du, dv| ((du + dv - 2.0) / (du * dv)).sqrt())
}

/// Sum connectivity index, `Σ (d(u) + d(v))^(-1/2)`.
pub fn sum_connectivity_index<G: GraphView>(graph: &G) -> Result<f64, GrinError> {
    edge_fold(graph, |du, dv| (du + dv).powf(-0.5))
}
