//! Havel-Hakimi residue and its k-generalisation.

use grin_core::errors::GrinError;
use grin_core::GraphView;
use grin_search::{validate_k, HavelHakimi};

use crate::independence::independence_number;
use crate::method::Method;

/// Number of zeros left when the Havel-Hakimi process settles on the
/// degree sequence of `graph`.
pub fn residue<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    Ok(HavelHakimi::from_graph(graph)?.residue())
}

/// `(1/k) · Σ_{i<k} (k - i) · f(i)`, where `f(i)` counts the occurrences of
/// `i` in the elimination sequence. The 1-residue is the residue.
pub fn k_residue<G: GraphView>(graph: &G, k: usize) -> Result<f64, GrinError> {
    let k = validate_k(k)?;
    let process = HavelHakimi::from_graph(graph)?;
    let elimination = process.elimination_sequence().unwrap_or_default();
    let weighted: usize = (0..k)
        .map(|i| {
            let frequency = elimination
                .iter()
                .filter(|value| **value == i as i64)
                .count();
            (k - i) * frequency
        })
        .sum();
    Ok(weighted as f64 / k as f64)
}

/// Smallest `k` whose k-residue reaches the independence number.
pub fn k_residual_index<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    let Some(alpha) = independence_number(graph, method)? else {
        return Ok(None);
    };
    let target = alpha as f64;
    let mut k = 1;
    while k_residue(graph, k)? < target {
        k += 1;
    }
    Ok(Some(k))
}
