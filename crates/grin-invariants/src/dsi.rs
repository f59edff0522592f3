//! Degree sequence bounds used to seed the exhaustive searches.

use grin_core::errors::GrinError;
use grin_core::GraphView;
use grin_graph::degree_sequence;
use grin_search::validate_k;

fn descending_degrees<G: GraphView>(graph: &G) -> Result<Vec<usize>, GrinError> {
    let mut degrees = degree_sequence(graph)?;
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    Ok(degrees)
}

/// Smallest `i` with `k·i + Σ_{j<i} D[j] ≥ k·n`, `D` sorted non-increasingly.
///
/// A lower bound on the k-domination number.
pub fn sub_k_domination_number<G: GraphView>(graph: &G, k: usize) -> Result<usize, GrinError> {
    let k = validate_k(k)?;
    let degrees = descending_degrees(graph)?;
    let n = degrees.len();
    let mut prefix = 0usize;
    for i in 0..=n {
        if k * i + prefix >= k * n {
            return Ok(i);
        }
        if let Some(degree) = degrees.get(i) {
            prefix += degree;
        }
    }
    Ok(n)
}

/// The Slater number, `sub_k_domination_number` with `k = 1`.
pub fn slater<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    sub_k_domination_number(graph, 1)
}

/// Smallest `i` with `Σ_{j<i} D[j] ≥ n`; `None` when even the full degree
/// sum falls short.
pub fn sub_total_domination_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    let degrees = descending_degrees(graph)?;
    let n = degrees.len();
    let mut prefix = 0usize;
    for i in 0..=n {
        if prefix >= n {
            return Ok(Some(i));
        }
        if let Some(degree) = degrees.get(i) {
            prefix += degree;
        }
    }
    Ok(None)
}

/// Largest `t` such that the `t` smallest degrees sum to at most `|E|`.
///
/// An upper bound on the independence number.
pub fn annihilation_number<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    let mut degrees = degree_sequence(graph)?;
    degrees.sort_unstable();
    let size = graph.size();
    let mut prefix = 0usize;
    let mut best = 0usize;
    for (index, degree) in degrees.iter().enumerate() {
        prefix += degree;
        if prefix > size {
            break;
        }
        best = index + 1;
    }
    Ok(best)
}
