use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::rng::RngHandle;
use grin_core::NodeId;
use itertools::Itertools;
use rand::Rng;

use crate::graph::SimpleGraph;

/// Returns the graph with no vertices.
pub fn null_graph() -> SimpleGraph {
    SimpleGraph::new()
}

/// Returns the graph with a single vertex `0`.
pub fn trivial_graph() -> SimpleGraph {
    SimpleGraph::with_nodes(1)
}

/// Returns the edgeless graph on vertices `0..n`.
pub fn empty_graph(n: usize) -> SimpleGraph {
    SimpleGraph::with_nodes(n)
}

/// Returns the complete graph `K_n` on vertices `0..n`.
pub fn complete_graph(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(n);
    for (a, b) in (0..n as u64).tuple_combinations() {
        link(&mut graph, a, b);
    }
    graph
}

/// Returns the path `P_n` with edges `i -- i+1`.
pub fn path_graph(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(n);
    for i in 1..n as u64 {
        link(&mut graph, i - 1, i);
    }
    graph
}

/// Returns the cycle `C_n`. For `n < 3` this degenerates to the path `P_n`.
pub fn cycle_graph(n: usize) -> SimpleGraph {
    let mut graph = path_graph(n);
    if n >= 3 {
        link(&mut graph, n as u64 - 1, 0);
    }
    graph
}

/// Returns the star with centre `0` and leaves `1..=n`.
pub fn star_graph(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(n + 1);
    for leaf in 1..=n as u64 {
        link(&mut graph, 0, leaf);
    }
    graph
}

/// Returns the Petersen graph: outer 5-cycle `0..5`, spokes `i -- i+5` and
/// the inner pentagram on `5..10`.
pub fn petersen_graph() -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(10);
    for i in 0..5u64 {
        link(&mut graph, i, (i + 1) % 5);
        link(&mut graph, i, i + 5);
        link(&mut graph, i + 5, (i + 2) % 5 + 5);
    }
    graph
}

/// Returns two copies of `K_m1` joined by a path through `m2` extra vertices.
///
/// The left bell occupies `0..m1`, the path `m1..m1+m2` and the right bell the
/// remaining `m1` vertices.
pub fn barbell_graph(m1: usize, m2: usize) -> Result<SimpleGraph, GrinError> {
    if m1 < 2 {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new("invalid-barbell", "barbell bells need at least two vertices")
                .with_context("m1", m1),
        ));
    }
    let (m1, m2) = (m1 as u64, m2 as u64);
    let mut graph = SimpleGraph::with_nodes((2 * m1 + m2) as usize);
    let right = m1 + m2;
    for (a, b) in (0..m1).tuple_combinations() {
        link(&mut graph, a, b);
        link(&mut graph, right + a, right + b);
    }
    for i in m1 - 1..right {
        link(&mut graph, i, i + 1);
    }
    Ok(graph)
}

/// Returns the circular ladder `CL_n`: two `n`-cycles joined by rungs `i -- i+n`.
pub fn circular_ladder_graph(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::with_nodes(2 * n);
    let n = n as u64;
    for i in 0..n {
        link(&mut graph, i, i + n);
        if n >= 2 {
            let next = (i + 1) % n;
            if next != i {
                link(&mut graph, i, next);
                link(&mut graph, i + n, next + n);
            }
        }
    }
    graph
}

/// Generates an Erdős–Rényi `G(n, p)` graph with deterministic randomness.
pub fn gnp_random_graph(n: usize, p: f64, rng: &mut RngHandle) -> Result<SimpleGraph, GrinError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                .with_context("p", p),
        ));
    }
    let mut graph = SimpleGraph::with_nodes(n);
    for (a, b) in (0..n as u64).tuple_combinations() {
        if rng.gen_bool(p) {
            link(&mut graph, a, b);
        }
    }
    Ok(graph)
}

fn link(graph: &mut SimpleGraph, a: u64, b: u64) {
    // endpoints always differ for the generated families
    let _ = graph.add_edge(NodeId::from_raw(a), NodeId::from_raw(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use grin_core::GraphView;

    #[test]
    fn family_sizes() {
        assert_eq!(complete_graph(5).size(), 10);
        assert_eq!(path_graph(5).size(), 4);
        assert_eq!(cycle_graph(5).size(), 5);
        assert_eq!(cycle_graph(2).size(), 1);
        assert_eq!(star_graph(4).order(), 5);
        assert_eq!(petersen_graph().size(), 15);
        assert_eq!(circular_ladder_graph(4).size(), 12);
        assert_eq!(null_graph().order(), 0);
        assert_eq!(trivial_graph().order(), 1);
    }

    #[test]
    fn barbell_layout() {
        let graph = barbell_graph(3, 2).unwrap();
        assert_eq!(graph.order(), 8);
        assert_eq!(graph.size(), 3 + 3 + 3);
        assert!(graph.is_connected());
        assert!(barbell_graph(1, 2).is_err());
        let direct = barbell_graph(3, 0).unwrap();
        assert!(direct.is_adjacent(NodeId::from_raw(2), NodeId::from_raw(3)));
    }

    #[test]
    fn gnp_extremes() {
        let mut rng = RngHandle::from_seed(3);
        assert_eq!(gnp_random_graph(6, 1.0, &mut rng).unwrap().size(), 15);
        assert_eq!(gnp_random_graph(6, 0.0, &mut rng).unwrap().size(), 0);
        assert!(gnp_random_graph(6, 1.5, &mut rng).is_err());
    }
}
