use grin_core::{Edge, NodeId};
use grin_graph::{
    complete_graph, cycle_graph, empty_graph, null_graph, path_graph, petersen_graph, star_graph,
};
use grin_invariants::{
    clique_number, independence_number, is_clique, is_independent_set, is_k_independent_set,
    is_matching, is_maximal_matching, is_vertex_cover, k_independence_number, matching_number,
    max_clique, max_matching, min_maximal_matching_number, min_vertex_cover, vertex_cover_number,
    Method,
};

fn nodes(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::from_raw).collect()
}

fn edge(a: u64, b: u64) -> Edge {
    Edge::new(NodeId::from_raw(a), NodeId::from_raw(b))
}

const METHODS: [Method; 2] = [Method::BruteForce, Method::Ilp];

#[test]
fn independent_set_predicates() {
    let graph = cycle_graph(5);
    assert!(is_independent_set(&graph, &nodes(&[0, 2])).unwrap());
    assert!(!is_independent_set(&graph, &nodes(&[0, 1])).unwrap());
    assert!(is_k_independent_set(&graph, &nodes(&[0, 1, 3]), 2).unwrap());
    assert!(!is_k_independent_set(&graph, &nodes(&[0, 1, 2]), 2).unwrap());
}

#[test]
fn independence_numbers() {
    for method in METHODS {
        assert_eq!(independence_number(&petersen_graph(), method).unwrap(), Some(4));
        assert_eq!(independence_number(&star_graph(5), method).unwrap(), Some(5));
        assert_eq!(independence_number(&complete_graph(6), method).unwrap(), Some(1));
        assert_eq!(independence_number(&empty_graph(3), method).unwrap(), Some(3));
        assert_eq!(independence_number(&null_graph(), method).unwrap(), Some(0));
        assert_eq!(k_independence_number(&cycle_graph(5), 2, method).unwrap(), Some(3));
        assert_eq!(k_independence_number(&complete_graph(4), 4, method).unwrap(), Some(4));
    }
}

#[test]
fn matching_predicates() {
    let graph = path_graph(4);
    assert!(is_matching(&graph, &[edge(0, 1), edge(2, 3)]));
    assert!(!is_matching(&graph, &[edge(0, 1), edge(1, 2)]));
    assert!(is_maximal_matching(&graph, &[edge(1, 2)]));
    assert!(!is_maximal_matching(&graph, &[edge(0, 1)]));
    // Non-edges are dropped before the check.
    assert!(is_matching(&graph, &[edge(0, 3), edge(0, 1)]));
}

#[test]
fn matching_numbers() {
    for method in METHODS {
        for n in 2..8 {
            let graph = path_graph(n);
            let edges = n - 1;
            assert_eq!(matching_number(&graph, method).unwrap(), Some((edges + 1) / 2));
        }
        assert_eq!(matching_number(&star_graph(6), method).unwrap(), Some(1));
        assert_eq!(matching_number(&petersen_graph(), method).unwrap(), Some(5));
        assert_eq!(matching_number(&empty_graph(4), method).unwrap(), Some(0));
    }
    let witness = max_matching(&petersen_graph(), Method::Ilp).unwrap().unwrap();
    assert!(is_matching(&petersen_graph(), &witness));
}

#[test]
fn minimum_maximal_matchings() {
    for n in 2..5 {
        assert_eq!(min_maximal_matching_number(&path_graph(n)).unwrap(), Some(1));
    }
    assert_eq!(min_maximal_matching_number(&path_graph(6)).unwrap(), Some(2));
    assert_eq!(min_maximal_matching_number(&empty_graph(3)).unwrap(), Some(0));
}

#[test]
fn vertex_covers() {
    for method in METHODS {
        assert_eq!(vertex_cover_number(&complete_graph(4), method).unwrap(), Some(3));
        assert_eq!(vertex_cover_number(&star_graph(5), method).unwrap(), Some(1));
        assert_eq!(vertex_cover_number(&cycle_graph(5), method).unwrap(), Some(3));
        assert_eq!(vertex_cover_number(&empty_graph(5), method).unwrap(), Some(0));
    }
    let cover = min_vertex_cover(&petersen_graph(), Method::BruteForce)
        .unwrap()
        .unwrap();
    assert!(is_vertex_cover(&petersen_graph(), &cover));
    assert_eq!(cover.len(), 6);
}

#[test]
fn cliques() {
    for method in METHODS {
        for n in 1..7 {
            assert_eq!(clique_number(&complete_graph(n), method).unwrap(), Some(n));
        }
        assert_eq!(clique_number(&cycle_graph(5), method).unwrap(), Some(2));
        assert_eq!(clique_number(&petersen_graph(), method).unwrap(), Some(2));
        assert_eq!(clique_number(&empty_graph(3), method).unwrap(), Some(1));
        assert_eq!(clique_number(&null_graph(), method).unwrap(), Some(0));
    }
    let clique = max_clique(&complete_graph(4), Method::BruteForce).unwrap().unwrap();
    assert!(is_clique(&complete_graph(4), &clique));
    assert!(!is_clique(&path_graph(3), &nodes(&[0, 1, 2])));
}
