use grin_core::{CancelToken, Unbounded};
use grin_graph::{
    complete_graph, cycle_graph, empty_graph, null_graph, path_graph, petersen_graph, star_graph,
};
use grin_invariants::{
    chromatic_number, chromatic_number_contraction, chromatic_number_ilp, chromatic_number_with,
    BranchAndBound, Method,
};

#[test]
fn chromatic_number_of_families() {
    for method in [Method::BruteForce, Method::Ilp] {
        for n in 1..6 {
            assert_eq!(chromatic_number(&complete_graph(n), method).unwrap(), n);
        }
        assert_eq!(chromatic_number(&cycle_graph(5), method).unwrap(), 3);
        assert_eq!(chromatic_number(&cycle_graph(6), method).unwrap(), 2);
        assert_eq!(chromatic_number(&petersen_graph(), method).unwrap(), 3);
        assert_eq!(chromatic_number(&star_graph(4), method).unwrap(), 2);
        assert_eq!(chromatic_number(&empty_graph(3), method).unwrap(), 1);
        assert_eq!(chromatic_number(&null_graph(), method).unwrap(), 0);
    }
}

#[test]
fn ilp_respects_node_limit() {
    let oracle = BranchAndBound::new().with_node_limit(5);
    let err = chromatic_number_ilp(&petersen_graph(), &oracle).unwrap_err();
    assert_eq!(err.code(), "node-limit");
}

#[test]
fn contraction_bound() {
    assert_eq!(chromatic_number_contraction(&petersen_graph()).unwrap(), 3);
    assert_eq!(chromatic_number_contraction(&cycle_graph(5)).unwrap(), 3);
    assert_eq!(chromatic_number_contraction(&cycle_graph(6)).unwrap(), 2);
    assert_eq!(chromatic_number_contraction(&complete_graph(4)).unwrap(), 4);
    assert_eq!(chromatic_number_contraction(&path_graph(5)).unwrap(), 2);
    assert_eq!(chromatic_number_contraction(&null_graph()).unwrap(), 0);
}

#[test]
fn contraction_never_undercuts_the_exact_value() {
    for graph in [petersen_graph(), cycle_graph(7), star_graph(5), path_graph(6)] {
        let exact = chromatic_number(&graph, Method::BruteForce).unwrap();
        assert!(chromatic_number_contraction(&graph).unwrap() >= exact);
    }
}

#[test]
fn backtracking_colouring_stops_on_cancel() {
    let graph = petersen_graph();
    let oracle = BranchAndBound::new();
    assert_eq!(chromatic_number_with(&graph, Method::BruteForce, &Unbounded, &oracle).unwrap(), 3);

    let token = CancelToken::new();
    token.cancel();
    for method in [Method::BruteForce, Method::Ilp] {
        let err = chromatic_number_with(&graph, method, &token, &oracle).unwrap_err();
        assert_eq!(err.code(), "cancelled");
    }
}
