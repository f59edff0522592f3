use grin_core::rng::RngHandle;
use grin_graph::gnp_random_graph;
use grin_invariants::{
    chromatic_number, clique_number, domination_number, independence_number,
    independent_domination_number, k_domination_number, k_independence_number, matching_number,
    total_domination_number, vertex_cover_number, Method,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn covering_problems_agree(seed in any::<u64>(), n in 0usize..9, p in 0.0f64..=1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        prop_assert_eq!(
            domination_number(&graph, Method::BruteForce).unwrap(),
            domination_number(&graph, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            k_domination_number(&graph, 2, Method::BruteForce).unwrap(),
            k_domination_number(&graph, 2, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            total_domination_number(&graph, Method::BruteForce).unwrap(),
            total_domination_number(&graph, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            independent_domination_number(&graph, Method::BruteForce).unwrap(),
            independent_domination_number(&graph, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            vertex_cover_number(&graph, Method::BruteForce).unwrap(),
            vertex_cover_number(&graph, Method::Ilp).unwrap()
        );
    }

    #[test]
    fn packing_problems_agree(seed in any::<u64>(), n in 0usize..9, p in 0.0f64..=1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        prop_assert_eq!(
            independence_number(&graph, Method::BruteForce).unwrap(),
            independence_number(&graph, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            k_independence_number(&graph, 2, Method::BruteForce).unwrap(),
            k_independence_number(&graph, 2, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            matching_number(&graph, Method::BruteForce).unwrap(),
            matching_number(&graph, Method::Ilp).unwrap()
        );
        prop_assert_eq!(
            clique_number(&graph, Method::BruteForce).unwrap(),
            clique_number(&graph, Method::Ilp).unwrap()
        );
    }

    #[test]
    fn chromatic_strategies_agree(seed in any::<u64>(), n in 0usize..7, p in 0.0f64..=1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        prop_assert_eq!(
            chromatic_number(&graph, Method::BruteForce).unwrap(),
            chromatic_number(&graph, Method::Ilp).unwrap()
        );
    }
}
