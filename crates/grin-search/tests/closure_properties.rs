use grin_core::rng::RngHandle;
use grin_core::{GraphView, NodeId};
use grin_graph::{complete_graph, gnp_random_graph};
use grin_search::{closure, is_k_forcing_set, HavelHakimi};
use proptest::prelude::*;

fn subset(nodes: &[NodeId], mask: u16) -> Vec<NodeId> {
    nodes
        .iter()
        .enumerate()
        .filter(|(idx, _)| mask & (1 << idx) != 0)
        .map(|(_, node)| *node)
        .collect()
}

proptest! {
    #[test]
    fn closure_is_idempotent(seed in any::<u64>(), n in 1usize..10, p in 0.0f64..=1.0, mask in any::<u16>(), k in 1usize..4) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        let nodes: Vec<NodeId> = graph.vertices().collect();
        let once = closure(&graph, &subset(&nodes, mask), k).unwrap();
        let again: Vec<NodeId> = once.iter().copied().collect();
        prop_assert_eq!(closure(&graph, &again, k).unwrap(), once);
    }

    #[test]
    fn closure_is_monotone_in_the_seed(seed in any::<u64>(), n in 1usize..10, p in 0.0f64..=1.0, small in any::<u16>(), extra in any::<u16>()) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        let nodes: Vec<NodeId> = graph.vertices().collect();
        let lower = closure(&graph, &subset(&nodes, small), 1).unwrap();
        let upper = closure(&graph, &subset(&nodes, small | extra), 1).unwrap();
        prop_assert!(lower.is_subset(&upper));
    }

    #[test]
    fn forcing_sets_stay_forcing_for_larger_k(seed in any::<u64>(), n in 1usize..10, p in 0.0f64..=1.0, mask in any::<u16>()) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        let nodes: Vec<NodeId> = graph.vertices().collect();
        let seed_set = subset(&nodes, mask);
        if is_k_forcing_set(&graph, &seed_set, 1).unwrap() {
            prop_assert!(is_k_forcing_set(&graph, &seed_set, 2).unwrap());
        }
    }

    #[test]
    fn degree_sequences_of_graphs_are_graphic(seed in any::<u64>(), n in 0usize..14, p in 0.0f64..=1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp_random_graph(n, p, &mut rng).unwrap();
        let hh = HavelHakimi::from_graph(&graph).unwrap();
        prop_assert!(hh.is_graphic());
        prop_assert!(hh.depth() <= n);
        prop_assert_eq!(hh.elimination_sequence().map(<[i64]>::len), Some(n));
    }
}

#[test]
fn complete_graph_depth_matches_order() {
    for n in 2..12 {
        let hh = HavelHakimi::from_graph(&complete_graph(n)).unwrap();
        assert_eq!(hh.depth(), n - 1);
    }
}
