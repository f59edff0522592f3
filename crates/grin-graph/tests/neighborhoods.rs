use std::collections::BTreeSet;

use grin_core::NodeId;
use grin_graph::{are_neighbors, closed_neighborhood, common_neighbors, neighborhood, path_graph, star_graph};

fn ids(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::from_raw).collect()
}

fn set(raw: &[u64]) -> BTreeSet<NodeId> {
    ids(raw).into_iter().collect()
}

#[test]
fn open_and_closed_neighbourhoods_of_path() {
    let graph = path_graph(5);
    assert_eq!(neighborhood(&graph, &ids(&[2])).unwrap(), set(&[1, 3]));
    assert_eq!(closed_neighborhood(&graph, &ids(&[2])).unwrap(), set(&[1, 2, 3]));
    assert_eq!(neighborhood(&graph, &ids(&[0, 4])).unwrap(), set(&[1, 3]));
}

#[test]
fn foreign_vertices_are_ignored() {
    let graph = path_graph(3);
    assert_eq!(neighborhood(&graph, &ids(&[1, 99])).unwrap(), set(&[0, 2]));
    assert!(closed_neighborhood(&graph, &ids(&[99])).unwrap().is_empty());
}

#[test]
fn common_neighbours_of_star_leaves_is_centre() {
    let graph = star_graph(4);
    assert_eq!(common_neighbors(&graph, &ids(&[1, 2, 3])).unwrap(), set(&[0]));
    assert!(common_neighbors(&graph, &[]).unwrap().is_empty());
    assert!(are_neighbors(&graph, NodeId::from_raw(0), &ids(&[3])).unwrap());
    assert!(!are_neighbors(&graph, NodeId::from_raw(1), &ids(&[3])).unwrap());
}
