#![deny(missing_docs)]

//! Finite simple undirected graphs implementing the `grin-core` contracts,
//! together with graph families, neighbourhood and degree helpers, structural
//! tests, vertex contraction, BFS distances, serialization and hashing.

mod degree;
mod distance;
mod generators;
mod graph;
mod hash;
mod neighborhoods;
mod operations;
mod serialization;
mod structure;

pub use degree::{
    average_degree, closed_neighborhood_degree_list, degree_sequence, is_cubic, is_k_regular,
    is_regular, is_sub_cubic, max_degree, min_degree, neighborhood_degree_list,
    number_of_degree_one_nodes, number_of_max_degree_nodes, number_of_min_degree_nodes,
    number_of_nodes_of_degree_k,
};
pub use distance::{distance, distances_from};
pub use generators::{
    barbell_graph, circular_ladder_graph, complete_graph, cycle_graph, empty_graph,
    gnp_random_graph, null_graph, path_graph, petersen_graph, star_graph, trivial_graph,
};
pub use graph::SimpleGraph;
pub use hash::canonical_hash;
pub use neighborhoods::{are_neighbors, closed_neighborhood, common_neighbors, neighborhood};
pub use operations::contract_nodes;
pub use structure::{is_bull_free, is_claw_free, is_complete_graph, is_triangle_free};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
