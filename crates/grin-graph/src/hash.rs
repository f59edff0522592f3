use grin_core::GraphView;
use sha2::{Digest, Sha256};

/// Computes the canonical structural hash of a graph.
///
/// The digest covers the ascending vertex list and the ascending normalised
/// edge list, so two graphs hash equal exactly when they are identical as
/// labelled graphs.
pub fn canonical_hash<G: GraphView>(graph: &G) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"grin-simple-graph");

    hasher.update((graph.order() as u64).to_le_bytes());
    for node in graph.vertices() {
        hasher.update(node.as_raw().to_le_bytes());
    }

    hasher.update((graph.size() as u64).to_le_bytes());
    for edge in graph.edges() {
        hasher.update(edge.u().as_raw().to_le_bytes());
        hasher.update(edge.v().as_raw().to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
