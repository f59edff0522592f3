use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::provenance::SchemaVersion;
use grin_core::{GraphView, NodeId};
use serde::{Deserialize, Serialize};

use crate::graph::SimpleGraph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &SimpleGraph) -> Result<Vec<u8>, GrinError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| GrinError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<SimpleGraph, GrinError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| GrinError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &SimpleGraph) -> Result<String, GrinError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| GrinError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
///
/// The expected shape is `{"nodes": [..], "edges": [[u, v], ..]}`; the
/// `schema_version` field is optional on input.
pub fn graph_from_json(json: &str) -> Result<SimpleGraph, GrinError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| GrinError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    #[serde(default)]
    schema_version: SchemaVersion,
    #[serde(default)]
    nodes: Vec<u64>,
    edges: Vec<(u64, u64)>,
}

impl SerializableGraph {
    fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            nodes: graph.vertices().map(|id| id.as_raw()).collect(),
            edges: graph
                .edges()
                .map(|edge| (edge.u().as_raw(), edge.v().as_raw()))
                .collect(),
        }
    }

    fn into_graph(self) -> Result<SimpleGraph, GrinError> {
        if self.schema_version.major != SchemaVersion::default().major {
            return Err(GrinError::Serde(
                ErrorInfo::new("schema-mismatch", "unsupported graph schema version")
                    .with_context("major", self.schema_version.major),
            ));
        }
        let mut graph = SimpleGraph::new();
        graph.add_nodes_from(self.nodes.into_iter().map(NodeId::from_raw));
        for (a, b) in self.edges {
            graph.add_edge(NodeId::from_raw(a), NodeId::from_raw(b))?;
        }
        Ok(graph)
    }
}
