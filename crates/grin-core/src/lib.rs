#![deny(missing_docs)]
#![doc = "Core contracts and data types shared by the grin crates: vertex and edge \
identifiers, the read-only graph contract consumed by every search, the error \
surface and the cooperative cancellation hook."]

use std::collections::BTreeSet;
use std::fmt;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod interrupt;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, GrinError};
pub use interrupt::{CancelToken, Interrupt, Unbounded};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::RngHandle;

/// Identifier for a vertex within a [`GraphView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected edge stored with its endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: NodeId,
    v: NodeId,
}

impl Edge {
    /// Creates an edge between `a` and `b`, normalising the endpoint order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// Returns the smaller endpoint.
    pub fn u(&self) -> NodeId {
        self.u
    }

    /// Returns the larger endpoint.
    pub fn v(&self) -> NodeId {
        self.v
    }

    /// Returns both endpoints as a tuple.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.u, self.v)
    }

    /// Returns whether `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.u == node || self.v == node
    }

    /// Returns whether the two edges share an endpoint.
    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.touches(other.u) || self.touches(other.v)
    }
}

/// Read-only access contract for finite simple undirected graphs.
///
/// Every search in the workspace consumes a graph through this trait and treats
/// it as an immutable snapshot for the duration of the call. Iteration orders
/// are ascending so enumeration results are reproducible.
pub trait GraphView: Send + Sync {
    /// Returns all vertices in ascending order.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns all edges in ascending order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Edge> + '_>;

    /// Returns whether the vertex belongs to the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns the neighbours of a vertex in ascending order.
    fn neighbors(
        &self,
        node: NodeId,
    ) -> Result<Box<dyn ExactSizeIterator<Item = NodeId> + '_>, GrinError>;

    /// Builds the subgraph induced by the vertices of `nodes` present in the graph.
    fn induced_subgraph(&self, nodes: &BTreeSet<NodeId>) -> Self
    where
        Self: Sized;

    /// Returns the degree of a vertex.
    fn degree(&self, node: NodeId) -> Result<usize, GrinError> {
        Ok(self.neighbors(node)?.len())
    }

    /// Returns the number of vertices.
    fn order(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the number of edges.
    fn size(&self) -> usize {
        self.edges().len()
    }

    /// Returns whether `u` and `v` are adjacent.
    fn is_adjacent(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u)
            .map(|mut neighbours| neighbours.any(|candidate| candidate == v))
            .unwrap_or(false)
    }

    /// Returns whether the graph is connected. The null graph is not connected.
    fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return false;
        };
        let mut seen = BTreeSet::from([start]);
        let mut frontier = vec![start];
        while let Some(node) = frontier.pop() {
            if let Ok(neighbours) = self.neighbors(node) {
                for next in neighbours {
                    if seen.insert(next) {
                        frontier.push(next);
                    }
                }
            }
        }
        seen.len() == self.order()
    }

    /// Normalises a caller supplied vertex collection to `S ∩ V(G)`.
    ///
    /// Vertices that are not part of the graph are dropped silently.
    fn restrict(&self, nodes: &[NodeId]) -> BTreeSet<NodeId> {
        nodes
            .iter()
            .copied()
            .filter(|node| self.contains(*node))
            .collect()
    }
}
