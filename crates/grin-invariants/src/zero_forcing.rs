//! Minimum k-forcing sets and their total and connected variants.
//!
//! The closure and the set predicates live in `grin-search`; this module
//! only wraps them into extremal searches.

use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use grin_graph::min_degree;
use grin_search::ForcingClosure;

use crate::method::{all_vertices, solve, Goal, Method, SetProblem};

pub use grin_search::{
    is_connected_zero_forcing_set, is_k_forcing_active_set, is_k_forcing_vertex,
    is_total_zero_forcing_set, is_zero_forcing_active_set, is_zero_forcing_set,
    is_zero_forcing_vertex,
};

/// Minimum k-forcing set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forcing {
    /// Forcing parameter.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for Forcing {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "k-forcing"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    // δ(G) bounds the zero forcing number from below.
    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        if self.k == 1 {
            min_degree(graph)
        } else {
            Ok(graph.order().min(1))
        }
    }

    fn k(&self) -> usize {
        self.k
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[NodeId],
        k: usize,
        interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        ForcingClosure::new(graph, k)?
            .with_interrupt(interrupt)
            .is_forcing_set(candidate)
    }
}

/// Minimum total k-forcing set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalForcing {
    /// Forcing parameter.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for TotalForcing {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "total-k-forcing"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    // A total set needs two adjacent members.
    fn start_bound(&self, _graph: &G) -> Result<usize, GrinError> {
        Ok(2)
    }

    fn k(&self) -> usize {
        self.k
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[NodeId],
        k: usize,
        interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        ForcingClosure::new(graph, k)?
            .with_interrupt(interrupt)
            .is_total_forcing_set(candidate)
    }
}

/// Minimum connected k-forcing set. Only defined on connected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedForcing {
    /// Forcing parameter.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for ConnectedForcing {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "connected-k-forcing"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, _graph: &G) -> Result<usize, GrinError> {
        Ok(1)
    }

    fn k(&self) -> usize {
        self.k
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[NodeId],
        k: usize,
        interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        ForcingClosure::new(graph, k)?
            .with_interrupt(interrupt)
            .is_connected_forcing_set(candidate)
    }

    fn admits_witness(&self, graph: &G) -> Result<bool, GrinError> {
        Ok(graph.is_connected())
    }
}

/// Returns a minimum k-forcing set.
pub fn min_k_forcing_set<G: GraphView>(graph: &G, k: usize) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&Forcing { k }, graph, Method::BruteForce, &Unbounded)
}

/// Returns the k-forcing number.
pub fn k_forcing_number<G: GraphView>(graph: &G, k: usize) -> Result<Option<usize>, GrinError> {
    Ok(min_k_forcing_set(graph, k)?.map(|set| set.len()))
}

/// Returns a minimum zero forcing set.
pub fn min_zero_forcing_set<G: GraphView>(graph: &G) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_k_forcing_set(graph, 1)
}

/// Returns the zero forcing number.
pub fn zero_forcing_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    k_forcing_number(graph, 1)
}

/// Returns a minimum total k-forcing set, or `None` when none exists.
pub fn min_total_k_forcing_set<G: GraphView>(graph: &G, k: usize) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&TotalForcing { k }, graph, Method::BruteForce, &Unbounded)
}

/// Returns the total k-forcing number.
pub fn total_k_forcing_number<G: GraphView>(graph: &G, k: usize) -> Result<Option<usize>, GrinError> {
    Ok(min_total_k_forcing_set(graph, k)?.map(|set| set.len()))
}

/// Returns a minimum total zero forcing set.
pub fn min_total_zero_forcing_set<G: GraphView>(graph: &G) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_total_k_forcing_set(graph, 1)
}

/// Returns the total zero forcing number.
pub fn total_zero_forcing_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    total_k_forcing_number(graph, 1)
}

/// Returns a minimum connected k-forcing set, or `None` on disconnected graphs.
pub fn min_connected_k_forcing_set<G: GraphView>(
    graph: &G,
    k: usize,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&ConnectedForcing { k }, graph, Method::BruteForce, &Unbounded)
}

/// Returns the connected k-forcing number.
pub fn connected_k_forcing_number<G: GraphView>(graph: &G, k: usize) -> Result<Option<usize>, GrinError> {
    Ok(min_connected_k_forcing_set(graph, k)?.map(|set| set.len()))
}

/// Returns a minimum connected zero forcing set.
pub fn min_connected_zero_forcing_set<G: GraphView>(graph: &G) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_connected_k_forcing_set(graph, 1)
}

/// Returns the connected zero forcing number.
pub fn connected_zero_forcing_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    connected_k_forcing_number(graph, 1)
}
