//! k-forcing closure and the set predicates derived from it.
//!
//! A coloured vertex can k-force when between one and `k` of its neighbours
//! are uncoloured; forcing colours all of them. Closure proceeds in rounds:
//! the forcing vertices are fixed from the colouring at the start of a round
//! and every addition commits at the end of it.

use std::collections::BTreeSet;

use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use tracing::{debug, trace};

use crate::validate::validate_k;

static UNBOUNDED: Unbounded = Unbounded;

/// k-forcing propagation over a fixed graph.
pub struct ForcingClosure<'a, G: GraphView> {
    graph: &'a G,
    k: usize,
    interrupt: &'a dyn Interrupt,
}

impl<'a, G: GraphView> ForcingClosure<'a, G> {
    /// Creates the k-forcing rule for `graph`, rejecting `k = 0`.
    pub fn new(graph: &'a G, k: usize) -> Result<Self, GrinError> {
        Ok(Self {
            graph,
            k: validate_k(k)?,
            interrupt: &UNBOUNDED,
        })
    }

    /// Installs a cooperative cancellation hook polled once per round.
    pub fn with_interrupt(mut self, interrupt: &'a dyn Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Returns the forcing parameter.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns whether `node` can k-force relative to `colored`.
    pub fn can_force(&self, node: NodeId, colored: &BTreeSet<NodeId>) -> Result<bool, GrinError> {
        if !colored.contains(&node) {
            return Ok(false);
        }
        let uncolored = self
            .graph
            .neighbors(node)?
            .filter(|neighbour| !colored.contains(neighbour))
            .count();
        Ok((1..=self.k).contains(&uncolored))
    }

    /// Returns whether some member of `colored` can k-force.
    pub fn is_active(&self, colored: &BTreeSet<NodeId>) -> Result<bool, GrinError> {
        for node in colored {
            if self.can_force(*node, colored)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Computes the closure of `seed ∩ V(G)` under the k-forcing rule.
    pub fn closure(&self, seed: &[NodeId]) -> Result<BTreeSet<NodeId>, GrinError> {
        self.closure_of(self.graph.restrict(seed))
    }

    /// Computes the closure of an already normalised colouring.
    pub fn closure_of(&self, seed: BTreeSet<NodeId>) -> Result<BTreeSet<NodeId>, GrinError> {
        Ok(self.propagate(seed)?.0)
    }

    /// Returns the number of rounds `seed` needs to colour the whole graph,
    /// or `None` when it is not a forcing set.
    pub fn propagation_time(&self, seed: &[NodeId]) -> Result<Option<usize>, GrinError> {
        let (colored, rounds) = self.propagate(self.graph.restrict(seed))?;
        Ok((colored.len() == self.graph.order()).then_some(rounds))
    }

    fn propagate(&self, seed: BTreeSet<NodeId>) -> Result<(BTreeSet<NodeId>, usize), GrinError> {
        let seed_size = seed.len();
        let mut colored = seed;
        let mut rounds = 0usize;
        loop {
            self.interrupt.check()?;
            let mut forced = BTreeSet::new();
            for node in &colored {
                if self.can_force(*node, &colored)? {
                    forced.extend(
                        self.graph
                            .neighbors(*node)?
                            .filter(|neighbour| !colored.contains(neighbour)),
                    );
                }
            }
            if forced.is_empty() {
                break;
            }
            rounds += 1;
            trace!(round = rounds, forced = forced.len(), "forcing round committed");
            colored.extend(forced);
        }
        debug!(k = self.k, seed_size, closure_size = colored.len(), rounds, "forcing closure settled");
        Ok((colored, rounds))
    }

    /// Returns whether the closure of `seed` is the whole vertex set.
    pub fn is_forcing_set(&self, seed: &[NodeId]) -> Result<bool, GrinError> {
        self.covers(self.graph.restrict(seed))
    }

    /// Returns whether `seed` is a forcing set in which every member has a
    /// neighbour inside the set.
    pub fn is_total_forcing_set(&self, seed: &[NodeId]) -> Result<bool, GrinError> {
        let members = self.graph.restrict(seed);
        for node in &members {
            let mut neighbours = self.graph.neighbors(*node)?;
            if !neighbours.any(|neighbour| members.contains(&neighbour)) {
                return Ok(false);
            }
        }
        self.covers(members)
    }

    /// Returns whether `seed` is a forcing set inducing a connected subgraph.
    pub fn is_connected_forcing_set(&self, seed: &[NodeId]) -> Result<bool, GrinError> {
        let members = self.graph.restrict(seed);
        if !self.graph.induced_subgraph(&members).is_connected() {
            return Ok(false);
        }
        self.covers(members)
    }

    /// Returns whether the closed neighbourhood of `seed` is a forcing set.
    pub fn is_power_dominating_set(&self, seed: &[NodeId]) -> Result<bool, GrinError> {
        let members = self.graph.restrict(seed);
        let mut colored = members.clone();
        for node in &members {
            colored.extend(self.graph.neighbors(*node)?);
        }
        self.covers(colored)
    }

    fn covers(&self, seed: BTreeSet<NodeId>) -> Result<bool, GrinError> {
        Ok(self.closure_of(seed)?.len() == self.graph.order())
    }
}

/// Computes the k-forcing closure of `seed`.
pub fn closure<G: GraphView>(graph: &G, seed: &[NodeId], k: usize) -> Result<BTreeSet<NodeId>, GrinError> {
    ForcingClosure::new(graph, k)?.closure(seed)
}

/// Returns whether `node` can k-force relative to the set `nodes`.
pub fn is_k_forcing_vertex<G: GraphView>(
    graph: &G,
    node: NodeId,
    nodes: &[NodeId],
    k: usize,
) -> Result<bool, GrinError> {
    ForcingClosure::new(graph, k)?.can_force(node, &graph.restrict(nodes))
}

/// Returns whether at least one member of `nodes` can k-force.
pub fn is_k_forcing_active_set<G: GraphView>(graph: &G, nodes: &[NodeId], k: usize) -> Result<bool, GrinError> {
    ForcingClosure::new(graph, k)?.is_active(&graph.restrict(nodes))
}

/// Returns whether `nodes` is a k-forcing set.
pub fn is_k_forcing_set<G: GraphView>(graph: &G, nodes: &[NodeId], k: usize) -> Result<bool, GrinError> {
    ForcingClosure::new(graph, k)?.is_forcing_set(nodes)
}

/// Returns whether `nodes` is a k-forcing set in which every member has a
/// neighbour inside the set.
pub fn is_total_k_forcing_set<G: GraphView>(graph: &G, nodes: &[NodeId], k: usize) -> Result<bool, GrinError> {
    ForcingClosure::new(graph, k)?.is_total_forcing_set(nodes)
}

/// Returns whether `nodes` is a k-forcing set inducing a connected subgraph.
pub fn is_connected_k_forcing_set<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
    k: usize,
) -> Result<bool, GrinError> {
    ForcingClosure::new(graph, k)?.is_connected_forcing_set(nodes)
}

/// Returns whether the closed neighbourhood of `nodes` is a k-forcing set.
pub fn is_k_power_dominating_set<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
    k: usize,
) -> Result<bool, GrinError> {
    ForcingClosure::new(graph, k)?.is_power_dominating_set(nodes)
}

/// Returns whether `node` can force under the zero forcing rule.
pub fn is_zero_forcing_vertex<G: GraphView>(graph: &G, node: NodeId, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_k_forcing_vertex(graph, node, nodes, 1)
}

/// Returns whether some member of `nodes` can force under the zero forcing rule.
pub fn is_zero_forcing_active_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_k_forcing_active_set(graph, nodes, 1)
}

/// Returns whether `nodes` is a zero forcing set.
pub fn is_zero_forcing_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_k_forcing_set(graph, nodes, 1)
}

/// Returns whether `nodes` is a total zero forcing set.
pub fn is_total_zero_forcing_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_total_k_forcing_set(graph, nodes, 1)
}

/// Returns whether `nodes` is a connected zero forcing set.
pub fn is_connected_zero_forcing_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_connected_k_forcing_set(graph, nodes, 1)
}

/// Returns whether `nodes` is a power dominating set.
pub fn is_power_dominating_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_k_power_dominating_set(graph, nodes, 1)
}
