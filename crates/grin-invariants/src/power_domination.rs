use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use grin_search::ForcingClosure;

use crate::method::{all_vertices, solve, Goal, Method, SetProblem};

pub use grin_search::is_power_dominating_set;

/// Minimum k-power dominating set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerDomination {
    /// Forcing parameter applied after the domination step.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for PowerDomination {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "k-power-domination"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        Ok(graph.order().min(1))
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
            .is_power_dominating_set(candidate)
    }
}

/// Returns a minimum k-power dominating set.
pub fn min_k_power_dominating_set<G: GraphView>(
    graph: &G,
    k: usize,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&PowerDomination { k }, graph, Method::BruteForce, &Unbounded)
}

/// Returns the k-power domination number.
pub fn k_power_domination_number<G: GraphView>(graph: &G, k: usize) -> Result<Option<usize>, GrinError> {
    Ok(min_k_power_dominating_set(graph, k)?.map(|set| set.len()))
}

/// Returns a minimum power dominating set.
pub fn min_power_dominating_set<G: GraphView>(graph: &G) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_k_power_dominating_set(graph, 1)
}

/// Returns the power domination number.
pub fn power_domination_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    k_power_domination_number(graph, 1)
}
