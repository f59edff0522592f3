//! Independent and k-independent sets.

use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use grin_search::validate_k;

use crate::dsi::annihilation_number;
use crate::ilp::{BinaryProgram, Constraint, Relation, Sense};
use crate::method::{all_vertices, solve, variable_index, Goal, Method, SetProblem};

/// Returns whether every member of `nodes` has at most `k - 1` neighbours
/// inside `nodes`.
pub fn is_k_independent_set<G: GraphView>(graph: &G, nodes: &[NodeId], k: usize) -> Result<bool, GrinError> {
    let k = validate_k(k)?;
    let members = graph.restrict(nodes);
    for node in &members {
        let inside = graph
            .neighbors(*node)?
            .filter(|neighbour| members.contains(neighbour))
            .count();
        if inside > k - 1 {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns whether no two members of `nodes` are adjacent.
pub fn is_independent_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_k_independent_set(graph, nodes, 1)
}

/// Maximum k-independent set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Independence {
    /// Members may have up to `k - 1` neighbours in the set.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for Independence {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "k-independence"
    }

    fn goal(&self) -> Goal {
        Goal::Maximize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        if self.k == 1 {
            annihilation_number(graph)
        } else {
            Ok(graph.order())
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
        _interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        is_k_independent_set(graph, candidate, k)
    }

    // Σ_{u ∈ N(v)} x_u + deg(v)·x_v ≤ k - 1 + deg(v), needed only when
    // deg(v) > k - 1.
    fn program(&self, graph: &G, universe: &[NodeId]) -> Result<Option<BinaryProgram>, GrinError> {
        let index = variable_index(universe);
        let slack = self.k as i64 - 1;
        let mut program = BinaryProgram::new(universe.len(), Sense::Maximize).with_unit_objective();
        for (var, node) in universe.iter().enumerate() {
            let degree = graph.degree(*node)? as i64;
            if degree <= slack {
                continue;
            }
            let mut terms: Vec<(usize, i64)> = graph
                .neighbors(*node)?
                .filter_map(|neighbour| index.get(&neighbour).map(|other| (*other, 1)))
                .collect();
            terms.push((var, degree));
            program.add_constraint(Constraint::new(terms, Relation::AtMost, slack + degree))?;
        }
        Ok(Some(program))
    }
}

/// Returns a maximum k-independent set.
pub fn max_k_independent_set<G: GraphView>(
    graph: &G,
    k: usize,
    method: Method,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&Independence { k }, graph, method, &Unbounded)
}

/// Returns the k-independence number.
pub fn k_independence_number<G: GraphView>(graph: &G, k: usize, method: Method) -> Result<Option<usize>, GrinError> {
    Ok(max_k_independent_set(graph, k, method)?.map(|set| set.len()))
}

/// Returns a maximum independent set.
pub fn max_independent_set<G: GraphView>(graph: &G, method: Method) -> Result<Option<Vec<NodeId>>, GrinError> {
    max_k_independent_set(graph, 1, method)
}

/// Returns the independence number.
pub fn independence_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    k_independence_number(graph, 1, method)
}
