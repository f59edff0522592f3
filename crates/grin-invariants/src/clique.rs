use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use grin_graph::max_degree;
use itertools::Itertools;

use crate::ilp::{BinaryProgram, Constraint, Relation, Sense};
use crate::method::{all_vertices, solve, Goal, Method, SetProblem};

/// Returns whether the members of `nodes` are pairwise adjacent.
pub fn is_clique<G: GraphView>(graph: &G, nodes: &[NodeId]) -> bool {
    let members: Vec<NodeId> = graph.restrict(nodes).into_iter().collect();
    members
        .iter()
        .tuple_combinations()
        .all(|(u, v)| graph.is_adjacent(*u, *v))
}

/// Maximum clique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clique;

impl<G: GraphView> SetProblem<G> for Clique {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "clique"
    }

    fn goal(&self) -> Goal {
        Goal::Maximize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        Ok(max_degree(graph)? + 1)
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[NodeId],
        _k: usize,
        _interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        Ok(is_clique(graph, candidate))
    }

    // Non-adjacent pairs exclude each other.
    fn program(&self, graph: &G, universe: &[NodeId]) -> Result<Option<BinaryProgram>, GrinError> {
        let mut program = BinaryProgram::new(universe.len(), Sense::Maximize).with_unit_objective();
        for ((i, u), (j, v)) in universe.iter().enumerate().tuple_combinations() {
            if !graph.is_adjacent(*u, *v) {
                program.add_constraint(Constraint::new(vec![(i, 1), (j, 1)], Relation::AtMost, 1))?;
            }
        }
        Ok(Some(program))
    }
}

/// Returns a maximum clique.
pub fn max_clique<G: GraphView>(graph: &G, method: Method) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&Clique, graph, method, &Unbounded)
}

/// Returns the clique number.
pub fn clique_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    Ok(max_clique(graph, method)?.map(|set| set.len()))
}
