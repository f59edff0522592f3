use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};

use crate::ilp::{BinaryProgram, Constraint, Relation, Sense};
use crate::method::{all_vertices, solve, variable_index, Goal, Method, SetProblem};

/// Returns whether every edge has an endpoint in `nodes`.
pub fn is_vertex_cover<G: GraphView>(graph: &G, nodes: &[NodeId]) -> bool {
    let members = graph.restrict(nodes);
    let mut edges = graph.edges();
    edges.all(|edge| members.contains(&edge.u()) || members.contains(&edge.v()))
}

/// Minimum vertex cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexCover;

impl<G: GraphView> SetProblem<G> for VertexCover {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "vertex-cover"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, _graph: &G) -> Result<usize, GrinError> {
        Ok(0)
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[NodeId],
        _k: usize,
        _interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        Ok(is_vertex_cover(graph, candidate))
    }

    fn program(&self, graph: &G, universe: &[NodeId]) -> Result<Option<BinaryProgram>, GrinError> {
        let index = variable_index(universe);
        let mut program = BinaryProgram::new(universe.len(), Sense::Minimize).with_unit_objective();
        for edge in graph.edges() {
            if let (Some(u), Some(v)) = (index.get(&edge.u()), index.get(&edge.v())) {
                program.add_constraint(Constraint::new(vec![(*u, 1), (*v, 1)], Relation::AtLeast, 1))?;
            }
        }
        Ok(Some(program))
    }
}

/// Returns a minimum vertex cover.
pub fn min_vertex_cover<G: GraphView>(graph: &G, method: Method) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&VertexCover, graph, method, &Unbounded)
}

/// Returns the vertex cover number.
pub fn vertex_cover_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    Ok(min_vertex_cover(graph, method)?.map(|set| set.len()))
}
