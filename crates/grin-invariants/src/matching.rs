//! Matchings over the edge set.

use std::collections::BTreeSet;

use grin_core::errors::GrinError;
use grin_core::{Edge, GraphView, Interrupt, Unbounded};

use crate::ilp::{BinaryProgram, Constraint, Relation, Sense};
use crate::method::{solve, Goal, Method, SetProblem};

// Keeps the edges that belong to the graph, deduplicated.
fn restrict_edges<G: GraphView>(graph: &G, edges: &[Edge]) -> BTreeSet<Edge> {
    edges
        .iter()
        .copied()
        .filter(|edge| graph.is_adjacent(edge.u(), edge.v()))
        .collect()
}

fn pairwise_disjoint(edges: &BTreeSet<Edge>) -> bool {
    let mut covered = BTreeSet::new();
    edges
        .iter()
        .all(|edge| covered.insert(edge.u()) && covered.insert(edge.v()))
}

/// Returns whether no two edges of `edges` share an endpoint.
pub fn is_matching<G: GraphView>(graph: &G, edges: &[Edge]) -> bool {
    pairwise_disjoint(&restrict_edges(graph, edges))
}

/// Returns whether `edges` is a matching that no graph edge can extend.
pub fn is_maximal_matching<G: GraphView>(graph: &G, edges: &[Edge]) -> bool {
    let members = restrict_edges(graph, edges);
    if !pairwise_disjoint(&members) {
        return false;
    }
    let mut graph_edges = graph.edges();
    graph_edges.all(|edge| members.iter().any(|member| member.shares_endpoint(&edge)))
}

/// Maximum matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matching;

impl<G: GraphView> SetProblem<G> for Matching {
    type Item = Edge;

    fn name(&self) -> &'static str {
        "matching"
    }

    fn goal(&self) -> Goal {
        Goal::Maximize
    }

    fn universe(&self, graph: &G) -> Vec<Edge> {
        graph.edges().collect()
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        Ok(graph.order() / 2)
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[Edge],
        _k: usize,
        _interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        Ok(is_matching(graph, candidate))
    }

    // At most one selected edge at every vertex.
    fn program(&self, graph: &G, universe: &[Edge]) -> Result<Option<BinaryProgram>, GrinError> {
        let mut program = BinaryProgram::new(universe.len(), Sense::Maximize).with_unit_objective();
        for node in graph.vertices() {
            let terms: Vec<(usize, i64)> = universe
                .iter()
                .enumerate()
                .filter(|(_, edge)| edge.touches(node))
                .map(|(var, _)| (var, 1))
                .collect();
            if terms.len() > 1 {
                program.add_constraint(Constraint::new(terms, Relation::AtMost, 1))?;
            }
        }
        Ok(Some(program))
    }
}

/// Minimum maximal matching, the edge domination number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimalMaximalMatching;

impl<G: GraphView> SetProblem<G> for MinimalMaximalMatching {
    type Item = Edge;

    fn name(&self) -> &'static str {
        "minimum-maximal-matching"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<Edge> {
        graph.edges().collect()
    }

    fn start_bound(&self, _graph: &G) -> Result<usize, GrinError> {
        Ok(0)
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[Edge],
        _k: usize,
        _interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        Ok(is_maximal_matching(graph, candidate))
    }
}

/// Returns a maximum matching.
pub fn max_matching<G: GraphView>(graph: &G, method: Method) -> Result<Option<Vec<Edge>>, GrinError> {
    solve(&Matching, graph, method, &Unbounded)
}

/// Returns the matching number.
pub fn matching_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    Ok(max_matching(graph, method)?.map(|set| set.len()))
}

/// Returns a smallest maximal matching.
pub fn min_maximal_matching<G: GraphView>(graph: &G) -> Result<Option<Vec<Edge>>, GrinError> {
    solve(&MinimalMaximalMatching, graph, Method::BruteForce, &Unbounded)
}

/// Returns the size of a smallest maximal matching.
pub fn min_maximal_matching_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    Ok(min_maximal_matching(graph)?.map(|set| set.len()))
}
