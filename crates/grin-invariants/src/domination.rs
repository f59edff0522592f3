//! Dominating sets and their total, connected and independent variants.

use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use grin_graph::{min_degree, neighborhood};
use grin_search::validate_k;

use crate::dsi::{sub_k_domination_number, sub_total_domination_number};
use crate::ilp::{BinaryProgram, Constraint, Relation, Sense};
use crate::independence::is_independent_set;
use crate::method::{all_vertices, solve, variable_index, Goal, Method, SetProblem};

/// Returns whether every vertex outside `nodes` has at least `k` neighbours
/// inside it.
pub fn is_k_dominating_set<G: GraphView>(graph: &G, nodes: &[NodeId], k: usize) -> Result<bool, GrinError> {
    let k = validate_k(k)?;
    let members = graph.restrict(nodes);
    for node in graph.vertices() {
        if members.contains(&node) {
            continue;
        }
        let hits = graph
            .neighbors(node)?
            .filter(|neighbour| members.contains(neighbour))
            .count();
        if hits < k {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns whether `nodes` is a dominating set.
pub fn is_dominating_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_k_dominating_set(graph, nodes, 1)
}

/// Returns whether every vertex, members included, has a neighbour in `nodes`.
pub fn is_total_dominating_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    Ok(neighborhood(graph, nodes)?.len() == graph.order())
}

/// Returns whether `nodes` is k-dominating and induces a connected subgraph.
pub fn is_connected_k_dominating_set<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
    k: usize,
) -> Result<bool, GrinError> {
    if !is_k_dominating_set(graph, nodes, k)? {
        return Ok(false);
    }
    Ok(graph.induced_subgraph(&graph.restrict(nodes)).is_connected())
}

/// Returns whether `nodes` is a connected dominating set.
pub fn is_connected_dominating_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_connected_k_dominating_set(graph, nodes, 1)
}

/// Returns whether `nodes` is both independent and k-dominating.
pub fn is_independent_k_dominating_set<G: GraphView>(
    graph: &G,
    nodes: &[NodeId],
    k: usize,
) -> Result<bool, GrinError> {
    let k = validate_k(k)?;
    Ok(is_independent_set(graph, nodes)? && is_k_dominating_set(graph, nodes, k)?)
}

/// Returns whether `nodes` is an independent dominating set.
pub fn is_independent_dominating_set<G: GraphView>(graph: &G, nodes: &[NodeId]) -> Result<bool, GrinError> {
    is_independent_k_dominating_set(graph, nodes, 1)
}

/// Minimum k-dominating set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domination {
    /// Number of neighbours each outside vertex needs in the set.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for Domination {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "k-domination"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        sub_k_domination_number(graph, self.k)
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
        is_k_dominating_set(graph, candidate, k)
    }

    fn program(&self, graph: &G, universe: &[NodeId]) -> Result<Option<BinaryProgram>, GrinError> {
        k_domination_program(graph, universe, self.k).map(Some)
    }
}

/// Minimum total dominating set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalDomination;

impl<G: GraphView> SetProblem<G> for TotalDomination {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "total-domination"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        Ok(sub_total_domination_number(graph)?.unwrap_or(0))
    }

    fn holds(
        &self,
        graph: &G,
        candidate: &[NodeId],
        _k: usize,
        _interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError> {
        is_total_dominating_set(graph, candidate)
    }

    fn program(&self, graph: &G, universe: &[NodeId]) -> Result<Option<BinaryProgram>, GrinError> {
        let index = variable_index(universe);
        let mut program = BinaryProgram::new(universe.len(), Sense::Minimize).with_unit_objective();
        for node in universe {
            let terms = graph
                .neighbors(*node)?
                .filter_map(|neighbour| index.get(&neighbour).map(|var| (*var, 1)))
                .collect();
            program.add_constraint(Constraint::new(terms, Relation::AtLeast, 1))?;
        }
        Ok(Some(program))
    }

    // Isolated vertices cannot be totally dominated.
    fn admits_witness(&self, graph: &G) -> Result<bool, GrinError> {
        if sub_total_domination_number(graph)?.is_none() {
            return Ok(false);
        }
        Ok(graph.order() == 0 || min_degree(graph)? > 0)
    }
}

/// Minimum connected k-dominating set. Only defined on connected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedDomination {
    /// Domination threshold.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for ConnectedDomination {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "connected-k-domination"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        sub_k_domination_number(graph, self.k)
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
        is_connected_k_dominating_set(graph, candidate, k)
    }

    fn admits_witness(&self, graph: &G) -> Result<bool, GrinError> {
        Ok(graph.is_connected())
    }
}

/// Minimum independent k-dominating set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndependentDomination {
    /// Domination threshold.
    pub k: usize,
}

impl<G: GraphView> SetProblem<G> for IndependentDomination {
    type Item = NodeId;

    fn name(&self) -> &'static str {
        "independent-k-domination"
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }

    fn universe(&self, graph: &G) -> Vec<NodeId> {
        all_vertices(graph)
    }

    fn start_bound(&self, graph: &G) -> Result<usize, GrinError> {
        sub_k_domination_number(graph, self.k)
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
        is_independent_k_dominating_set(graph, candidate, k)
    }

    fn program(&self, graph: &G, universe: &[NodeId]) -> Result<Option<BinaryProgram>, GrinError> {
        let index = variable_index(universe);
        let mut program = k_domination_program(graph, universe, self.k)?;
        for edge in graph.edges() {
            if let (Some(u), Some(v)) = (index.get(&edge.u()), index.get(&edge.v())) {
                program.add_constraint(Constraint::new(vec![(*u, 1), (*v, 1)], Relation::AtMost, 1))?;
            }
        }
        Ok(Some(program))
    }
}

// k·x_v + Σ_{u ∈ N(v)} x_u ≥ k for every vertex v.
fn k_domination_program<G: GraphView>(
    graph: &G,
    universe: &[NodeId],
    k: usize,
) -> Result<BinaryProgram, GrinError> {
    let index = variable_index(universe);
    let weight = k as i64;
    let mut program = BinaryProgram::new(universe.len(), Sense::Minimize).with_unit_objective();
    for (var, node) in universe.iter().enumerate() {
        let mut terms = vec![(var, weight)];
        terms.extend(
            graph
                .neighbors(*node)?
                .filter_map(|neighbour| index.get(&neighbour).map(|other| (*other, 1))),
        );
        program.add_constraint(Constraint::new(terms, Relation::AtLeast, weight))?;
    }
    Ok(program)
}

/// Returns a minimum k-dominating set.
pub fn min_k_dominating_set<G: GraphView>(
    graph: &G,
    k: usize,
    method: Method,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&Domination { k }, graph, method, &Unbounded)
}

/// Returns the k-domination number.
pub fn k_domination_number<G: GraphView>(graph: &G, k: usize, method: Method) -> Result<Option<usize>, GrinError> {
    Ok(min_k_dominating_set(graph, k, method)?.map(|set| set.len()))
}

/// Returns a minimum dominating set.
pub fn min_dominating_set<G: GraphView>(graph: &G, method: Method) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_k_dominating_set(graph, 1, method)
}

/// Returns the domination number.
pub fn domination_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    k_domination_number(graph, 1, method)
}

/// Returns a minimum total dominating set, or `None` when the graph has an
/// isolated vertex.
pub fn min_total_dominating_set<G: GraphView>(
    graph: &G,
    method: Method,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&TotalDomination, graph, method, &Unbounded)
}

/// Returns the total domination number.
pub fn total_domination_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    Ok(min_total_dominating_set(graph, method)?.map(|set| set.len()))
}

/// Returns a minimum connected k-dominating set, or `None` when the graph is
/// disconnected.
pub fn min_connected_k_dominating_set<G: GraphView>(
    graph: &G,
    k: usize,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&ConnectedDomination { k }, graph, Method::BruteForce, &Unbounded)
}

/// Returns the connected k-domination number.
pub fn connected_k_domination_number<G: GraphView>(graph: &G, k: usize) -> Result<Option<usize>, GrinError> {
    Ok(min_connected_k_dominating_set(graph, k)?.map(|set| set.len()))
}

/// Returns a minimum connected dominating set.
pub fn min_connected_dominating_set<G: GraphView>(graph: &G) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_connected_k_dominating_set(graph, 1)
}

/// Returns the connected domination number.
pub fn connected_domination_number<G: GraphView>(graph: &G) -> Result<Option<usize>, GrinError> {
    connected_k_domination_number(graph, 1)
}

/// Returns a minimum independent k-dominating set.
pub fn min_independent_k_dominating_set<G: GraphView>(
    graph: &G,
    k: usize,
    method: Method,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    solve(&IndependentDomination { k }, graph, method, &Unbounded)
}

/// Returns the independent k-domination number.
pub fn independent_k_domination_number<G: GraphView>(
    graph: &G,
    k: usize,
    method: Method,
) -> Result<Option<usize>, GrinError> {
    Ok(min_independent_k_dominating_set(graph, k, method)?.map(|set| set.len()))
}

/// Returns a minimum independent dominating set.
pub fn min_independent_dominating_set<G: GraphView>(
    graph: &G,
    method: Method,
) -> Result<Option<Vec<NodeId>>, GrinError> {
    min_independent_k_dominating_set(graph, 1, method)
}

/// Returns the independent domination number.
pub fn independent_domination_number<G: GraphView>(graph: &G, method: Method) -> Result<Option<usize>, GrinError> {
    independent_k_domination_number(graph, 1, method)
}
