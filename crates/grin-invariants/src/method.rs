//! Strategy selection for set-valued invariants.
//!
//! Every search-based invariant is described once as a [`SetProblem`] and
//! then handed to [`solve`], which resolves a [`Method`] to either the
//! exhaustive [`SetSearch`] strategy or an [`IlpOracle`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::{GraphView, Interrupt, NodeId};
use grin_search::{validate_k, SetSearch};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ilp::{BinaryProgram, BranchAndBound, IlpOracle};

/// Algorithm used to compute a set-valued invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Exhaustive enumeration by cardinality.
    #[default]
    BruteForce,
    /// 0/1 integer program solved by an oracle.
    Ilp,
}

impl Method {
    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::BruteForce => "brute_force",
            Method::Ilp => "ilp",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = GrinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" | "bf" => Ok(Method::BruteForce),
            "ilp" => Ok(Method::Ilp),
            other => Err(GrinError::InvalidArgument(
                ErrorInfo::new("unknown-method", "unrecognised method")
                    .with_context("method", other)
                    .with_hint("expected one of: brute-force, ilp"),
            )),
        }
    }
}

/// Optimisation direction of a [`SetProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Smallest qualifying subset.
    Minimize,
    /// Largest qualifying subset.
    Maximize,
}

/// An extremal subset problem over a graph.
pub trait SetProblem<G: GraphView> {
    /// Element of the universe (a vertex or an edge).
    type Item: Clone;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the smallest or the largest qualifying subset is wanted.
    fn goal(&self) -> Goal;

    /// The elements subsets are drawn from, in enumeration order.
    fn universe(&self, graph: &G) -> Vec<Self::Item>;

    /// A sound lower bound (minimisation) or upper bound (maximisation) on
    /// the optimal cardinality.
    fn start_bound(&self, graph: &G) -> Result<usize, GrinError>;

    /// The integer parameter handed to the predicate.
    fn k(&self) -> usize {
        1
    }

    /// The defining predicate. Long running predicates poll `interrupt`.
    fn holds(
        &self,
        graph: &G,
        candidate: &[Self::Item],
        k: usize,
        interrupt: &dyn Interrupt,
    ) -> Result<bool, GrinError>;

    /// Binary program whose first `universe.len()` variables select the
    /// universe elements, if the problem has a formulation.
    fn program(&self, _graph: &G, _universe: &[Self::Item]) -> Result<Option<BinaryProgram>, GrinError> {
        Ok(None)
    }

    /// Returns `false` when it is known up front that no subset qualifies.
    fn admits_witness(&self, _graph: &G) -> Result<bool, GrinError> {
        Ok(true)
    }
}

/// Solves `problem` with the default [`BranchAndBound`] oracle.
pub fn solve<G, P>(
    problem: &P,
    graph: &G,
    method: Method,
    interrupt: &dyn Interrupt,
) -> Result<Option<Vec<P::Item>>, GrinError>
where
    G: GraphView,
    P: SetProblem<G>,
{
    let oracle = BranchAndBound::new().with_interrupt(interrupt);
    solve_with(problem, graph, method, interrupt, &oracle)
}

/// Solves `problem` with an explicit oracle for [`Method::Ilp`].
///
/// `Ok(None)` means no subset qualifies; an infeasible integer program is
/// reported the same way.
pub fn solve_with<G, P>(
    problem: &P,
    graph: &G,
    method: Method,
    interrupt: &dyn Interrupt,
    oracle: &dyn IlpOracle,
) -> Result<Option<Vec<P::Item>>, GrinError>
where
    G: GraphView,
    P: SetProblem<G>,
{
    let k = validate_k(problem.k())?;
    if !problem.admits_witness(graph)? {
        debug!(problem = problem.name(), "no witness can exist");
        return Ok(None);
    }
    let universe = problem.universe(graph);
    debug!(
        problem = problem.name(),
        method = %method,
        k,
        universe = universe.len(),
        "dispatching set problem"
    );
    match method {
        Method::BruteForce => {
            let start = problem.start_bound(graph)?;
            let search = SetSearch::new(graph).with_interrupt(interrupt);
            let predicate = |g: &G, candidate: &[P::Item], k: usize| problem.holds(g, candidate, k, interrupt);
            match problem.goal() {
                Goal::Minimize => search.search_min(&universe, predicate, k, start),
                Goal::Maximize => search.search_max(&universe, predicate, k, start),
            }
        }
        Method::Ilp => {
            let program = problem.program(graph, &universe)?.ok_or_else(|| {
                GrinError::InvalidArgument(
                    ErrorInfo::new("unsupported-method", "no integer program for this invariant")
                        .with_context("problem", problem.name())
                        .with_hint("use the brute-force method"),
                )
            })?;
            interrupt.check()?;
            let assignment = match oracle.solve(&program) {
                Ok(assignment) => assignment,
                Err(GrinError::Ilp(info)) if info.code == "infeasible" => {
                    debug!(problem = problem.name(), "integer program is infeasible");
                    return Ok(None);
                }
                Err(err) => return Err(err),
            };
            Ok(Some(
                universe
                    .into_iter()
                    .zip(assignment)
                    .filter_map(|(item, selected)| selected.then_some(item))
                    .collect(),
            ))
        }
    }
}

/// Maps each vertex of a universe to its variable index.
pub(crate) fn variable_index(universe: &[NodeId]) -> BTreeMap<NodeId, usize> {
    universe
        .iter()
        .enumerate()
        .map(|(index, node)| (*node, index))
        .collect()
}

/// Collects every vertex of the graph in ascending order.
pub(crate) fn all_vertices<G: GraphView>(graph: &G) -> Vec<NodeId> {
    graph.vertices().collect()
}
