use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::{Interrupt, Unbounded};
use tracing::debug;

use super::{BinaryProgram, IlpOracle, Relation, Sense};

static UNBOUNDED: Unbounded = Unbounded;

const POLL_EVERY: u64 = 1024;

/// Depth-first implicit enumeration oracle.
///
/// Variables are fixed in index order. Each constraint tracks the partial
/// left hand side together with the largest and smallest amounts the free
/// variables can still add, which prunes infeasible branches as soon as a
/// constraint can no longer be met. Branches whose optimistic objective does
/// not beat the incumbent are cut as well.
#[derive(Clone, Copy)]
pub struct BranchAndBound<'a> {
    node_limit: Option<u64>,
    interrupt: &'a dyn Interrupt,
}

impl Default for BranchAndBound<'_> {
    fn default() -> Self {
        Self {
            node_limit: None,
            interrupt: &UNBOUNDED,
        }
    }
}

impl<'a> BranchAndBound<'a> {
    /// Creates an oracle without node limit or interrupt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts with `Ilp/node-limit` after exploring `limit` nodes.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Installs a cooperative cancellation hook.
    pub fn with_interrupt<'b>(self, interrupt: &'b dyn Interrupt) -> BranchAndBound<'b> {
        BranchAndBound {
            node_limit: self.node_limit,
            interrupt,
        }
    }
}

impl IlpOracle for BranchAndBound<'_> {
    fn solve(&self, program: &BinaryProgram) -> Result<Vec<bool>, GrinError> {
        let mut state = SearchState::new(program, self.node_limit, self.interrupt);
        if (0..program.constraints().len()).all(|row| state.row_ok(row)) {
            state.descend(0)?;
        }
        let nodes = state.nodes;
        match state.best {
            Some((cost, assignment)) => {
                debug!(
                    vars = program.num_vars(),
                    constraints = program.constraints().len(),
                    nodes,
                    objective = program.evaluate(&assignment),
                    normalised_cost = cost,
                    "branch and bound solved program"
                );
                Ok(assignment)
            }
            None => Err(GrinError::Ilp(
                ErrorInfo::new("infeasible", "program has no feasible assignment")
                    .with_context("vars", program.num_vars())
                    .with_context("nodes", nodes),
            )),
        }
    }
}

struct SearchState<'p, 'i> {
    program: &'p BinaryProgram,
    /// Costs normalised so that the search always minimises.
    costs: Vec<i64>,
    incidence: Vec<Vec<(usize, i64)>>,
    lhs: Vec<i64>,
    free_pos: Vec<i64>,
    free_neg: Vec<i64>,
    cost: i64,
    free_cost_neg: i64,
    assignment: Vec<bool>,
    best: Option<(i64, Vec<bool>)>,
    nodes: u64,
    node_limit: Option<u64>,
    interrupt: &'i dyn Interrupt,
}

impl<'p, 'i> SearchState<'p, 'i> {
    fn new(program: &'p BinaryProgram, node_limit: Option<u64>, interrupt: &'i dyn Interrupt) -> Self {
        let sign = match program.sense() {
            Sense::Minimize => 1,
            Sense::Maximize => -1,
        };
        let costs: Vec<i64> = program.objective().iter().map(|c| c * sign).collect();
        let rows = program.constraints().len();
        let mut incidence = vec![Vec::new(); program.num_vars()];
        let mut free_pos = vec![0; rows];
        let mut free_neg = vec![0; rows];
        for (row, constraint) in program.constraints().iter().enumerate() {
            for &(var, coefficient) in &constraint.terms {
                incidence[var].push((row, coefficient));
                if coefficient > 0 {
                    free_pos[row] += coefficient;
                } else {
                    free_neg[row] += coefficient;
                }
            }
        }
        let free_cost_neg = costs.iter().filter(|c| **c < 0).sum();
        Self {
            program,
            costs,
            incidence,
            lhs: vec![0; rows],
            free_pos,
            free_neg,
            cost: 0,
            free_cost_neg,
            assignment: vec![false; program.num_vars()],
            best: None,
            nodes: 0,
            node_limit,
            interrupt,
        }
    }

    fn descend(&mut self, var: usize) -> Result<(), GrinError> {
        self.nodes += 1;
        if let Some(limit) = self.node_limit {
            if self.nodes > limit {
                return Err(GrinError::Ilp(
                    ErrorInfo::new("node-limit", "branch and bound node limit reached")
                        .with_context("limit", limit),
                ));
            }
        }
        if self.nodes % POLL_EVERY == 0 {
            self.interrupt.check()?;
        }
        if let Some((best_cost, _)) = &self.best {
            if self.cost + self.free_cost_neg >= *best_cost {
                return Ok(());
            }
        }
        if var == self.assignment.len() {
            self.best = Some((self.cost, self.assignment.clone()));
            return Ok(());
        }
        let order = if self.costs[var] > 0 {
            [false, true]
        } else {
            [true, false]
        };
        for value in order {
            self.fix(var, value);
            if self.incidence[var].iter().all(|(row, _)| self.row_ok(*row)) {
                self.descend(var + 1)?;
            }
            self.release(var, value);
        }
        Ok(())
    }

    fn fix(&mut self, var: usize, value: bool) {
        let cost = self.costs[var];
        self.free_cost_neg -= cost.min(0);
        if value {
            self.cost += cost;
        }
        for &(row, coefficient) in &self.incidence[var] {
            if coefficient > 0 {
                self.free_pos[row] -= coefficient;
            } else {
                self.free_neg[row] -= coefficient;
            }
            if value {
                self.lhs[row] += coefficient;
            }
        }
        self.assignment[var] = value;
    }

    fn release(&mut self, var: usize, value: bool) {
        let cost = self.costs[var];
        self.free_cost_neg += cost.min(0);
        if value {
            self.cost -= cost;
        }
        for &(row, coefficient) in &self.incidence[var] {
            if coefficient > 0 {
                self.free_pos[row] += coefficient;
            } else {
                self.free_neg[row] += coefficient;
            }
            if value {
                self.lhs[row] -= coefficient;
            }
        }
        self.assignment[var] = false;
    }

    fn row_ok(&self, row: usize) -> bool {
        let constraint = &self.program.constraints()[row];
        let reachable_max = self.lhs[row] + self.free_pos[row];
        let reachable_min = self.lhs[row] + self.free_neg[row];
        match constraint.relation {
            Relation::AtLeast => reachable_max >= constraint.rhs,
            Relation::AtMost => reachable_min <= constraint.rhs,
            Relation::Equal => reachable_max >= constraint.rhs && reachable_min <= constraint.rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ilp::Constraint;

    #[test]
    fn knapsack_style_maximisation() {
        // maximise 3a + 2b + 2c subject to a + b + c <= 2 and a + b >= 1
        let mut program = BinaryProgram::new(3, Sense::Maximize);
        program.set_objective(0, 3).unwrap();
        program.set_objective(1, 2).unwrap();
        program.set_objective(2, 2).unwrap();
        program
            .add_constraint(Constraint::new(vec![(0, 1), (1, 1), (2, 1)], Relation::AtMost, 2))
            .unwrap();
        program
            .add_constraint(Constraint::new(vec![(0, 1), (1, 1)], Relation::AtLeast, 1))
            .unwrap();
        let assignment = BranchAndBound::new().solve(&program).unwrap();
        assert!(program.is_feasible(&assignment));
        assert_eq!(program.evaluate(&assignment), 5);
    }

    #[test]
    fn infeasible_program_is_reported() {
        let mut program = BinaryProgram::new(2, Sense::Minimize).with_unit_objective();
        program
            .add_constraint(Constraint::new(vec![(0, 1), (1, 1)], Relation::AtLeast, 3))
            .unwrap();
        let err = BranchAndBound::new().solve(&program).unwrap_err();
        assert!(matches!(err, GrinError::Ilp(ref info) if info.code == "infeasible"));
    }

    #[test]
    fn negative_coefficients_and_equalities() {
        // x0 - x1 == 0, x1 + x2 == 1, minimise -x0 + x2
        let mut program = BinaryProgram::new(3, Sense::Minimize);
        program.set_objective(0, -1).unwrap();
        program.set_objective(2, 1).unwrap();
        program
            .add_constraint(Constraint::new(vec![(0, 1), (1, -1)], Relation::Equal, 0))
            .unwrap();
        program
            .add_constraint(Constraint::new(vec![(1, 1), (2, 1)], Relation::Equal, 1))
            .unwrap();
        let assignment = BranchAndBound::new().solve(&program).unwrap();
        assert_eq!(assignment, vec![true, true, false]);
    }

    #[test]
    fn node_limit_aborts() {
        let program = BinaryProgram::new(12, Sense::Maximize).with_unit_objective();
        let err = BranchAndBound::new().with_node_limit(3).solve(&program).unwrap_err();
        assert_eq!(err.code(), "node-limit");
    }

    #[test]
    fn empty_program_has_empty_solution() {
        let program = BinaryProgram::new(0, Sense::Minimize);
        assert_eq!(BranchAndBound::new().solve(&program).unwrap(), Vec::<bool>::new());
    }

    #[test]
    fn unknown_variables_are_rejected() {
        let mut program = BinaryProgram::new(1, Sense::Minimize);
        let err = program
            .add_constraint(Constraint::new(vec![(4, 1)], Relation::AtLeast, 1))
            .unwrap_err();
        assert_eq!(err.code(), "unknown-variable");
    }
}
