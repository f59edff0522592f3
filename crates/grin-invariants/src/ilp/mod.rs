//! 0/1 integer linear programs and the oracle contract used to solve them.

mod branch_and_bound;

pub use branch_and_bound::BranchAndBound;

use grin_core::errors::{ErrorInfo, GrinError};
use serde::{Deserialize, Serialize};

/// Optimisation direction of a [`BinaryProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sense {
    /// Minimise the objective.
    Minimize,
    /// Maximise the objective.
    Maximize,
}

/// Comparison used by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `lhs >= rhs`.
    AtLeast,
    /// `lhs <= rhs`.
    AtMost,
    /// `lhs == rhs`.
    Equal,
}

/// Linear constraint `Σ coefficient · x_var (relation) rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Sparse `(variable, coefficient)` terms.
    pub terms: Vec<(usize, i64)>,
    /// Comparison operator.
    pub relation: Relation,
    /// Right hand side.
    pub rhs: i64,
}

impl Constraint {
    /// Creates a constraint from its terms.
    pub fn new(terms: Vec<(usize, i64)>, relation: Relation, rhs: i64) -> Self {
        Self {
            terms,
            relation,
            rhs,
        }
    }

    /// Evaluates the constraint under a full assignment.
    pub fn is_satisfied(&self, assignment: &[bool]) -> bool {
        let lhs: i64 = self
            .terms
            .iter()
            .filter(|(var, _)| assignment.get(*var).copied().unwrap_or(false))
            .map(|(_, coefficient)| coefficient)
            .sum();
        match self.relation {
            Relation::AtLeast => lhs >= self.rhs,
            Relation::AtMost => lhs <= self.rhs,
            Relation::Equal => lhs == self.rhs,
        }
    }
}

/// Optimisation problem over binary variables with an integer objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryProgram {
    num_vars: usize,
    objective: Vec<i64>,
    sense: Sense,
    constraints: Vec<Constraint>,
}

impl BinaryProgram {
    /// Creates a program over `num_vars` variables with a zero objective.
    pub fn new(num_vars: usize, sense: Sense) -> Self {
        Self {
            num_vars,
            objective: vec![0; num_vars],
            sense,
            constraints: Vec::new(),
        }
    }

    /// Sets the objective coefficient of every variable to `1`.
    pub fn with_unit_objective(mut self) -> Self {
        self.objective.iter_mut().for_each(|c| *c = 1);
        self
    }

    /// Sets one objective coefficient.
    pub fn set_objective(&mut self, var: usize, coefficient: i64) -> Result<(), GrinError> {
        self.check_var(var)?;
        self.objective[var] = coefficient;
        Ok(())
    }

    /// Appends a constraint after checking its variable indices.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), GrinError> {
        for (var, _) in &constraint.terms {
            self.check_var(*var)?;
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Objective coefficients.
    pub fn objective(&self) -> &[i64] {
        &self.objective
    }

    /// Optimisation direction.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Objective value of an assignment.
    pub fn evaluate(&self, assignment: &[bool]) -> i64 {
        self.objective
            .iter()
            .zip(assignment)
            .filter(|(_, on)| **on)
            .map(|(coefficient, _)| coefficient)
            .sum()
    }

    /// Returns whether an assignment satisfies every constraint.
    pub fn is_feasible(&self, assignment: &[bool]) -> bool {
        assignment.len() == self.num_vars
            && self.constraints.iter().all(|c| c.is_satisfied(assignment))
    }

    fn check_var(&self, var: usize) -> Result<(), GrinError> {
        if var >= self.num_vars {
            return Err(GrinError::Ilp(
                ErrorInfo::new("unknown-variable", "variable index out of range")
                    .with_context("var", var)
                    .with_context("num_vars", self.num_vars),
            ));
        }
        Ok(())
    }
}

/// Solver returning an optimal assignment of a [`BinaryProgram`].
pub trait IlpOracle {
    /// Solves the program to optimality.
    ///
    /// Infeasible programs yield an `Ilp/infeasible` error.
    fn solve(&self, program: &BinaryProgram) -> Result<Vec<bool>, GrinError>;
}
