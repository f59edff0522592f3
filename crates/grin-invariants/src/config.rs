use std::time::Duration;

use grin_core::errors::GrinError;
use grin_core::{CancelToken, Interrupt};
use grin_search::validate_k;
use serde::{Deserialize, Serialize};

use crate::ilp::BranchAndBound;
use crate::method::Method;

/// YAML-configurable parameters for an invariant run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvariantConfig {
    /// Strategy for invariants that support more than one.
    pub method: Method,
    /// Parameter of the k-generalised invariants.
    pub k: usize,
    /// Wall clock budget for the whole run, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_ms: Option<u64>,
    /// Maximum number of branch and bound nodes per integer program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_limit: Option<u64>,
}

impl Default for InvariantConfig {
    fn default() -> Self {
        Self {
            method: Method::BruteForce,
            k: 1,
            time_limit_ms: None,
            node_limit: None,
        }
    }
}

impl InvariantConfig {
    /// Rejects `k = 0`.
    pub fn validate(&self) -> Result<(), GrinError> {
        validate_k(self.k).map(|_| ())
    }

    /// Builds a cancellation token honouring `time_limit_ms`.
    pub fn cancel_token(&self) -> CancelToken {
        match self.time_limit_ms {
            Some(ms) => CancelToken::with_time_limit(Duration::from_millis(ms)),
            None => CancelToken::new(),
        }
    }

    /// Builds the ILP oracle honouring `node_limit`.
    pub fn oracle<'a>(&self, interrupt: &'a dyn Interrupt) -> BranchAndBound<'a> {
        let oracle = BranchAndBound::new().with_interrupt(interrupt);
        match self.node_limit {
            Some(limit) => oracle.with_node_limit(limit),
            None => oracle,
        }
    }
}
