use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chromatic::chromatic_number_with;
use crate::clique::Clique;
use crate::config::InvariantConfig;
use crate::domination::{ConnectedDomination, Domination, IndependentDomination, TotalDomination};
use crate::dsi::{annihilation_number, slater, sub_total_domination_number};
use crate::ilp::IlpOracle;
use crate::independence::Independence;
use crate::matching::{Matching, MinimalMaximalMatching};
use crate::method::{solve_with, Method, SetProblem};
use crate::power_domination::PowerDomination;
use crate::residue::{k_residue, residue};
use crate::topological::{harmonic_index, randic_index};
use crate::vertex_cover::VertexCover;
use crate::zero_forcing::{ConnectedForcing, Forcing, TotalForcing};

/// Summary of every invariant computed for one graph.
///
/// Undefined invariants are `None` and serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvariantReport {
    pub order: usize,
    pub size: usize,
    pub method: Method,
    pub k: usize,
    pub domination_number: Option<usize>,
    pub k_domination_number: Option<usize>,
    pub total_domination_number: Option<usize>,
    pub connected_domination_number: Option<usize>,
    pub independent_domination_number: Option<usize>,
    pub independence_number: Option<usize>,
    pub k_independence_number: Option<usize>,
    pub matching_number: Option<usize>,
    pub min_maximal_matching_number: Option<usize>,
    pub vertex_cover_number: Option<usize>,
    pub clique_number: Option<usize>,
    pub zero_forcing_number: Option<usize>,
    pub k_forcing_number: Option<usize>,
    pub total_zero_forcing_number: Option<usize>,
    pub connected_zero_forcing_number: Option<usize>,
    pub power_domination_number: Option<usize>,
    pub chromatic_number: usize,
    pub residue: Option<usize>,
    pub k_residue: f64,
    pub slater: usize,
    pub sub_total_domination_number: Option<usize>,
    pub annihilation_number: usize,
    pub randic_index: f64,
    pub harmonic_index: f64,
}

impl InvariantReport {
    /// Computes the report under `config`. Every search and the colouring step
    /// poll its time limit.
    pub fn compute<G: GraphView>(graph: &G, config: &InvariantConfig) -> Result<Self, GrinError> {
        config.validate()?;
        let token = config.cancel_token();
        let oracle = config.oracle(&token);
        let run = Runner {
            graph,
            interrupt: &token,
            oracle: &oracle,
        };
        let method = config.method;
        let k = config.k;
        debug!(order = graph.order(), size = graph.size(), method = %method, k, "computing invariant report");

        let chromatic = chromatic_number_with(graph, method, &token, &oracle)?;

        Ok(Self {
            order: graph.order(),
            size: graph.size(),
            method,
            k,
            domination_number: run.number(&Domination { k: 1 }, method)?,
            k_domination_number: run.number(&Domination { k }, method)?,
            total_domination_number: run.number(&TotalDomination, method)?,
            connected_domination_number: run.number(&ConnectedDomination { k: 1 }, Method::BruteForce)?,
            independent_domination_number: run.number(&IndependentDomination { k: 1 }, method)?,
            independence_number: run.number(&Independence { k: 1 }, method)?,
            k_independence_number: run.number(&Independence { k }, method)?,
            matching_number: run.number(&Matching, method)?,
            min_maximal_matching_number: run.number(&MinimalMaximalMatching, Method::BruteForce)?,
            vertex_cover_number: run.number(&VertexCover, method)?,
            clique_number: run.number(&Clique, method)?,
            zero_forcing_number: run.number(&Forcing { k: 1 }, Method::BruteForce)?,
            k_forcing_number: run.number(&Forcing { k }, Method::BruteForce)?,
            total_zero_forcing_number: run.number(&TotalForcing { k: 1 }, Method::BruteForce)?,
            connected_zero_forcing_number: run.number(&ConnectedForcing { k: 1 }, Method::BruteForce)?,
            power_domination_number: run.number(&PowerDomination { k: 1 }, Method::BruteForce)?,
            chromatic_number: chromatic,
            residue: residue(graph)?,
            k_residue: k_residue(graph, k)?,
            slater: slater(graph)?,
            sub_total_domination_number: sub_total_domination_number(graph)?,
            annihilation_number: annihilation_number(graph)?,
            randic_index: randic_index(graph)?,
            harmonic_index: harmonic_index(graph)?,
        })
    }
}

struct Runner<'a, G: GraphView> {
    graph: &'a G,
    interrupt: &'a dyn Interrupt,
    oracle: &'a dyn IlpOracle,
}

impl<G: GraphView> Runner<'_, G> {
    fn number<P: SetProblem<G>>(&self, problem: &P, method: Method) -> Result<Option<usize>, GrinError> {
        Ok(solve_with(problem, self.graph, method, self.interrupt, self.oracle)?.map(|set| set.len()))
    }
}
