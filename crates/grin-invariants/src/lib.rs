//! Named graph invariants built on the exact searches of `grin-search`.
//!
//! Set-valued invariants are described as [`SetProblem`]s and solved either by
//! exhaustive enumeration or through an [`IlpOracle`]; the [`Method`] enum
//! selects between the two. Every search-based invariant returns
//! `Result<Option<_>, GrinError>`: `Ok(None)` is an undefined invariant (no
//! qualifying set exists), which is distinct from a computed zero.
//!
//! Degree-sequence bounds, the Havel-Hakimi residue, disparity and the
//! topological indices are plain folds and need no search.

pub mod chromatic;
pub mod clique;
pub mod config;
pub mod disparity;
pub mod distance_measures;
pub mod domination;
pub mod dsi;
pub mod ilp;
pub mod independence;
pub mod matching;
pub mod method;
pub mod power_domination;
pub mod report;
pub mod residue;
pub mod topological;
pub mod vertex_cover;
pub mod zero_forcing;

pub use chromatic::{
    chromatic_number, chromatic_number_contraction, chromatic_number_ilp, chromatic_number_with,
};
pub use clique::{clique_number, is_clique, max_clique, Clique};
pub use config::InvariantConfig;
pub use disparity::{
    average_closed_vertex_disparity, average_vertex_disparity, closed_cw_disparity,
    closed_disparity_sequence, closed_inverse_disparity, closed_k_disparity,
    closed_vertex_disparity, cw_disparity, disparity_sequence, inverse_disparity, irregularity,
    k_disparity, vertex_disparity,
};
pub use distance_measures::triameter;
pub use domination::{
    connected_domination_number, connected_k_domination_number, domination_number,
    independent_domination_number, independent_k_domination_number,
    is_connected_dominating_set, is_connected_k_dominating_set, is_dominating_set,
    is_independent_dominating_set, is_independent_k_dominating_set, is_k_dominating_set,
    is_total_dominating_set, k_domination_number, min_connected_dominating_set,
    min_connected_k_dominating_set, min_dominating_set, min_independent_dominating_set,
    min_independent_k_dominating_set, min_k_dominating_set, min_total_dominating_set,
    total_domination_number, ConnectedDomination, Domination, IndependentDomination,
    TotalDomination,
};
pub use dsi::{annihilation_number, slater, sub_k_domination_number, sub_total_domination_number};
pub use ilp::{BinaryProgram, BranchAndBound, Constraint, IlpOracle, Relation, Sense};
pub use independence::{
    independence_number, is_independent_set, is_k_independent_set, k_independence_number,
    max_independent_set, max_k_independent_set, Independence,
};
pub use matching::{
    is_matching, is_maximal_matching, matching_number, max_matching, min_maximal_matching,
    min_maximal_matching_number, Matching, MinimalMaximalMatching,
};
pub use method::{solve, solve_with, Goal, Method, SetProblem};
pub use power_domination::{
    is_power_dominating_set, k_power_domination_number, min_k_power_dominating_set,
    min_power_dominating_set, power_domination_number, PowerDomination,
};
pub use report::InvariantReport;
pub use residue::{k_residual_index, k_residue, residue};
pub use topological::{
    atom_bond_connectivity_index, augmented_randic_index, generalized_randic_index,
    harmonic_index, randic_index, sum_connectivity_index,
};
pub use vertex_cover::{is_vertex_cover, min_vertex_cover, vertex_cover_number, VertexCover};
pub use zero_forcing::{
    connected_k_forcing_number, connected_zero_forcing_number, is_connected_zero_forcing_set,
    is_k_forcing_active_set, is_k_forcing_vertex, is_total_zero_forcing_set,
    is_zero_forcing_active_set, is_zero_forcing_set, is_zero_forcing_vertex, k_forcing_number,
    min_connected_k_forcing_set, min_connected_zero_forcing_set, min_k_forcing_set,
    min_total_k_forcing_set, min_total_zero_forcing_set, min_zero_forcing_set,
    total_k_forcing_number, total_zero_forcing_number, zero_forcing_number, ConnectedForcing,
    Forcing, TotalForcing,
};
