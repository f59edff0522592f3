#![deny(missing_docs)]

//! Exact combinatorial search over graph subsets.
//!
//! Three procedures live here: [`SetSearch`], which enumerates subsets of a
//! universe by cardinality and returns the first one satisfying a predicate;
//! [`ForcingClosure`], the k-forcing fixed point together with the predicates
//! built on it; and [`HavelHakimi`], the degree sequence reduction with its full
//! trace. None of them mutate the graph they inspect.

mod engine;
mod forcing;
mod havel_hakimi;
mod validate;

pub use engine::{SearchOptions, SetSearch};
pub use forcing::{
    closure, is_connected_k_forcing_set, is_connected_zero_forcing_set, is_k_forcing_active_set,
    is_k_forcing_set, is_k_forcing_vertex, is_k_power_dominating_set, is_power_dominating_set,
    is_total_k_forcing_set, is_total_zero_forcing_set, is_zero_forcing_active_set,
    is_zero_forcing_set, is_zero_forcing_vertex, ForcingClosure,
};
pub use havel_hakimi::HavelHakimi;
pub use validate::{integer_from_f64, k_from_f64, validate_k};
