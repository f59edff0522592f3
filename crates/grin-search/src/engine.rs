//! Exhaustive enumeration of subsets by cardinality.

use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, Unbounded};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

static UNBOUNDED: Unbounded = Unbounded;

/// Tuning knobs for [`SetSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Number of candidate evaluations between two interrupt polls.
    pub check_interval: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { check_interval: 64 }
    }
}

/// Exhaustive extremal subset search over a fixed graph.
///
/// Candidates of one size are produced lazily in lexicographic order of the
/// universe slice, so the returned witness is the first satisfying subset in
/// that order. The engine never validates `k`; it only hands it to the
/// predicate.
pub struct SetSearch<'a, G: GraphView> {
    graph: &'a G,
    interrupt: &'a dyn Interrupt,
    options: SearchOptions,
}

impl<'a, G: GraphView> SetSearch<'a, G> {
    /// Creates a search over `graph` that never gets interrupted.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            interrupt: &UNBOUNDED,
            options: SearchOptions::default(),
        }
    }

    /// Installs a cooperative cancellation hook.
    pub fn with_interrupt(mut self, interrupt: &'a dyn Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Overrides the search options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the graph being searched.
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns the installed interrupt.
    pub fn interrupt(&self) -> &'a dyn Interrupt {
        self.interrupt
    }

    /// Returns a minimum cardinality subset of `universe` satisfying `predicate`.
    ///
    /// Sizes are tried from `start_bound` upward. `Ok(None)` means no subset of
    /// size at least `start_bound` qualifies, which differs from the empty
    /// witness `Ok(Some(vec![]))`.
    pub fn search_min<T, P>(
        &self,
        universe: &[T],
        mut predicate: P,
        k: usize,
        start_bound: usize,
    ) -> Result<Option<Vec<T>>, GrinError>
    where
        T: Clone,
        P: FnMut(&G, &[T], usize) -> Result<bool, GrinError>,
    {
        let mut evaluated = 0usize;
        for size in start_bound..=universe.len() {
            debug!(size, universe = universe.len(), "search_min: enumerating size level");
            if let Some(witness) = self.first_at_size(universe, size, k, &mut predicate, &mut evaluated)? {
                debug!(size, evaluated, "search_min: witness found");
                return Ok(Some(witness));
            }
        }
        debug!(evaluated, start_bound, "search_min: range exhausted without witness");
        Ok(None)
    }

    /// Returns a maximum cardinality subset of `universe` satisfying `predicate`.
    ///
    /// Sizes are tried from `min(start_bound, |universe|)` down to zero.
    pub fn search_max<T, P>(
        &self,
        universe: &[T],
        mut predicate: P,
        k: usize,
        start_bound: usize,
    ) -> Result<Option<Vec<T>>, GrinError>
    where
        T: Clone,
        P: FnMut(&G, &[T], usize) -> Result<bool, GrinError>,
    {
        let mut evaluated = 0usize;
        let top = start_bound.min(universe.len());
        for size in (0..=top).rev() {
            debug!(size, universe = universe.len(), "search_max: enumerating size level");
            if let Some(witness) = self.first_at_size(universe, size, k, &mut predicate, &mut evaluated)? {
                debug!(size, evaluated, "search_max: witness found");
                return Ok(Some(witness));
            }
        }
        debug!(evaluated, start_bound, "search_max: range exhausted without witness");
        Ok(None)
    }

    fn first_at_size<T, P>(
        &self,
        universe: &[T],
        size: usize,
        k: usize,
        predicate: &mut P,
        evaluated: &mut usize,
    ) -> Result<Option<Vec<T>>, GrinError>
    where
        T: Clone,
        P: FnMut(&G, &[T], usize) -> Result<bool, GrinError>,
    {
        self.interrupt.check()?;
        let interval = self.options.check_interval.max(1);
        for candidate in universe.iter().cloned().combinations(size) {
            *evaluated += 1;
            if *evaluated % interval == 0 {
                self.interrupt.check()?;
            }
            if predicate(self.graph, &candidate, k)? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}
