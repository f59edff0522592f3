use grin_core::errors::{ErrorInfo, GrinError};
use grin_core::GraphView;
use tracing::debug;

use crate::validate::integer_from_f64;

/// Havel–Hakimi reduction of an integer sequence with its full trace.
///
/// Each step sorts the working sequence in non-increasing order, removes the
/// head `d` and decrements the next `d` entries. The process stops once the
/// head is zero or no smaller than the working length. The sequence is graphic
/// exactly when the terminal snapshot is all zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HavelHakimi {
    process: Vec<Vec<i64>>,
    eliminated: Vec<i64>,
    graphic: bool,
}

impl HavelHakimi {
    /// Runs the reduction on `sequence`.
    ///
    /// The empty sequence is graphic with the single snapshot `[]`. Negative
    /// entries are rejected with `negative-degree`.
    pub fn new(sequence: &[i64]) -> Result<Self, GrinError> {
        if let Some((idx, value)) = sequence.iter().enumerate().find(|(_, value)| **value < 0) {
            return Err(GrinError::InvalidArgument(
                ErrorInfo::new("negative-degree", "degree values must be non-negative")
                    .with_context("index", idx)
                    .with_context("value", value),
            ));
        }
        let mut working = sequence.to_vec();
        sort_descending(&mut working);
        let mut process = vec![working.clone()];
        let mut eliminated = Vec::new();

        while let Some(&head) = working.first() {
            if head <= 0 || head as usize >= working.len() {
                break;
            }
            working.remove(0);
            for value in working.iter_mut().take(head as usize) {
                *value -= 1;
            }
            sort_descending(&mut working);
            process.push(working.clone());
            eliminated.push(head);
        }

        let graphic = working.iter().all(|value| *value == 0);
        if graphic {
            eliminated.extend_from_slice(&working);
        }
        debug!(length = sequence.len(), depth = process.len() - 1, graphic, "havel-hakimi settled");
        Ok(Self {
            process,
            eliminated,
            graphic,
        })
    }

    /// Runs the reduction on float values, each of which must be integral.
    pub fn from_f64(sequence: &[f64]) -> Result<Self, GrinError> {
        let values = sequence
            .iter()
            .enumerate()
            .map(|(idx, value)| integer_from_f64(*value).map_err(|err| err.with_context("index", idx)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&values)
    }

    /// Runs the reduction on the degree sequence of `graph`.
    pub fn from_graph<G: GraphView>(graph: &G) -> Result<Self, GrinError> {
        let degrees = graph
            .vertices()
            .map(|node| graph.degree(node).map(|d| d as i64))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&degrees)
    }

    /// Returns every snapshot, starting with the sorted input.
    pub fn process(&self) -> &[Vec<i64>] {
        &self.process
    }

    /// Returns the sorted input sequence.
    pub fn initial_sequence(&self) -> &[i64] {
        &self.process[0]
    }

    /// Returns the last snapshot.
    pub fn terminal_sequence(&self) -> &[i64] {
        &self.process[self.process.len() - 1]
    }

    /// Returns the elimination sequence, or `None` when the input is not graphic.
    pub fn elimination_sequence(&self) -> Option<&[i64]> {
        self.graphic.then_some(self.eliminated.as_slice())
    }

    /// Returns the recorded eliminations.
    ///
    /// For a non-graphic input this is the incomplete list of heads removed
    /// before the reduction stalled.
    pub fn partial_elimination(&self) -> &[i64] {
        &self.eliminated
    }

    /// Returns the number of reduction steps taken.
    pub fn depth(&self) -> usize {
        self.process.len() - 1
    }

    /// Returns whether the input is the degree sequence of a simple graph.
    pub fn is_graphic(&self) -> bool {
        self.graphic
    }

    /// Returns the number of zeros left at the end, or `None` when not graphic.
    pub fn residue(&self) -> Option<usize> {
        self.graphic.then(|| self.terminal_sequence().len())
    }
}

fn sort_descending(values: &mut [i64]) {
    values.sort_unstable_by(|a, b| b.cmp(a));
}
