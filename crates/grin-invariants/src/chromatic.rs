//! Chromatic number: exact by backtracking or by integer programming, plus a
//! contraction-based upper bound.

use std::collections::BTreeMap;

use grin_core::errors::GrinError;
use grin_core::{GraphView, Interrupt, NodeId, Unbounded};
use grin_graph::{common_neighbors, contract_nodes, is_complete_graph, max_degree, SimpleGraph};
use itertools::Itertools;
use tracing::debug;

use crate::ilp::{BinaryProgram, BranchAndBound, Constraint, IlpOracle, Relation, Sense};
use crate::method::Method;

/// Returns the smallest number of colours in a proper vertex colouring.
pub fn chromatic_number<G: GraphView>(graph: &G, method: Method) -> Result<usize, GrinError> {
    chromatic_number_with(graph, method, &Unbounded, &BranchAndBound::new())
}

/// Same as [`chromatic_number`], polling `interrupt` while backtracking and
/// handing [`Method::Ilp`] to `oracle`.
pub fn chromatic_number_with<G: GraphView>(
    graph: &G,
    method: Method,
    interrupt: &dyn Interrupt,
    oracle: &dyn IlpOracle,
) -> Result<usize, GrinError> {
    match method {
        Method::BruteForce => chromatic_number_bf(graph, interrupt),
        Method::Ilp => {
            interrupt.check()?;
            chromatic_number_ilp(graph, oracle)
        }
    }
}

fn chromatic_number_bf<G: GraphView>(graph: &G, interrupt: &dyn Interrupt) -> Result<usize, GrinError> {
    let nodes: Vec<NodeId> = graph.vertices().collect();
    let index: BTreeMap<NodeId, usize> = nodes.iter().enumerate().map(|(i, v)| (*v, i)).collect();
    // Earlier neighbours only; colours are assigned in vertex order.
    let mut earlier = Vec::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        let before: Vec<usize> = graph
            .neighbors(*node)?
            .filter_map(|neighbour| index.get(&neighbour).copied())
            .filter(|other| *other < position)
            .collect();
        earlier.push(before);
    }
    let mut search = Backtrack {
        earlier: &earlier,
        colours: vec![0usize; nodes.len()],
        interrupt,
        steps: 0,
    };
    for palette in 0..=nodes.len() {
        interrupt.check()?;
        if search.colour_from(0, palette)? {
            debug!(order = nodes.len(), chromatic = palette, steps = search.steps, "backtracking colouring found");
            return Ok(palette);
        }
    }
    Ok(nodes.len())
}

const POLL_INTERVAL: u64 = 1024;

struct Backtrack<'a> {
    earlier: &'a [Vec<usize>],
    colours: Vec<usize>,
    interrupt: &'a dyn Interrupt,
    steps: u64,
}

impl Backtrack<'_> {
    fn colour_from(&mut self, position: usize, palette: usize) -> Result<bool, GrinError> {
        self.steps += 1;
        if self.steps % POLL_INTERVAL == 0 {
            self.interrupt.check()?;
        }
        let Some(before) = self.earlier.get(position) else {
            return Ok(true);
        };
        // Symmetry: vertex i never needs a colour above i.
        for colour in 0..palette.min(position + 1) {
            if before.iter().all(|other| self.colours[*other] != colour) {
                self.colours[position] = colour;
                if self.colour_from(position + 1, palette)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Solves the assignment model with colour-use variables `w_c` ordered so
/// that `w_{c+1} ≤ w_c`.
pub fn chromatic_number_ilp<G: GraphView>(graph: &G, oracle: &dyn IlpOracle) -> Result<usize, GrinError> {
    let nodes: Vec<NodeId> = graph.vertices().collect();
    let n = nodes.len();
    if n == 0 {
        return Ok(0);
    }
    let palette = (max_degree(graph)? + 1).min(n);
    let index: BTreeMap<NodeId, usize> = nodes.iter().enumerate().map(|(i, v)| (*v, i)).collect();
    let x = |vertex: usize, colour: usize| palette + vertex * palette + colour;

    let mut program = BinaryProgram::new(palette + n * palette, Sense::Minimize);
    for colour in 0..palette {
        program.set_objective(colour, 1)?;
    }
    for vertex in 0..n {
        let terms = (0..palette).map(|colour| (x(vertex, colour), 1)).collect();
        program.add_constraint(Constraint::new(terms, Relation::Equal, 1))?;
        for colour in 0..palette {
            program.add_constraint(Constraint::new(
                vec![(x(vertex, colour), 1), (colour, -1)],
                Relation::AtMost,
                0,
            ))?;
        }
    }
    for edge in graph.edges() {
        if let (Some(u), Some(v)) = (index.get(&edge.u()), index.get(&edge.v())) {
            for colour in 0..palette {
                program.add_constraint(Constraint::new(
                    vec![(x(*u, colour), 1), (x(*v, colour), 1), (colour, -1)],
                    Relation::AtMost,
                    0,
                ))?;
            }
        }
    }
    for colour in 1..palette {
        program.add_constraint(Constraint::new(
            vec![(colour, 1), (colour - 1, -1)],
            Relation::AtMost,
            0,
        ))?;
    }
    let assignment = oracle.solve(&program)?;
    Ok(assignment.iter().take(palette).filter(|used| **used).count())
}

/// Contracts the non-adjacent pair with the most common neighbours until the
/// graph is complete and returns the order of the resulting clique.
///
/// An upper bound on the chromatic number.
pub fn chromatic_number_contraction<G: GraphView>(graph: &G) -> Result<usize, GrinError> {
    let mut working = SimpleGraph::from_view(graph)?;
    while !is_complete_graph(&working) {
        let mut best: Option<((NodeId, NodeId), usize)> = None;
        let nodes: Vec<NodeId> = working.vertices().collect();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            if working.is_adjacent(u, v) {
                continue;
            }
            let shared = common_neighbors(&working, &[u, v])?.len();
            if best.map_or(true, |(_, most)| shared > most) {
                best = Some(((u, v), shared));
            }
        }
        let Some(((u, v), _)) = best else {
            break;
        };
        contract_nodes(&mut working, &[u, v], None)?;
    }
    Ok(working.order())
}
