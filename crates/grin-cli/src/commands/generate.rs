use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use grin_core::RngHandle;
use grin_graph::{
    barbell_graph, circular_ladder_graph, complete_graph, cycle_graph, empty_graph,
    gnp_random_graph, graph_to_json, null_graph, path_graph, petersen_graph, star_graph,
    trivial_graph, SimpleGraph,
};

use super::emit;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Family {
    Null,
    Trivial,
    Empty,
    Complete,
    Path,
    Cycle,
    Star,
    Petersen,
    Barbell,
    CircularLadder,
    Gnp,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Graph family to generate.
    #[arg(long, value_enum)]
    pub family: Family,
    /// Size parameter (order, number of leaves, bell size or rung count).
    #[arg(long, default_value_t = 5)]
    pub n: usize,
    /// Length of the barbell handle.
    #[arg(long, default_value_t = 0)]
    pub m: usize,
    /// Edge probability for `gnp`.
    #[arg(long, default_value_t = 0.5)]
    pub p: f64,
    /// Seed for `gnp`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Output path; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let graph = build(args)?;
    emit(&graph_to_json(&graph)?, args.out.as_deref())
}

fn build(args: &GenerateArgs) -> Result<SimpleGraph, Box<dyn Error>> {
    let graph = match args.family {
        Family::Null => null_graph(),
        Family::Trivial => trivial_graph(),
        Family::Empty => empty_graph(args.n),
        Family::Complete => complete_graph(args.n),
        Family::Path => path_graph(args.n),
        Family::Cycle => cycle_graph(args.n),
        Family::Star => star_graph(args.n),
        Family::Petersen => petersen_graph(),
        Family::Barbell => barbell_graph(args.n, args.m)?,
        Family::CircularLadder => circular_ladder_graph(args.n),
        Family::Gnp => {
            let mut rng = RngHandle::from_seed(args.seed);
            gnp_random_graph(args.n, args.p, &mut rng)?
        }
    };
    Ok(graph)
}
