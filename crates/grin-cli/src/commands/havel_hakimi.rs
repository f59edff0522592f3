use std::error::Error;

use clap::Args;
use grin_search::HavelHakimi;
use serde_json::json;

#[derive(Args, Debug)]
pub struct HavelHakimiArgs {
    /// Degree sequence; every value must be a non-negative integer.
    #[arg(required = true, allow_negative_numbers = true)]
    pub sequence: Vec<f64>,
}

pub fn run(args: &HavelHakimiArgs) -> Result<(), Box<dyn Error>> {
    let process = HavelHakimi::from_f64(&args.sequence)?;
    let summary = json!({
        "process": process.process(),
        "elimination_sequence": process.elimination_sequence(),
        "partial_elimination": process.partial_elimination(),
        "graphic": process.is_graphic(),
        "depth": process.depth(),
        "residue": process.residue(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
