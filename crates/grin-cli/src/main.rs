use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    havel_hakimi::{self, HavelHakimiArgs},
    invariants::{self, InvariantsArgs},
};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "grin", about = "Exact graph invariant calculator")]
struct Cli {
    /// Log search progress at debug level on stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the invariants of a JSON graph and emit a report.
    Invariants(InvariantsArgs),
    /// Run the Havel-Hakimi process on a degree sequence.
    HavelHakimi(HavelHakimiArgs),
    /// Write a named graph family as JSON.
    Generate(GenerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cli.command {
        Command::Invariants(args) => invariants::run(&args),
        Command::HavelHakimi(args) => havel_hakimi::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}
