use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use grin_core::RunProvenance;
use grin_graph::{canonical_hash, graph_from_json};
use grin_invariants::{InvariantConfig, InvariantReport, Method};
use serde::Serialize;
use tracing::info;

use super::emit;

#[derive(Args, Debug)]
pub struct InvariantsArgs {
    /// JSON graph (`{"nodes": [..], "edges": [[u, v], ..]}`).
    #[arg(long)]
    pub graph: PathBuf,
    /// Strategy for invariants with an integer program (`brute-force` or `ilp`).
    #[arg(long)]
    pub method: Option<String>,
    /// Parameter of the k-generalised invariants.
    #[arg(long)]
    pub k: Option<usize>,
    /// Optional YAML configuration; flags override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Wall clock budget in milliseconds.
    #[arg(long)]
    pub time_limit_ms: Option<u64>,
    /// Output path for the JSON report; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReportFile {
    invariants: InvariantReport,
    provenance: RunProvenance,
}

pub fn run(args: &InvariantsArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let graph = graph_from_json(&fs::read_to_string(&args.graph)?)?;
    info!(graph = %args.graph.display(), method = %config.method, k = config.k, "computing invariants");

    let invariants = InvariantReport::compute(&graph, &config)?;
    let provenance = RunProvenance::new(canonical_hash(&graph), config.method.as_str())
        .with_tool("grin", env!("CARGO_PKG_VERSION"));
    let rendered = serde_json::to_string_pretty(&ReportFile {
        invariants,
        provenance,
    })?;
    emit(&rendered, args.out.as_deref())
}

fn resolve_config(args: &InvariantsArgs) -> Result<InvariantConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        None => InvariantConfig::default(),
    };
    if let Some(method) = &args.method {
        config.method = method.parse::<Method>()?;
    }
    if let Some(k) = args.k {
        config.k = k;
    }
    if args.time_limit_ms.is_some() {
        config.time_limit_ms = args.time_limit_ms;
    }
    config.validate()?;
    Ok(config)
}
