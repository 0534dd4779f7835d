//! Graph command handler for inspecting the padded step graph.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use jetstream_lib::{build_graph, load_flight_plan, GraphDump};

use crate::output::{render_graph, OutputFormat};

/// Arguments for the graph command.
#[derive(Debug, Clone, Args)]
pub struct GraphCommandArgs {
    /// Flight plan file to pad.
    #[arg(env = "JETSTREAM_PLAN")]
    pub file: PathBuf,
}

/// Handle the graph subcommand.
///
/// Prints every jetstream and synthetic edge the search would consider.
pub fn handle_graph_command(args: &GraphCommandArgs, format: OutputFormat) -> Result<()> {
    let plan = load_flight_plan(&args.file)
        .with_context(|| format!("failed to load flight plan from {}", args.file.display()))?;
    let graph = build_graph(&plan.segments, plan.base_cost)
        .with_context(|| format!("failed to build graph for {}", args.file.display()))?;

    print!("{}", render_graph(&GraphDump::from_graph(&graph), format)?);
    Ok(())
}
