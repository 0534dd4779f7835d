//! Plan command handler for computing the cheapest flight.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use jetstream_lib::{
    load_flight_plan, plan_flight, FlightRequest, FlightSummary, SearchOptions, SearchStrategy,
};

use crate::output::{render_flight, OutputFormat};

/// Traversal order accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::DepthFirst => SearchStrategy::DepthFirst,
            StrategyArg::BreadthFirst => SearchStrategy::BreadthFirst,
        }
    }
}

/// Arguments for the plan command.
#[derive(Debug, Clone, Args)]
pub struct PlanCommandArgs {
    /// Flight plan file: base cost on the first line, then `start finish cost` per line.
    #[arg(env = "JETSTREAM_PLAN")]
    pub file: PathBuf,
    /// Search traversal order; decides which of several equally cheap flights is reported.
    #[arg(long, value_enum, default_value_t = StrategyArg::DepthFirst)]
    pub strategy: StrategyArg,
    /// Disable pruning of states that reach a position no cheaper than before.
    #[arg(long)]
    pub no_milestones: bool,
}

impl PlanCommandArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> FlightRequest {
        FlightRequest {
            options: SearchOptions {
                strategy: self.strategy.into(),
                milestone_pruning: !self.no_milestones,
            },
        }
    }
}

/// Handle the plan subcommand.
pub fn handle_plan_command(args: &PlanCommandArgs, format: OutputFormat) -> Result<()> {
    let plan = load_flight_plan(&args.file)
        .with_context(|| format!("failed to load flight plan from {}", args.file.display()))?;

    let report = plan_flight(&plan, &args.to_request()).with_context(|| {
        format!(
            "failed to plan a flight for {} ({} jetstreams)",
            args.file.display(),
            plan.segments.len()
        )
    })?;

    let summary = FlightSummary::from_report(&report);
    print!("{}", render_flight(&summary, format)?);
    Ok(())
}
