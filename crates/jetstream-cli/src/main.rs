use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use jetstream_cli::commands::graph::{handle_graph_command, GraphCommandArgs};
use jetstream_cli::commands::plan::{handle_plan_command, PlanCommandArgs};
use jetstream_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Jetstream flight planner")]
struct Cli {
    /// Output format for results.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest flight from position 0 to the end of the track.
    Plan(PlanCommandArgs),
    /// Print the padded step graph built from a flight plan.
    Graph(GraphCommandArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Plan(args) => handle_plan_command(args, cli.format),
        Command::Graph(args) => handle_graph_command(args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
