//! Output formatting for flight rendering.
//!
//! This module turns library summaries into the text printed on stdout for
//! each `--format` choice.

use anyhow::Result;
use clap::ValueEnum;

use jetstream_lib::{FlightSummary, GraphDump, RenderMode};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly summary.
    #[default]
    Text,
    /// Cost followed by one `start finish` line per jetstream.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Render a flight summary in the requested format.
pub fn render_flight(summary: &FlightSummary, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => summary.render(RenderMode::PlainText),
        OutputFormat::Basic => summary.render(RenderMode::Basic),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(summary)?),
    };
    Ok(rendered)
}

/// Render a padded graph in the requested format. `Basic` lists the same edges
/// as `Text`.
pub fn render_graph(dump: &GraphDump, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text | OutputFormat::Basic => dump.render(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(dump)?),
    };
    Ok(rendered)
}
