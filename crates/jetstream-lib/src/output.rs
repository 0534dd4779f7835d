use std::fmt::Write;

use serde::Serialize;

use crate::graph::{Cost, Edge, Graph, Position};
use crate::planner::FlightReport;
use crate::search::{SearchStats, SearchStrategy};

/// Presentation style for turning a [`FlightSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Cost, savings and one line per jetstream.
    PlainText,
    /// The cost on the first line, then `start finish` per jetstream.
    Basic,
}

/// Jetstream leg within a planned flight.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightLeg {
    pub index: usize,
    pub start: Position,
    pub finish: Position,
}

/// Structured representation of a planned flight that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub strategy: SearchStrategy,
    pub track_length: Position,
    pub base_cost: Cost,
    pub cost: Cost,
    pub walking_cost: Cost,
    pub savings: Cost,
    pub legs: Vec<FlightLeg>,
    pub stats: SearchStats,
}

impl FlightSummary {
    pub fn from_report(report: &FlightReport) -> Self {
        let legs = report
            .segments
            .iter()
            .enumerate()
            .map(|(index, &(start, finish))| FlightLeg {
                index: index + 1,
                start,
                finish,
            })
            .collect();

        Self {
            strategy: report.strategy,
            track_length: report.track_length,
            base_cost: report.base_cost,
            cost: report.cost,
            walking_cost: report.walking_cost,
            savings: report.savings(),
            legs,
            stats: report.stats,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Flight: 0 -> {} (cost {}, walking {}, saved {}, strategy: {})",
            self.track_length, self.cost, self.walking_cost, self.savings, self.strategy
        );

        if self.legs.is_empty() {
            let _ = writeln!(buffer, "No jetstreams used.");
        } else {
            for leg in &self.legs {
                let _ = writeln!(
                    buffer,
                    "{:>3}: {} -> {} ({} units)",
                    leg.index,
                    leg.start,
                    leg.finish,
                    leg.finish - leg.start
                );
            }
        }

        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.cost);
        for leg in &self.legs {
            let _ = writeln!(buffer, "{} {}", leg.start, leg.finish);
        }
        buffer
    }
}

/// Serializable view of a padded step graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphDump {
    pub track_length: Position,
    pub base_cost: Cost,
    pub jetstreams: usize,
    pub synthetic: usize,
    pub edges: Vec<Edge>,
}

impl GraphDump {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            track_length: graph.track_length(),
            base_cost: graph.base_cost(),
            jetstreams: graph.segments().len(),
            synthetic: graph.synthetic_edge_count(),
            edges: graph.edges().copied().collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Graph: track length {}, base cost {} ({} jetstreams, {} synthetic)",
            self.track_length, self.base_cost, self.jetstreams, self.synthetic
        );
        for edge in &self.edges {
            let marker = if edge.is_synthetic() { "~" } else { "+" };
            let _ = writeln!(
                buffer,
                "{marker} {} -> {} cost {}",
                edge.start, edge.finish, edge.cost
            );
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> FlightReport {
        FlightReport {
            strategy: SearchStrategy::DepthFirst,
            base_cost: 50,
            track_length: 24,
            cost: 352,
            walking_cost: 1200,
            segments: vec![(0, 5), (6, 11), (14, 17), (19, 24)],
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn summary_numbers_legs_from_one() {
        let summary = FlightSummary::from_report(&report());
        assert_eq!(summary.legs[0].index, 1);
        assert_eq!(summary.legs[3].index, 4);
        assert_eq!(summary.savings, 848);
        let pairs: Vec<_> = summary.legs.iter().map(|leg| (leg.start, leg.finish)).collect();
        assert_eq!(pairs, report().segments);
    }

    #[test]
    fn plain_rendering_lists_each_leg() {
        let rendered = FlightSummary::from_report(&report()).render(RenderMode::PlainText);
        assert!(rendered.starts_with("Flight: 0 -> 24 (cost 352, walking 1200, saved 848"));
        assert!(rendered.contains("  1: 0 -> 5 (5 units)"));
        assert!(rendered.contains("  4: 19 -> 24 (5 units)"));
    }

    #[test]
    fn basic_rendering_is_machine_friendly() {
        let rendered = FlightSummary::from_report(&report()).render(RenderMode::Basic);
        assert_eq!(rendered, "352\n0 5\n6 11\n14 17\n19 24\n");
    }

    #[test]
    fn plain_rendering_notes_walking_only() {
        let mut walking = report();
        walking.segments.clear();
        walking.cost = 1200;
        let rendered = FlightSummary::from_report(&walking).render(RenderMode::PlainText);
        assert!(rendered.contains("No jetstreams used."));
    }

    #[test]
    fn summary_serializes_strategy_in_kebab_case() {
        let json = serde_json::to_value(FlightSummary::from_report(&report())).expect("json");
        assert_eq!(json["strategy"], "depth-first");
        assert_eq!(json["legs"][1]["start"], 6);
    }
}
