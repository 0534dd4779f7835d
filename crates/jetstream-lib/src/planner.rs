//! Flight planning entry point.
//!
//! This module provides:
//! - [`FlightRequest`] - Search options for a planning run
//! - [`FlightPlanner`] - Strategy trait implemented per traversal order
//! - [`FlightReport`] - Planned flight result
//! - [`plan_flight`] - Main entry point: build, pad and search
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use jetstream_lib::{load_flight_plan, plan_flight, FlightRequest};
//!
//! # fn main() -> jetstream_lib::Result<()> {
//! let plan = load_flight_plan(Path::new("docs/fixtures/sample_paths.txt"))?;
//! let report = plan_flight(&plan, &FlightRequest::default())?;
//! println!("Cost: {}", report.cost);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::graph::{build_graph, Cost, Graph, Position};
use crate::input::FlightPlan;
use crate::search::{find_optimal_path, OptimalPath, SearchOptions, SearchStats, SearchStrategy};

/// High-level planning request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightRequest {
    pub options: SearchOptions,
}

impl FlightRequest {
    /// Depth-first search with milestone pruning.
    pub fn depth_first() -> Self {
        Self::default()
    }

    /// Breadth-first search with milestone pruning.
    pub fn breadth_first() -> Self {
        Self {
            options: SearchOptions {
                strategy: SearchStrategy::BreadthFirst,
                ..SearchOptions::default()
            },
        }
    }

    /// Disable milestone pruning, leaving only the cost bound.
    pub fn without_milestones(mut self) -> Self {
        self.options.milestone_pruning = false;
        self
    }
}

/// Trait for search strategies.
pub trait FlightPlanner: Send + Sync {
    /// Traversal order used by this planner.
    fn strategy(&self) -> SearchStrategy;

    /// Search a padded graph for its cheapest flight.
    fn find_path(&self, graph: &Graph, milestone_pruning: bool) -> Result<OptimalPath> {
        let options = SearchOptions {
            strategy: self.strategy(),
            milestone_pruning,
        };
        find_optimal_path(graph, &options)
    }
}

/// Explores with a work stack; ties go to the path that takes jetstreams earliest.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstPlanner;

impl FlightPlanner for DepthFirstPlanner {
    fn strategy(&self) -> SearchStrategy {
        SearchStrategy::DepthFirst
    }
}

/// Explores with a work queue; ties go to the path with the fewest hops.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstPlanner;

impl FlightPlanner for BreadthFirstPlanner {
    fn strategy(&self) -> SearchStrategy {
        SearchStrategy::BreadthFirst
    }
}

/// Select the planner for a given request.
pub fn select_planner(request: &FlightRequest) -> Box<dyn FlightPlanner> {
    match request.options.strategy {
        SearchStrategy::DepthFirst => Box::new(DepthFirstPlanner),
        SearchStrategy::BreadthFirst => Box::new(BreadthFirstPlanner),
    }
}

/// Planned flight returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightReport {
    pub strategy: SearchStrategy,
    pub base_cost: Cost,
    pub track_length: Position,
    /// Cheapest total cost found.
    pub cost: Cost,
    /// Cost of walking the whole track with no jetstreams.
    pub walking_cost: Cost,
    /// Jetstreams used, in flight order.
    pub segments: Vec<(Position, Position)>,
    pub stats: SearchStats,
}

impl FlightReport {
    /// How much cheaper the flight is than walking.
    pub fn savings(&self) -> Cost {
        self.walking_cost.saturating_sub(self.cost)
    }

    pub fn used_shortcuts(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Compute the cheapest flight for a parsed plan.
pub fn plan_flight(plan: &FlightPlan, request: &FlightRequest) -> Result<FlightReport> {
    let graph = build_graph(&plan.segments, plan.base_cost)?;
    plan_on_graph(&graph, request)
}

/// Search an already built graph, for callers that reuse one graph across runs.
pub fn plan_on_graph(graph: &Graph, request: &FlightRequest) -> Result<FlightReport> {
    let planner = select_planner(request);
    let path = planner.find_path(graph, request.options.milestone_pruning)?;
    let walking_cost = graph.walking_cost(graph.track_length())?;

    let report = FlightReport {
        strategy: planner.strategy(),
        base_cost: graph.base_cost(),
        track_length: graph.track_length(),
        cost: path.cost,
        walking_cost,
        segments: path.segments,
        stats: path.stats,
    };

    if report.used_shortcuts() {
        info!(
            cost = report.cost,
            savings = report.savings(),
            jetstreams = report.segments.len(),
            "planned flight"
        );
    } else {
        warn!(
            cost = report.cost,
            "no jetstream combination beats walking the whole track"
        );
    }

    Ok(report)
}
