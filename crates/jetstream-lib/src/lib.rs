//! Jetstream library entry points.
//!
//! This crate exposes helpers to load a flight plan, pad its jetstreams into a
//! complete step graph, and search that graph for the cheapest flight from
//! position 0 to the end of the track. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod planner;
pub mod search;

pub use error::{Error, Result};
pub use graph::{build_graph, Cost, Edge, EdgeKind, Graph, Position, Segment};
pub use input::{load_flight_plan, parse_flight_plan, FlightPlan};
pub use output::{FlightLeg, FlightSummary, GraphDump, RenderMode};
pub use planner::{
    plan_flight, plan_on_graph, select_planner, BreadthFirstPlanner, DepthFirstPlanner,
    FlightPlanner, FlightReport, FlightRequest,
};
pub use search::{find_optimal_path, OptimalPath, SearchOptions, SearchStats, SearchStrategy};
