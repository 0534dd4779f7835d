use std::collections::{HashMap, VecDeque};
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, Position};

/// Order in which pending search states are explored.
///
/// Both orders find the same minimum cost. They differ only in which of
/// several equally cheap paths is reported: the first one completed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Work stack. Edges at each position are tried in adjacency order, so
    /// jetstreams are followed before synthetic travel.
    #[default]
    DepthFirst,
    /// Work queue. Prefers the cheapest path with the fewest hops.
    BreadthFirst,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchStrategy::DepthFirst => "depth-first",
            SearchStrategy::BreadthFirst => "breadth-first",
        };
        f.write_str(value)
    }
}

/// Knobs for a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub strategy: SearchStrategy,
    /// Abandon states that reach a position no cheaper than an earlier state.
    pub milestone_pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            milestone_pruning: true,
        }
    }
}

/// Counters collected while exploring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States whose outgoing edges were enumerated.
    pub expanded: usize,
    /// States abandoned because they could not beat the incumbent.
    pub pruned_by_cost: usize,
    /// States abandoned because a cheaper state already reached their position.
    pub pruned_by_milestone: usize,
    /// Times the incumbent was replaced by a strictly cheaper path.
    pub improvements: usize,
}

/// Cheapest flight found by [`find_optimal_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimalPath {
    pub cost: Cost,
    /// Jetstreams used, in flight order. Synthetic travel is not listed.
    pub segments: Vec<(Position, Position)>,
    pub stats: SearchStats,
}

#[derive(Debug)]
struct SearchState {
    position: Position,
    path: Vec<(Position, Position)>,
    cost: Cost,
}

/// Lowest cost recorded per position. The first state to reach a position is
/// always accepted.
#[derive(Debug, Default)]
struct Milestones {
    lowest: HashMap<Position, Cost>,
}

impl Milestones {
    /// Record `cost` at `position` when it is strictly cheaper than anything
    /// seen there. Returns `false` when the state is dominated.
    fn improve(&mut self, position: Position, cost: Cost) -> bool {
        match self.lowest.get_mut(&position) {
            Some(lowest) if cost >= *lowest => false,
            Some(lowest) => {
                *lowest = cost;
                true
            }
            None => {
                self.lowest.insert(position, cost);
                true
            }
        }
    }
}

/// Find the cheapest flight from position 0 to the end of the track.
///
/// Branch-and-bound over every edge sequence in the padded graph. The
/// incumbent starts as walking the whole track at the base cost with no
/// jetstreams, and is only replaced by a strictly cheaper complete path.
pub fn find_optimal_path(graph: &Graph, options: &SearchOptions) -> Result<OptimalPath> {
    if !graph.is_padded() {
        return Err(Error::GraphNotPadded);
    }
    let track_length = graph.track_length();
    if track_length == 0 {
        return Err(Error::ZeroTrackLength);
    }
    if graph.neighbours(0).is_empty() {
        return Err(Error::UnreachableStart);
    }

    let mut best_cost = graph.walking_cost(track_length)?;
    let mut best_path: Vec<(Position, Position)> = Vec::new();
    let mut stats = SearchStats::default();
    let mut milestones = Milestones::default();

    let mut pending = VecDeque::new();
    pending.push_back(SearchState {
        position: 0,
        path: Vec::new(),
        cost: 0,
    });

    while let Some(state) = next_state(&mut pending, options.strategy) {
        if state.cost >= best_cost {
            stats.pruned_by_cost += 1;
            continue;
        }

        if state.position == track_length {
            trace!(cost = state.cost, hops = state.path.len(), "new incumbent");
            best_cost = state.cost;
            best_path = state.path;
            stats.improvements += 1;
            continue;
        }

        if options.milestone_pruning && !milestones.improve(state.position, state.cost) {
            stats.pruned_by_milestone += 1;
            continue;
        }

        stats.expanded += 1;
        let edges = graph.neighbours(state.position);
        let mut successors = Vec::with_capacity(edges.len());
        for edge in edges {
            // An overflowing sum is past any incumbent, so it is pruned like one.
            let cost = match state.cost.checked_add(edge.cost) {
                Some(cost) if cost < best_cost => cost,
                _ => {
                    stats.pruned_by_cost += 1;
                    continue;
                }
            };

            let mut path = state.path.clone();
            if !edge.is_synthetic() {
                path.push((edge.start, edge.finish));
            }
            successors.push(SearchState {
                position: edge.finish,
                path,
                cost,
            });
        }

        match options.strategy {
            // Reversed so the first adjacency edge is popped first.
            SearchStrategy::DepthFirst => pending.extend(successors.into_iter().rev()),
            SearchStrategy::BreadthFirst => pending.extend(successors),
        }
    }

    debug!(
        strategy = %options.strategy,
        cost = best_cost,
        expanded = stats.expanded,
        pruned_by_cost = stats.pruned_by_cost,
        pruned_by_milestone = stats.pruned_by_milestone,
        improvements = stats.improvements,
        "search exhausted"
    );

    Ok(OptimalPath {
        cost: best_cost,
        segments: best_path,
        stats,
    })
}

fn next_state(
    pending: &mut VecDeque<SearchState>,
    strategy: SearchStrategy,
) -> Option<SearchState> {
    match strategy {
        SearchStrategy::DepthFirst => pending.pop_back(),
        SearchStrategy::BreadthFirst => pending.pop_front(),
    }
}
