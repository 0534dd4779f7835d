use std::collections::{BTreeMap, BTreeSet};
use std::iter;
use std::ops::Bound;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Position along the track. The start of every flight is position 0.
pub type Position = u64;

/// Travel cost. Costs are never negative.
pub type Cost = u64;

/// Jetstream as supplied by the flight plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    pub start: Position,
    pub finish: Position,
    pub cost: Cost,
}

impl Segment {
    pub fn new(start: Position, finish: Position, cost: Cost) -> Self {
        Self {
            start,
            finish,
            cost,
        }
    }
}

/// Classification for edges in the step graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Supplied by the flight plan.
    Jetstream,
    /// Inserted by padding; ordinary travel at the base cost.
    Synthetic,
}

/// Edge within the step graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub start: Position,
    pub finish: Position,
    pub cost: Cost,
    pub kind: EdgeKind,
}

impl Edge {
    fn jetstream(segment: &Segment) -> Self {
        Self {
            start: segment.start,
            finish: segment.finish,
            cost: segment.cost,
            kind: EdgeKind::Jetstream,
        }
    }

    fn synthetic(start: Position, finish: Position, cost: Cost) -> Self {
        Self {
            start,
            finish,
            cost,
            kind: EdgeKind::Synthetic,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.kind == EdgeKind::Synthetic
    }
}

/// Step graph used by the cost search.
///
/// Each graph owns its adjacency, track length and base cost; nothing is shared
/// between graphs built from different flight plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Position, Vec<Edge>>,
    segments: Vec<Segment>,
    base_cost: Cost,
    track_length: Position,
    padded: bool,
}

impl Graph {
    /// Validate the segments and build an unpadded graph holding only the
    /// supplied jetstreams.
    pub fn from_segments(segments: &[Segment], base_cost: Cost) -> Result<Self> {
        if base_cost == 0 {
            return Err(Error::InvalidBaseCost { base_cost });
        }

        let track_length = segments
            .iter()
            .map(|segment| segment.finish)
            .max()
            .ok_or(Error::EmptySegmentSet)?;
        if track_length == 0 {
            return Err(Error::ZeroTrackLength);
        }

        let mut adjacency: BTreeMap<Position, Vec<Edge>> = BTreeMap::new();
        for segment in segments {
            if segment.finish <= segment.start {
                return Err(Error::InvalidSegment {
                    start: segment.start,
                    finish: segment.finish,
                });
            }
            adjacency
                .entry(segment.start)
                .or_default()
                .push(Edge::jetstream(segment));
        }

        Ok(Self {
            adjacency,
            segments: segments.to_vec(),
            base_cost,
            track_length,
            padded: false,
        })
    }

    /// Insert synthetic edges so every gap between a range end and a later
    /// range start can be flown at the base cost.
    ///
    /// Range ends are position 0 and every jetstream finish; range starts are
    /// every jetstream start plus the track length itself. For each range end
    /// the candidate starts are visited in ascending order until a jetstream
    /// fits entirely inside the gap, since that jetstream fits every larger gap
    /// too. Returns the number of synthetic edges added; calling it on an
    /// already padded graph adds nothing.
    pub fn pad(&mut self) -> Result<usize> {
        if self.padded {
            return Ok(0);
        }

        let range_ends: BTreeSet<Position> = iter::once(0)
            .chain(self.segments.iter().map(|segment| segment.finish))
            .collect();
        let range_starts: BTreeSet<Position> = self
            .segments
            .iter()
            .map(|segment| segment.start)
            .chain(iter::once(self.track_length))
            .collect();

        let mut inserted = 0usize;
        for &end in &range_ends {
            for &start in range_starts.range((Bound::Excluded(end), Bound::Unbounded)) {
                if self.has_segment_within(end, start) {
                    break;
                }
                let cost = self.walking_cost(start - end)?;
                self.adjacency
                    .entry(end)
                    .or_default()
                    .push(Edge::synthetic(end, start, cost));
                inserted += 1;
            }
        }

        self.padded = true;
        Ok(inserted)
    }

    /// Whether some jetstream starts in `[from, to)` and finishes no later than `to`.
    fn has_segment_within(&self, from: Position, to: Position) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.start >= from && segment.start < to && segment.finish <= to)
    }

    /// Cost of covering `distance` units at the base cost.
    pub fn walking_cost(&self, distance: Position) -> Result<Cost> {
        self.base_cost
            .checked_mul(distance)
            .ok_or_else(|| Error::CostOverflow {
                context: format!("{distance} units at base cost {}", self.base_cost),
            })
    }

    /// Return the edges leaving a position.
    pub fn neighbours(&self, position: Position) -> &[Edge] {
        self.adjacency
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Positions with at least one outgoing edge, ascending.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every edge, grouped by start position in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.values().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn synthetic_edge_count(&self) -> usize {
        self.edges().filter(|edge| edge.is_synthetic()).count()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn base_cost(&self) -> Cost {
        self.base_cost
    }

    pub fn track_length(&self) -> Position {
        self.track_length
    }

    pub fn is_padded(&self) -> bool {
        self.padded
    }
}

/// Build and pad the step graph for a set of jetstreams.
pub fn build_graph(segments: &[Segment], base_cost: Cost) -> Result<Graph> {
    let mut graph = Graph::from_segments(segments, base_cost)?;
    let inserted = graph.pad()?;
    debug!(
        track_length = graph.track_length(),
        jetstreams = segments.len(),
        synthetic = inserted,
        edges = graph.edge_count(),
        positions = graph.adjacency.len(),
        "padded step graph"
    );
    Ok(graph)
}
