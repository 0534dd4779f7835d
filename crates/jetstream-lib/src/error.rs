use thiserror::Error;

use crate::graph::{Cost, Position};

/// Convenient result alias for the jetstream library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No jetstream segments were supplied, so no track length can be derived.
    #[error("flight plan contains no jetstream segments; cannot derive a track length")]
    EmptySegmentSet,

    /// The furthest segment finish is zero.
    #[error("track length must be greater than zero")]
    ZeroTrackLength,

    /// Raised when a search is attempted on a graph that was never padded.
    #[error("graph has not been padded; build it with build_graph before searching")]
    GraphNotPadded,

    /// Raised when nothing leaves position 0 after padding.
    #[error("no edges leave the start position 0")]
    UnreachableStart,

    /// Base cost per unit of ordinary travel must be positive.
    #[error("base cost must be a positive integer, got {base_cost}")]
    InvalidBaseCost { base_cost: Cost },

    /// A segment that does not move strictly forward.
    #[error("jetstream segment {start} -> {finish} must finish after it starts")]
    InvalidSegment { start: Position, finish: Position },

    /// Raised by the flight plan parser for a line it cannot understand.
    #[error("malformed flight plan at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// Cost arithmetic exceeded the range of the cost type.
    #[error("cost overflow while pricing {context}")]
    CostOverflow { context: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error means the graph or track could not be established.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::EmptySegmentSet
                | Error::ZeroTrackLength
                | Error::GraphNotPadded
                | Error::UnreachableStart
                | Error::InvalidBaseCost { .. }
                | Error::InvalidSegment { .. }
        )
    }
}
