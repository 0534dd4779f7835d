//! Flight plan loading.
//!
//! A flight plan is a line-based text file. The first non-blank line holds the
//! base cost per unit of ordinary travel; every following non-blank line holds
//! one jetstream as `start finish cost`, separated by whitespace.
//!
//! ```text
//! 50
//! 0 5 10
//! 6 11 20
//! ```

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Cost, Position, Segment};

/// Parsed flight plan: the base cost plus every jetstream in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightPlan {
    pub base_cost: Cost,
    pub segments: Vec<Segment>,
}

impl FlightPlan {
    pub fn new(base_cost: Cost, segments: Vec<Segment>) -> Self {
        Self {
            base_cost,
            segments,
        }
    }

    /// Furthest finish across all segments, or `None` for an empty plan.
    pub fn track_length(&self) -> Option<Position> {
        self.segments.iter().map(|segment| segment.finish).max()
    }
}

impl FromStr for FlightPlan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_flight_plan(s.as_bytes())
    }
}

/// Load a flight plan from a file path.
pub fn load_flight_plan(path: &Path) -> Result<FlightPlan> {
    let file = fs::File::open(path)?;
    let plan = parse_flight_plan(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        base_cost = plan.base_cost,
        segments = plan.segments.len(),
        "loaded flight plan"
    );
    Ok(plan)
}

/// Parse a flight plan from any buffered reader.
pub fn parse_flight_plan<R: BufRead>(reader: R) -> Result<FlightPlan> {
    let mut base_cost: Option<Cost> = None;
    let mut segments = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match base_cost {
            None => {
                let value = parse_base_cost(trimmed, line_no)?;
                trace!(base_cost = value, "parsed base cost");
                base_cost = Some(value);
            }
            Some(_) => {
                let segment = parse_segment(trimmed, line_no)?;
                trace!(?segment, line = line_no, "parsed segment");
                segments.push(segment);
            }
        }
    }

    let base_cost = base_cost.ok_or_else(|| Error::MalformedInput {
        line: 1,
        message: "missing base cost line".to_string(),
    })?;

    Ok(FlightPlan {
        base_cost,
        segments,
    })
}

fn parse_base_cost(text: &str, line: usize) -> Result<Cost> {
    let malformed = || Error::MalformedInput {
        line,
        message: format!("base cost must be a positive integer, found '{text}'"),
    };

    let value: Cost = text.parse().map_err(|_| malformed())?;
    if value == 0 {
        return Err(malformed());
    }
    Ok(value)
}

fn parse_segment(text: &str, line: usize) -> Result<Segment> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(Error::MalformedInput {
            line,
            message: format!(
                "expected three integers 'start finish cost', found {} field(s)",
                fields.len()
            ),
        });
    }

    let number = |field: &str, name: &str| -> Result<u64> {
        field.parse().map_err(|_| Error::MalformedInput {
            line,
            message: format!("{name} '{field}' is not a non-negative integer"),
        })
    };

    Ok(Segment {
        start: number(fields[0], "start")?,
        finish: number(fields[1], "finish")?,
        cost: number(fields[2], "cost")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_cost_and_segments() {
        let plan: FlightPlan = "50\n0 5 10\n6 11 20\n".parse().expect("valid plan");
        assert_eq!(plan.base_cost, 50);
        assert_eq!(
            plan.segments,
            vec![Segment::new(0, 5, 10), Segment::new(6, 11, 20)]
        );
        assert_eq!(plan.track_length(), Some(11));
    }

    #[test]
    fn blank_lines_and_extra_whitespace_are_tolerated() {
        let plan: FlightPlan = "\n  3 \n\n1\t4   2\n\n\n".parse().expect("valid plan");
        assert_eq!(plan.base_cost, 3);
        assert_eq!(plan.segments, vec![Segment::new(1, 4, 2)]);
    }

    #[test]
    fn zero_base_cost_is_malformed() {
        let err = "0\n0 5 10\n".parse::<FlightPlan>().unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn wrong_field_count_reports_line_number() {
        let err = "5\n0 5 10\n\n6 11\n".parse::<FlightPlan>().unwrap_err();
        match err {
            Error::MalformedInput { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("found 2 field(s)"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let err = "5\n0 5 -1\n".parse::<FlightPlan>().unwrap_err();
        match err {
            Error::MalformedInput { line, message } => {
                assert_eq!(line, 2);
                assert!(message.starts_with("cost '-1'"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_missing_base_cost() {
        let err = "\n\n".parse::<FlightPlan>().unwrap_err();
        assert!(err.to_string().contains("missing base cost"));
    }

    #[test]
    fn plan_without_segments_parses_but_has_no_track() {
        let plan: FlightPlan = "7\n".parse().expect("valid plan");
        assert!(plan.segments.is_empty());
        assert_eq!(plan.track_length(), None);
    }
}
