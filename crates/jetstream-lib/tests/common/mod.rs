//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use jetstream_lib::{load_flight_plan, FlightPlan};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample flight plan with a known optimum of 352.
#[allow(dead_code)]
pub fn sample_plan_path() -> PathBuf {
    fixtures_dir().join("sample_paths.txt")
}

/// Load the sample flight plan fixture.
#[allow(dead_code)]
pub fn sample_plan() -> FlightPlan {
    load_flight_plan(&sample_plan_path()).expect("sample_paths.txt fixture loads")
}
