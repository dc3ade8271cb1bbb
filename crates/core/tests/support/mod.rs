//! Shared test helpers for `shiftguard-core` integration tests.
//!
//! Fixtures build intervals on a fixed working day so tests read as wall
//! clock times, and `init_tracing` routes rejection logs to the test output.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Once;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use shiftguard_core::Interval;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `shiftguard_core=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("shiftguard_core=debug"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// `hour:minute` on the fixture day, in UTC.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).single().expect("valid fixture time")
}

/// Interval between two wall clock times on the fixture day.
pub fn span(start: (u32, u32), end: (u32, u32)) -> Interval {
    Interval::new(at(start.0, start.1), at(end.0, end.1)).expect("increasing fixture interval")
}

/// Interval of `length` starting at noon on the fixture day.
pub fn lasting(length: TimeDelta) -> Interval {
    Interval::from_start(at(12, 0), length).expect("positive fixture length")
}
