//! The two schedule types
//!
//! Bounds are on net worked time. The break passed at creation is checked
//! but not stored; callers keep their own validated break alongside.

use chrono::TimeDelta;
use serde::Serialize;
use shiftguard_domain::constants::{
    FULL_SCHEDULE_MAX_MINUTES, FULL_SCHEDULE_MIN_MINUTES, PARTIAL_SCHEDULE_MAX_MINUTES,
    PARTIAL_SCHEDULE_MIN_MINUTES,
};
use shiftguard_domain::{Interval, Result};

use super::factory::create_schedule;

/// A schedule of 2 to 7 hours of net work, with an optional break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScheduleUntil7Hours {
    interval: Interval,
}

impl ScheduleUntil7Hours {
    /// Least net worked time, in minutes
    pub const MIN_MINUTES: i64 = PARTIAL_SCHEDULE_MIN_MINUTES;
    /// Most net worked time, in minutes
    pub const MAX_MINUTES: i64 = PARTIAL_SCHEDULE_MAX_MINUTES;

    /// Validate `interval`, with `break_interval` counted out of the worked
    /// time when present
    pub fn create(
        field_name: &str,
        break_interval: Option<Interval>,
        interval: Interval,
    ) -> Result<Self> {
        create_schedule(
            field_name,
            |interval| Self { interval },
            TimeDelta::minutes(Self::MIN_MINUTES),
            TimeDelta::minutes(Self::MAX_MINUTES),
            break_interval,
            interval,
        )
    }

    /// The validated schedule interval
    pub fn value(&self) -> Interval {
        self.interval
    }
}

/// A schedule of 7h01m to 8 hours of net work, which always has a break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScheduleUntil8Hours {
    interval: Interval,
}

impl ScheduleUntil8Hours {
    /// Least net worked time, in minutes
    pub const MIN_MINUTES: i64 = FULL_SCHEDULE_MIN_MINUTES;
    /// Most net worked time, in minutes
    pub const MAX_MINUTES: i64 = FULL_SCHEDULE_MAX_MINUTES;

    /// Validate `interval` with its mandatory `break_interval`
    pub fn create(field_name: &str, break_interval: Interval, interval: Interval) -> Result<Self> {
        create_schedule(
            field_name,
            |interval| Self { interval },
            TimeDelta::minutes(Self::MIN_MINUTES),
            TimeDelta::minutes(Self::MAX_MINUTES),
            Some(break_interval),
            interval,
        )
    }

    /// The validated schedule interval
    pub fn value(&self) -> Interval {
        self.interval
    }
}
