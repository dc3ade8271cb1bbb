//! Half-open time interval between two UTC instants
//!
//! Every break and schedule is carried as an [`Interval`]. An interval always
//! ends strictly after it starts, so a zero-length or reversed interval can
//! never reach the rule factories.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::IntervalError;

/// A span of time `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire shape, only used on the way in
#[derive(Deserialize)]
struct RawInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Create an interval, rejecting `end <= start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, IntervalError> {
        if end <= start {
            return Err(IntervalError::NotIncreasing { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create an interval of `length` starting at `start`
    pub fn from_start(start: DateTime<Utc>, length: TimeDelta) -> Result<Self, IntervalError> {
        let end = start
            .checked_add_signed(length)
            .ok_or(IntervalError::OutOfRange { start, length })?;
        Self::new(start, end)
    }

    /// First instant of the interval, included
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Instant the interval stops at, excluded
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Elapsed time between start and end, always positive
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether `instant` falls inside `[start, end)`
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.end.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}
