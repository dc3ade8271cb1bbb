//! Error types for interval construction and rule validation

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};
use shiftguard_common::error::{ErrorClassification, ErrorSeverity};
use shiftguard_common::time::format_time_delta;
use thiserror::Error;

use crate::impl_domain_status_conversions;

/// An interval could not be built from its endpoints
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntervalError {
    /// The end does not come after the start
    #[error("interval end {end} must be after its start {start}")]
    NotIncreasing { start: DateTime<Utc>, end: DateTime<Utc> },

    /// Adding the length to the start leaves chrono's representable range
    #[error("interval of {} starting at {start} ends out of range", span(.length))]
    OutOfRange {
        start: DateTime<Utc>,
        #[serde(serialize_with = "as_seconds")]
        length: TimeDelta,
    },
}

impl ErrorClassification for IntervalError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}

/// A break or schedule was rejected
///
/// The first three variants are the rule taxonomy shared by every
/// constrained type. `MissingBreak` only comes out of untyped request
/// handling.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleError {
    /// Duration (net worked time for schedules) is under the lower bound
    #[error("{field} must last at least {}, but lasts {}", span(.minimum), span(.actual))]
    BelowMinimum {
        field: String,
        #[serde(serialize_with = "as_seconds")]
        minimum: TimeDelta,
        #[serde(serialize_with = "as_seconds")]
        actual: TimeDelta,
    },

    /// Duration (net worked time for schedules) is over the upper bound
    #[error("{field} must last at most {}, but lasts {}", span(.maximum), span(.actual))]
    AboveMaximum {
        field: String,
        #[serde(serialize_with = "as_seconds")]
        maximum: TimeDelta,
        #[serde(serialize_with = "as_seconds")]
        actual: TimeDelta,
    },

    /// The break does not leave the presence offset on both sides
    #[error(
        "{field} break must begin at least {} after the schedule starts \
         and end at least {} before it ends",
        span(.offset),
        span(.offset)
    )]
    BreakNotContained {
        field: String,
        #[serde(serialize_with = "as_seconds")]
        offset: TimeDelta,
    },

    /// A full-day request arrived without a break
    #[error("{field} requires a break")]
    MissingBreak { field: String },
}

/// Which rule a [`ScheduleError`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// See [`ScheduleError::BelowMinimum`]
    BelowMinimum,
    /// See [`ScheduleError::AboveMaximum`]
    AboveMaximum,
    /// See [`ScheduleError::BreakNotContained`]
    BreakNotContained,
    /// See [`ScheduleError::MissingBreak`]
    MissingBreak,
}

impl_domain_status_conversions!(ViolationKind {
    BelowMinimum => "below_minimum",
    AboveMaximum => "above_maximum",
    BreakNotContained => "break_not_contained",
    MissingBreak => "missing_break",
});

impl ScheduleError {
    /// Create a `BelowMinimum` error
    pub fn below_minimum(field: impl Into<String>, minimum: TimeDelta, actual: TimeDelta) -> Self {
        Self::BelowMinimum { field: field.into(), minimum, actual }
    }

    /// Create an `AboveMaximum` error
    pub fn above_maximum(field: impl Into<String>, maximum: TimeDelta, actual: TimeDelta) -> Self {
        Self::AboveMaximum { field: field.into(), maximum, actual }
    }

    /// Create a `BreakNotContained` error
    pub fn break_not_contained(field: impl Into<String>, offset: TimeDelta) -> Self {
        Self::BreakNotContained { field: field.into(), offset }
    }

    /// Create a `MissingBreak` error
    pub fn missing_break(field: impl Into<String>) -> Self {
        Self::MissingBreak { field: field.into() }
    }

    /// The rule this error reports
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::BelowMinimum { .. } => ViolationKind::BelowMinimum,
            Self::AboveMaximum { .. } => ViolationKind::AboveMaximum,
            Self::BreakNotContained { .. } => ViolationKind::BreakNotContained,
            Self::MissingBreak { .. } => ViolationKind::MissingBreak,
        }
    }

    /// The field label the error was raised for
    pub fn field(&self) -> &str {
        match self {
            Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::BreakNotContained { field, .. }
            | Self::MissingBreak { field } => field,
        }
    }
}

impl ErrorClassification for ScheduleError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}

/// Result type alias for rule validation
pub type Result<T> = std::result::Result<T, ScheduleError>;

fn span(delta: &TimeDelta) -> String {
    format_time_delta(*delta)
}

fn as_seconds<S: Serializer>(
    delta: &TimeDelta,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(delta.num_seconds())
}
