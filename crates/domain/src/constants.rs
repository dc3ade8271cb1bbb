//! Rule constants
//!
//! Centralized location for the bounds every constrained break and schedule
//! type is built from. Values are minutes unless the name says otherwise.
//! They are compile-time constants: a type such as `BreakFrom60Minutes`
//! means the same thing everywhere it appears.

use chrono::TimeDelta;

/// Presence rule: a worker is at work this long before and after any break
pub const BREAK_PRESENCE_OFFSET_MINUTES: i64 = 30;

// Break bounds

/// Minimum of the 15-minute break types
pub const SHORT_BREAK_MIN_MINUTES: i64 = 15;
/// Minimum of the 60-minute break types
pub const LONG_BREAK_MIN_MINUTES: i64 = 60;
/// Cap shared by the capped break types
pub const BREAK_MAX_MINUTES: i64 = 180;

// Schedule bounds, measured on net worked time

/// Partial-day minimum
pub const PARTIAL_SCHEDULE_MIN_MINUTES: i64 = 120;
/// Partial-day maximum
pub const PARTIAL_SCHEDULE_MAX_MINUTES: i64 = 420;
/// Full-day minimum
pub const FULL_SCHEDULE_MIN_MINUTES: i64 = 421;
/// Full-day maximum
pub const FULL_SCHEDULE_MAX_MINUTES: i64 = 480;

// Field labels used by the policy factories in error messages

/// Label for the break
pub const BREAK_FIELD: &str = "break";
/// Label for the schedule
pub const SCHEDULE_FIELD: &str = "schedule";

/// The presence offset as a `TimeDelta`.
pub fn break_presence_offset() -> TimeDelta {
    TimeDelta::minutes(BREAK_PRESENCE_OFFSET_MINUTES)
}
