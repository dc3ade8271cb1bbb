//! # Shiftguard Core
//!
//! Rule validation for timesheet breaks and work schedules.
//!
//! This crate contains:
//! - The generic constrained-type factory ([`create_break`],
//!   [`create_schedule`])
//! - Four break types and two schedule types, each with fixed bounds
//! - The [`TaeSchedule`] and [`ProfessorSchedule`] policies
//! - Validation of raw [`ScheduleRequest`]s
//!
//! ## Architecture Principles
//! - Parse, don't validate: a constrained value can only be obtained from
//!   its validating factory and is immutable afterwards
//! - Failures are returned as [`ScheduleError`], never raised
//! - Pure functions over `Copy` inputs; no I/O, no shared state
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shiftguard_core::{Interval, SchedulePolicy, TaeSchedule};
//!
//! let at = |h, m| Utc.with_ymd_and_hms(2024, 3, 4, h, m, 0).unwrap();
//! let schedule = Interval::new(at(9, 0), at(17, 30)).unwrap();
//! let lunch = Interval::new(at(12, 0), at(13, 0)).unwrap();
//!
//! let full = TaeSchedule::create_full_schedule(lunch, schedule).unwrap();
//! assert_eq!(full.worked_time(), chrono::TimeDelta::minutes(450));
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod constrained;
pub mod policy;

// Re-export specific items to avoid ambiguity
pub use constrained::{
    create_break, create_schedule, BreakFrom15Minutes, BreakFrom15To180Minutes,
    BreakFrom60Minutes, BreakFrom60To180Minutes, ConstrainedBreak, ScheduleUntil7Hours,
    ScheduleUntil8Hours,
};
pub use policy::{
    validate_request, FullSchedule, PartialSchedule, ProfessorFullSchedule,
    ProfessorPartialSchedule, ProfessorSchedule, SchedulePolicy, TaeFullSchedule,
    TaePartialSchedule, TaeSchedule, ValidatedSchedule,
};
pub use shiftguard_domain::{
    ActorKind, Interval, Result, ScheduleError, ScheduleRequest, ScheduleShape, ViolationKind,
};
