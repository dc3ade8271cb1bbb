//! Schedule policies for each actor kind
//!
//! A policy pairs one schedule type with one break type: a full day uses
//! [`ScheduleUntil8Hours`] with a mandatory break, a partial day uses
//! [`ScheduleUntil7Hours`] with an optional one. The validation sequence is
//! written once in [`SchedulePolicy`]; each actor only chooses its break
//! types.
//!
//! | Policy | Full-day break | Partial-day break |
//! |---|---|---|
//! | [`TaeSchedule`] | 60-180 min | 15-180 min |
//! | [`ProfessorSchedule`] | 60 min or more | 15 min or more |

mod professor;
mod request;
mod tae;

use std::fmt::Debug;

use chrono::TimeDelta;
use serde::Serialize;
use shiftguard_domain::constants::{BREAK_FIELD, SCHEDULE_FIELD};
use shiftguard_domain::{ActorKind, Interval, Result};

use crate::constrained::{ConstrainedBreak, ScheduleUntil7Hours, ScheduleUntil8Hours};

pub use professor::{ProfessorFullSchedule, ProfessorPartialSchedule, ProfessorSchedule};
pub use request::{validate_request, ValidatedSchedule};
pub use tae::{TaeFullSchedule, TaePartialSchedule, TaeSchedule};

/// Actor-specific break bounds plus the shared validation sequence
///
/// Validation stops at the first failure. The break is checked before the
/// schedule, so a bad break is reported even if the schedule is also bad.
pub trait SchedulePolicy: Copy + Debug + PartialEq + Eq + Sized {
    /// Actor this policy applies to
    const ACTOR: ActorKind;

    /// Break type required by a full-day schedule
    type FullBreak: ConstrainedBreak;

    /// Break type allowed in a partial-day schedule
    type PartialBreak: ConstrainedBreak;

    /// Validate a full-day schedule with its mandatory break
    #[tracing::instrument(level = "debug", skip_all, fields(actor = %Self::ACTOR))]
    fn create_full_schedule(
        break_interval: Interval,
        schedule_interval: Interval,
    ) -> Result<FullSchedule<Self>> {
        let mandatory_break =
            <Self::FullBreak as ConstrainedBreak>::create(BREAK_FIELD, break_interval)?;
        let schedule =
            ScheduleUntil8Hours::create(SCHEDULE_FIELD, break_interval, schedule_interval)?;

        Ok(FullSchedule { mandatory_break, schedule })
    }

    /// Validate a partial-day schedule; without a break only the schedule
    /// is checked
    #[tracing::instrument(level = "debug", skip_all, fields(actor = %Self::ACTOR))]
    fn create_partial_schedule(
        break_interval: Option<Interval>,
        schedule_interval: Interval,
    ) -> Result<PartialSchedule<Self>> {
        let optional_break = break_interval
            .map(|interval| {
                <Self::PartialBreak as ConstrainedBreak>::create(BREAK_FIELD, interval)
            })
            .transpose()?;
        let schedule =
            ScheduleUntil7Hours::create(SCHEDULE_FIELD, break_interval, schedule_interval)?;

        Ok(PartialSchedule { optional_break, schedule })
    }
}

/// A validated full-day schedule and its break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct FullSchedule<P: SchedulePolicy> {
    mandatory_break: P::FullBreak,
    schedule: ScheduleUntil8Hours,
}

impl<P: SchedulePolicy> FullSchedule<P> {
    /// The validated break
    pub fn mandatory_break(&self) -> P::FullBreak {
        self.mandatory_break
    }

    /// The validated schedule
    pub fn schedule(&self) -> ScheduleUntil8Hours {
        self.schedule
    }

    /// Schedule duration minus break duration
    pub fn worked_time(&self) -> TimeDelta {
        self.schedule.value().duration() - self.mandatory_break.value().duration()
    }
}

/// A validated partial-day schedule and its break, if one was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct PartialSchedule<P: SchedulePolicy> {
    optional_break: Option<P::PartialBreak>,
    schedule: ScheduleUntil7Hours,
}

impl<P: SchedulePolicy> PartialSchedule<P> {
    /// The validated break, if one was taken
    pub fn optional_break(&self) -> Option<P::PartialBreak> {
        self.optional_break
    }

    /// The validated schedule
    pub fn schedule(&self) -> ScheduleUntil7Hours {
        self.schedule
    }

    /// Schedule duration minus break duration, if any
    pub fn worked_time(&self) -> TimeDelta {
        let break_duration = self
            .optional_break
            .map_or_else(TimeDelta::zero, |value| value.value().duration());
        self.schedule.value().duration() - break_duration
    }
}
