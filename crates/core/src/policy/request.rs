//! Validation of untyped schedule requests

use chrono::TimeDelta;
use serde::Serialize;
use shiftguard_common::error::ErrorClassification;
use shiftguard_domain::constants::SCHEDULE_FIELD;
use shiftguard_domain::{
    ActorKind, Interval, Result, ScheduleError, ScheduleRequest, ScheduleShape,
};
use tracing::debug;

use super::{
    ProfessorFullSchedule, ProfessorPartialSchedule, ProfessorSchedule, SchedulePolicy,
    TaeFullSchedule, TaePartialSchedule, TaeSchedule,
};

/// Outcome of [`validate_request`]: one of the four policy records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ValidatedSchedule {
    /// Tae full day
    TaeFull(TaeFullSchedule),
    /// Tae partial day
    TaePartial(TaePartialSchedule),
    /// Professor full day
    ProfessorFull(ProfessorFullSchedule),
    /// Professor partial day
    ProfessorPartial(ProfessorPartialSchedule),
}

impl ValidatedSchedule {
    /// Actor whose policy accepted the schedule
    pub fn actor(&self) -> ActorKind {
        match self {
            Self::TaeFull(_) | Self::TaePartial(_) => ActorKind::Tae,
            Self::ProfessorFull(_) | Self::ProfessorPartial(_) => ActorKind::Professor,
        }
    }

    /// Full or partial day
    pub fn shape(&self) -> ScheduleShape {
        match self {
            Self::TaeFull(_) | Self::ProfessorFull(_) => ScheduleShape::Full,
            Self::TaePartial(_) | Self::ProfessorPartial(_) => ScheduleShape::Partial,
        }
    }

    /// The validated schedule interval
    pub fn schedule(&self) -> Interval {
        match self {
            Self::TaeFull(full) => full.schedule().value(),
            Self::TaePartial(partial) => partial.schedule().value(),
            Self::ProfessorFull(full) => full.schedule().value(),
            Self::ProfessorPartial(partial) => partial.schedule().value(),
        }
    }

    /// The validated break interval, if the schedule has one
    pub fn break_interval(&self) -> Option<Interval> {
        match self {
            Self::TaeFull(full) => Some(full.mandatory_break().value()),
            Self::TaePartial(partial) => partial.optional_break().map(|b| b.value()),
            Self::ProfessorFull(full) => Some(full.mandatory_break().value()),
            Self::ProfessorPartial(partial) => partial.optional_break().map(|b| b.value()),
        }
    }

    /// Schedule duration minus break duration
    pub fn worked_time(&self) -> TimeDelta {
        match self {
            Self::TaeFull(full) => full.worked_time(),
            Self::TaePartial(partial) => partial.worked_time(),
            Self::ProfessorFull(full) => full.worked_time(),
            Self::ProfessorPartial(partial) => partial.worked_time(),
        }
    }
}

/// Route a request to its actor's policy and shape
///
/// A full-day request without a break fails with `MissingBreak` before any
/// rule runs.
pub fn validate_request(request: &ScheduleRequest) -> Result<ValidatedSchedule> {
    let result = dispatch(request);

    if let Err(err) = &result {
        debug!(
            actor = %request.actor,
            shape = %request.shape,
            kind = %err.kind(),
            severity = %err.severity(),
            error = %err,
            "Schedule request rejected"
        );
    }

    result
}

fn dispatch(request: &ScheduleRequest) -> Result<ValidatedSchedule> {
    let schedule = request.schedule;

    match (request.actor, request.shape) {
        (ActorKind::Tae, ScheduleShape::Full) => {
            TaeSchedule::create_full_schedule(required_break(request)?, schedule)
                .map(ValidatedSchedule::TaeFull)
        }
        (ActorKind::Tae, ScheduleShape::Partial) => {
            TaeSchedule::create_partial_schedule(request.break_interval, schedule)
                .map(ValidatedSchedule::TaePartial)
        }
        (ActorKind::Professor, ScheduleShape::Full) => {
            ProfessorSchedule::create_full_schedule(required_break(request)?, schedule)
                .map(ValidatedSchedule::ProfessorFull)
        }
        (ActorKind::Professor, ScheduleShape::Partial) => {
            ProfessorSchedule::create_partial_schedule(request.break_interval, schedule)
                .map(ValidatedSchedule::ProfessorPartial)
        }
    }
}

fn required_break(request: &ScheduleRequest) -> Result<Interval> {
    request.break_interval.ok_or_else(|| ScheduleError::missing_break(SCHEDULE_FIELD))
}
