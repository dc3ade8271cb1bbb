//! Tae schedule policy: breaks are always capped at 3 hours

use shiftguard_domain::ActorKind;

use super::{FullSchedule, PartialSchedule, SchedulePolicy};
use crate::constrained::{BreakFrom15To180Minutes, BreakFrom60To180Minutes};

/// Schedule policy for Tae workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaeSchedule;

impl SchedulePolicy for TaeSchedule {
    const ACTOR: ActorKind = ActorKind::Tae;

    type FullBreak = BreakFrom60To180Minutes;
    type PartialBreak = BreakFrom15To180Minutes;
}

/// Full-day Tae schedule
pub type TaeFullSchedule = FullSchedule<TaeSchedule>;

/// Partial-day Tae schedule
pub type TaePartialSchedule = PartialSchedule<TaeSchedule>;
