//! Professor schedule policy: breaks have a minimum but no cap

use shiftguard_domain::ActorKind;

use super::{FullSchedule, PartialSchedule, SchedulePolicy};
use crate::constrained::{BreakFrom15Minutes, BreakFrom60Minutes};

/// Schedule policy for Professor workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfessorSchedule;

impl SchedulePolicy for ProfessorSchedule {
    const ACTOR: ActorKind = ActorKind::Professor;

    type FullBreak = BreakFrom60Minutes;
    type PartialBreak = BreakFrom15Minutes;
}

/// Full-day Professor schedule
pub type ProfessorFullSchedule = FullSchedule<ProfessorSchedule>;

/// Partial-day Professor schedule
pub type ProfessorPartialSchedule = PartialSchedule<ProfessorSchedule>;
