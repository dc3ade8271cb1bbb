//! Actor kinds, schedule shapes and the raw request record

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;
use crate::interval::Interval;

/// Category of worker a schedule policy applies to
///
/// Both actors share the schedule bounds; they differ in break bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// Teaching assistant
    Tae,
    /// Professor
    Professor,
}

impl_domain_status_conversions!(ActorKind {
    Tae => "tae",
    Professor => "professor",
});

/// Full day (mandatory break) or partial day (optional break)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleShape {
    /// 421 to 480 minutes of net work with a mandatory break
    Full,
    /// 120 to 420 minutes of net work with an optional break
    Partial,
}

impl_domain_status_conversions!(ScheduleShape {
    Full => "full",
    Partial => "partial",
});

/// Unvalidated schedule submission, as received from a collaborator
///
/// The intervals are well-formed (see [`Interval`]) but no rule has been
/// checked yet. Pass it to the core crate's request validation to obtain a
/// validated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Whose policy applies
    pub actor: ActorKind,
    /// Which of the policy's two records to build
    pub shape: ScheduleShape,
    /// The gross schedule interval
    pub schedule: Interval,
    /// The break, serialised as `break`
    #[serde(default, rename = "break", skip_serializing_if = "Option::is_none")]
    pub break_interval: Option<Interval>,
}
