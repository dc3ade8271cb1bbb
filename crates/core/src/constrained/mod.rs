//! Constrained break and schedule types
//!
//! Each type wraps an [`Interval`] that has passed its bounds. The wrapped
//! field is private to the defining module and there is no setter, so a
//! value of one of these types is proof that its interval was checked.
//!
//! | Type | Min | Max | Break |
//! |---|---|---|---|
//! | [`BreakFrom15Minutes`] | 15 min | none | - |
//! | [`BreakFrom15To180Minutes`] | 15 min | 180 min | - |
//! | [`BreakFrom60Minutes`] | 60 min | none | - |
//! | [`BreakFrom60To180Minutes`] | 60 min | 180 min | - |
//! | [`ScheduleUntil7Hours`] | 120 min | 420 min | optional |
//! | [`ScheduleUntil8Hours`] | 421 min | 480 min | mandatory |

mod breaks;
mod factory;
mod schedules;

use std::fmt::Debug;

use serde::Serialize;
use shiftguard_domain::{Interval, Result};

pub use breaks::{
    BreakFrom15Minutes, BreakFrom15To180Minutes, BreakFrom60Minutes, BreakFrom60To180Minutes,
};
pub use factory::{create_break, create_schedule};
pub use schedules::{ScheduleUntil7Hours, ScheduleUntil8Hours};

/// Common surface of the four break types
///
/// Lets the schedule policies pick a break type per actor without
/// repeating the validation sequence.
pub trait ConstrainedBreak: Copy + Debug + PartialEq + Eq + Serialize {
    /// Validate `interval` as this break type
    fn create(field_name: &str, interval: Interval) -> Result<Self>;

    /// The validated interval
    fn value(&self) -> Interval;
}
