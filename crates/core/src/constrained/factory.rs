//! Generic validation shared by every constrained break and schedule type
//!
//! Concrete types pass their bounds and a private wrapping function. The
//! wrapping function only runs once every check has passed, so the wrapped
//! value is valid for as long as it exists.

use chrono::TimeDelta;
use shiftguard_domain::constants::break_presence_offset;
use shiftguard_domain::{Interval, Result, ScheduleError};
use tracing::{debug, trace};

/// Validate a break interval against `[min_duration, max_duration]`
///
/// `max_duration = None` leaves the break uncapped. Both bounds are
/// inclusive.
pub fn create_break<T>(
    field_name: &str,
    constructor: impl FnOnce(Interval) -> T,
    min_duration: TimeDelta,
    max_duration: Option<TimeDelta>,
    interval: Interval,
) -> Result<T> {
    let duration = interval.duration();
    check_bounds(field_name, duration, min_duration, max_duration)?;

    trace!(field = field_name, %interval, "Accepted break interval");
    Ok(constructor(interval))
}

/// Validate a schedule interval and its optional break
///
/// Bounds apply to net worked time (schedule minus break). A break must sit
/// inside the schedule with the presence offset on both sides. The wrapped
/// value is the schedule interval itself; the break is not stored.
pub fn create_schedule<T>(
    field_name: &str,
    constructor: impl FnOnce(Interval) -> T,
    min_duration: TimeDelta,
    max_duration: TimeDelta,
    break_interval: Option<Interval>,
    interval: Interval,
) -> Result<T> {
    let break_duration = break_interval.map_or_else(TimeDelta::zero, |b| b.duration());
    let net_duration = interval.duration() - break_duration;
    check_bounds(field_name, net_duration, min_duration, Some(max_duration))?;

    if let Some(break_interval) = break_interval {
        if !break_is_contained(&interval, &break_interval) {
            let err = ScheduleError::break_not_contained(field_name, break_presence_offset());
            debug!(
                field = field_name,
                %interval,
                %break_interval,
                error = %err,
                "Rejected break placement"
            );
            return Err(err);
        }
    }

    trace!(field = field_name, %interval, "Accepted schedule interval");
    Ok(constructor(interval))
}

fn check_bounds(
    field_name: &str,
    duration: TimeDelta,
    min_duration: TimeDelta,
    max_duration: Option<TimeDelta>,
) -> Result<()> {
    let rejection = if duration < min_duration {
        Some(ScheduleError::below_minimum(field_name, min_duration, duration))
    } else {
        max_duration
            .filter(|max| duration > *max)
            .map(|max| ScheduleError::above_maximum(field_name, max, duration))
    };

    match rejection {
        Some(err) => {
            debug!(
                field = field_name,
                seconds = duration.num_seconds(),
                error = %err,
                "Rejected interval duration"
            );
            Err(err)
        }
        None => Ok(()),
    }
}

/// The worker must be present for the offset before and after the break
///
/// An offset instant outside chrono's range cannot lie inside the schedule.
fn break_is_contained(schedule: &Interval, break_interval: &Interval) -> bool {
    let offset = break_presence_offset();
    let before = break_interval.start().checked_sub_signed(offset);
    let after = break_interval.end().checked_add_signed(offset);

    match (before, after) {
        (Some(before), Some(after)) => schedule.contains(before) && schedule.contains(after),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use shiftguard_domain::ViolationKind;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Wrapped(Interval);

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).unwrap()
    }

    fn span(start: (u32, u32), end: (u32, u32)) -> Interval {
        Interval::new(at(start.0, start.1), at(end.0, end.1)).unwrap()
    }

    fn minutes(value: i64) -> TimeDelta {
        TimeDelta::minutes(value)
    }

    fn partial_day(break_interval: Option<Interval>, schedule: Interval) -> Result<Wrapped> {
        create_schedule("schedule", Wrapped, minutes(120), minutes(420), break_interval, schedule)
    }

    #[test]
    fn test_break_bounds_are_inclusive() {
        let exactly_min = span((12, 0), (12, 15));
        let exactly_max = span((12, 0), (15, 0));

        assert_eq!(
            create_break("break", Wrapped, minutes(15), Some(minutes(180)), exactly_min),
            Ok(Wrapped(exactly_min))
        );
        assert_eq!(
            create_break("break", Wrapped, minutes(15), Some(minutes(180)), exactly_max),
            Ok(Wrapped(exactly_max))
        );
    }

    /// Minimum is checked before maximum, so an impossible bound pair
    /// reports `BelowMinimum`.
    #[test]
    fn test_break_minimum_checked_first() {
        let interval = span((12, 0), (12, 45));
        let err =
            create_break("break", Wrapped, minutes(60), Some(minutes(30)), interval).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::BelowMinimum);
    }

    #[test]
    fn test_break_without_maximum_is_uncapped() {
        let long = span((8, 0), (20, 0));
        assert!(create_break("break", Wrapped, minutes(60), None, long).is_ok());
    }

    #[test]
    fn test_break_error_names_field() {
        let err = create_break("lunch", Wrapped, minutes(60), None, span((12, 0), (12, 5)))
            .unwrap_err();
        assert_eq!(err, ScheduleError::below_minimum("lunch", minutes(60), minutes(5)));
    }

    /// Bounds apply to net time: 8h30m gross minus a 1h break is 7h30m.
    #[test]
    fn test_schedule_uses_net_duration() {
        let schedule = span((9, 0), (17, 30));
        let lunch = span((12, 0), (13, 0));

        let accepted =
            create_schedule("schedule", Wrapped, minutes(421), minutes(480), Some(lunch), schedule);
        assert_eq!(accepted, Ok(Wrapped(schedule)));

        let without_break =
            create_schedule("schedule", Wrapped, minutes(421), minutes(480), None, schedule);
        assert_eq!(
            without_break.unwrap_err(),
            ScheduleError::above_maximum("schedule", minutes(480), minutes(510))
        );
    }

    #[test]
    fn test_schedule_bounds_checked_before_containment() {
        let schedule = span((9, 0), (10, 0));
        let outside = span((18, 0), (19, 0));

        let err = partial_day(Some(outside), schedule).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::BelowMinimum);
    }

    #[test]
    fn test_break_needs_offset_after_start() {
        let schedule = span((9, 0), (13, 0));

        let too_early = span((9, 15), (9, 45));
        let err = partial_day(Some(too_early), schedule).unwrap_err();
        assert_eq!(err, ScheduleError::break_not_contained("schedule", minutes(30)));

        let exactly_offset = span((9, 30), (10, 0));
        assert!(partial_day(Some(exactly_offset), schedule).is_ok());
    }

    /// The schedule end is excluded, so the break must end strictly more
    /// than the offset before it.
    #[test]
    fn test_break_needs_offset_before_end() {
        let schedule = span((9, 0), (13, 0));

        let exactly_offset = span((12, 0), (12, 30));
        let err = partial_day(Some(exactly_offset), schedule).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::BreakNotContained);

        let one_minute_earlier = span((11, 59), (12, 29));
        assert!(partial_day(Some(one_minute_earlier), schedule).is_ok());
    }

    #[test]
    fn test_break_outside_schedule_rejected() {
        let schedule = span((9, 0), (13, 0));
        let after = span((14, 0), (14, 15));

        let err = partial_day(Some(after), schedule).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::BreakNotContained);
    }

    /// Breaks at the edges of chrono's range are rejected, not overflowed.
    #[test]
    fn test_break_near_time_limits_rejected() {
        let earliest = DateTime::<Utc>::MIN_UTC;
        let schedule = Interval::from_start(earliest, minutes(240)).unwrap();
        let early_break = Interval::from_start(earliest + minutes(10), minutes(15)).unwrap();
        assert_eq!(
            partial_day(Some(early_break), schedule).unwrap_err(),
            ScheduleError::break_not_contained("schedule", minutes(30))
        );

        let latest = DateTime::<Utc>::MAX_UTC;
        let schedule = Interval::new(latest - minutes(240), latest).unwrap();
        let late_break = Interval::new(latest - minutes(30), latest - minutes(10)).unwrap();
        assert_eq!(
            partial_day(Some(late_break), schedule).unwrap_err().kind(),
            ViolationKind::BreakNotContained
        );
    }
}
