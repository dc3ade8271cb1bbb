//! The four break types

use chrono::TimeDelta;
use serde::Serialize;
use shiftguard_domain::constants::{
    BREAK_MAX_MINUTES, LONG_BREAK_MIN_MINUTES, SHORT_BREAK_MIN_MINUTES,
};
use shiftguard_domain::{Interval, Result};

use super::factory::create_break;
use super::ConstrainedBreak;

macro_rules! constrained_break {
    ($(#[$meta:meta])* $name:ident { min: $min:expr, max: $max:expr $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name {
            interval: Interval,
        }

        impl $name {
            /// Shortest accepted break, in minutes
            pub const MIN_MINUTES: i64 = $min;
            /// Longest accepted break in minutes, `None` when uncapped
            pub const MAX_MINUTES: Option<i64> = $max;

            /// Validate `interval`, naming `field_name` in any error
            pub fn create(field_name: &str, interval: Interval) -> Result<Self> {
                create_break(
                    field_name,
                    |interval| Self { interval },
                    TimeDelta::minutes(Self::MIN_MINUTES),
                    Self::MAX_MINUTES.map(TimeDelta::minutes),
                    interval,
                )
            }

            /// The validated break interval
            pub fn value(&self) -> Interval {
                self.interval
            }
        }

        impl ConstrainedBreak for $name {
            fn create(field_name: &str, interval: Interval) -> Result<Self> {
                $name::create(field_name, interval)
            }

            fn value(&self) -> Interval {
                self.interval
            }
        }
    };
}

constrained_break!(
    /// A break of at least 15 minutes
    BreakFrom15Minutes { min: SHORT_BREAK_MIN_MINUTES, max: None }
);

constrained_break!(
    /// A break of 15 minutes up to 3 hours
    BreakFrom15To180Minutes { min: SHORT_BREAK_MIN_MINUTES, max: Some(BREAK_MAX_MINUTES) }
);

constrained_break!(
    /// A break of at least one hour
    BreakFrom60Minutes { min: LONG_BREAK_MIN_MINUTES, max: None }
);

constrained_break!(
    /// A break of one hour up to 3 hours
    BreakFrom60To180Minutes { min: LONG_BREAK_MIN_MINUTES, max: Some(BREAK_MAX_MINUTES) }
);

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use shiftguard_domain::ViolationKind;

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap()
    }

    fn lasting(seconds: i64) -> Interval {
        Interval::from_start(noon(), TimeDelta::seconds(seconds)).unwrap()
    }

    fn kind_of<T: std::fmt::Debug>(result: Result<T>) -> ViolationKind {
        result.unwrap_err().kind()
    }

    #[test]
    fn test_break_from_15_minutes_boundary() {
        let exactly = lasting(15 * 60);
        assert_eq!(BreakFrom15Minutes::create("break", exactly).unwrap().value(), exactly);
        assert_eq!(
            kind_of(BreakFrom15Minutes::create("break", lasting(15 * 60 - 1))),
            ViolationKind::BelowMinimum
        );
        assert!(BreakFrom15Minutes::create("break", lasting(10 * 3600)).is_ok());
    }

    #[test]
    fn test_break_from_15_to_180_minutes_boundary() {
        assert!(BreakFrom15To180Minutes::create("break", lasting(180 * 60)).is_ok());
        assert_eq!(
            kind_of(BreakFrom15To180Minutes::create("break", lasting(180 * 60 + 1))),
            ViolationKind::AboveMaximum
        );
        assert_eq!(
            kind_of(BreakFrom15To180Minutes::create("break", lasting(14 * 60))),
            ViolationKind::BelowMinimum
        );
    }

    #[test]
    fn test_break_from_60_minutes_boundary() {
        assert!(BreakFrom60Minutes::create("break", lasting(60 * 60)).is_ok());
        assert!(BreakFrom60Minutes::create("break", lasting(5 * 3600)).is_ok());
        assert_eq!(
            kind_of(BreakFrom60Minutes::create("break", lasting(60 * 60 - 1))),
            ViolationKind::BelowMinimum
        );
    }

    #[test]
    fn test_break_from_60_to_180_minutes_boundary() {
        assert!(BreakFrom60To180Minutes::create("break", lasting(60 * 60)).is_ok());
        assert!(BreakFrom60To180Minutes::create("break", lasting(180 * 60)).is_ok());
        assert_eq!(
            kind_of(BreakFrom60To180Minutes::create("break", lasting(180 * 60 + 1))),
            ViolationKind::AboveMaximum
        );
    }

    /// Re-validating an extracted interval never fails.
    #[test]
    fn test_revalidation_is_idempotent() {
        let first = BreakFrom60To180Minutes::create("break", lasting(90 * 60)).unwrap();
        let second = BreakFrom60To180Minutes::create("break", first.value()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trait_matches_inherent() {
        let interval = lasting(20 * 60);
        let inherent = BreakFrom15Minutes::create("break", interval).unwrap();
        let through_trait =
            <BreakFrom15Minutes as ConstrainedBreak>::create("break", interval).unwrap();
        assert_eq!(inherent, through_trait);
        assert_eq!(ConstrainedBreak::value(&through_trait), interval);
    }

    #[test]
    fn test_serializes_as_interval() {
        let value = BreakFrom15Minutes::create("break", lasting(30 * 60)).unwrap();
        let json = serde_json::to_value(value).unwrap();
        assert_eq!(json, serde_json::to_value(value.value()).unwrap());
    }
}
