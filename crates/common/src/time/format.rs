//! Human-readable duration formatting
//!
//! Rule violations report durations to people reading a timesheet, so they
//! are rendered as `"7h 30m 0s"` rather than as raw seconds.

use std::time::Duration;

use chrono::TimeDelta;

/// Format a duration into a human-readable string
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use shiftguard_common::time::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(5)), "5s");
/// assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
/// assert_eq!(format_duration(Duration::from_secs(3665)), "1h 1m 5s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs == 0 {
        let millis = duration.as_millis();
        if millis == 0 {
            return format!("{}us", duration.as_micros());
        }
        return format!("{millis}ms");
    }

    let days = total_secs / 86400;
    let hours = (total_secs % 86400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let components = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")];
    let start_index =
        components.iter().position(|(value, _)| *value > 0).unwrap_or(components.len() - 1);

    components[start_index..]
        .iter()
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a signed `chrono` delta the same way as [`format_duration`]
///
/// Negative deltas get a leading `-`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
///
/// use shiftguard_common::time::format::format_time_delta;
///
/// assert_eq!(format_time_delta(TimeDelta::minutes(90)), "1h 30m 0s");
/// assert_eq!(format_time_delta(TimeDelta::seconds(-30)), "-30s");
/// ```
pub fn format_time_delta(delta: TimeDelta) -> String {
    match delta.to_std() {
        Ok(duration) => format_duration(duration),
        Err(_) => format!("-{}", format_duration((-delta).to_std().unwrap_or_default())),
    }
}
