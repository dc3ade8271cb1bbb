//! Time utilities
//!
//! - **[`format`]**: Human-readable duration formatting for rule messages
//!
//! ## Usage
//!
//! ```rust
//! use chrono::TimeDelta;
//!
//! use shiftguard_common::time::format_time_delta;
//!
//! assert_eq!(format_time_delta(TimeDelta::minutes(60)), "1h 0m 0s");
//! ```

pub mod format;

// Re-export commonly used items
pub use format::{format_duration, format_time_delta};
