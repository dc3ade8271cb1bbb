//! # Shiftguard Domain
//!
//! Domain types shared by the shiftguard rule crates.
//!
//! This crate contains:
//! - The [`Interval`] primitive (a half-open span between two UTC instants)
//! - Rule error types and the [`Result`] alias
//! - Rule constants (break and schedule bounds, presence offset)
//! - Actor and schedule-shape enums plus the raw [`ScheduleRequest`]
//!
//! ## Architecture
//! - Depends only on `shiftguard-common` and external crates
//! - No logging, no I/O
//! - Validation logic lives in `shiftguard-core`

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod constants;
pub mod errors;
pub mod interval;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use interval::Interval;
pub use types::*;
