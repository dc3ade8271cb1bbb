//! Error classification shared across shiftguard crates
//!
//! Every error type exposed by a shiftguard crate implements
//! [`ErrorClassification`], so callers can decide how to report a failure
//! without matching on crate-specific variants.
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Informational, expected conditions | Nothing to validate |
//! | **Warning** | Input rejected by a business rule | Break too short, schedule too long |
//! | **Error** | Input that is malformed on its own | Interval ending before it starts |
//! | **Critical** | Integrity at risk | Internal invariant violations |
//!
//! ## Example
//!
//! ```rust,ignore
//! use shiftguard_common::error::{ErrorClassification, ErrorSeverity};
//!
//! fn report<E: ErrorClassification + std::fmt::Display>(err: &E) {
//!     if err.severity() >= ErrorSeverity::Error {
//!         eprintln!("[{}] {}", err.severity(), err);
//!     }
//! }
//! ```

use std::fmt;
use std::time::Duration;

/// Error classification trait for consistent error handling across crates
///
/// Validation failures are deterministic: feeding the same input again will
/// fail the same way. Implementations for rule violations should therefore
/// report `is_retryable() == false` and no `retry_after`.
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Only transient failures are retryable. A rejected interval is not.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging and reporting decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// Error severity levels for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, input was rejected by a rule
    Warning,
    /// Error, input was malformed
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
