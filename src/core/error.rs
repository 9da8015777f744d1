//! Error types for the scheduling core
//!
//! Only configuration-integrity problems are errors. Problems in a student's
//! selection are reported as warnings/errors inside a validation result, and
//! overlapping offerings are reported as conflicts.

use thiserror::Error;

/// Result alias for calendar lookups and conflict detection
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// A calendar code that the time model does not define
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Term slot code not known to the time model (e.g. "Q5")
    #[error("Unknown term slot: {0}")]
    UnknownTermSlot(String),

    /// Term name not known to the time model (e.g. "Trimester")
    #[error("Unknown term: {0}")]
    UnknownTerm(String),

    /// Daily period slot code not known to the time model
    #[error("Unknown period slot: {0}")]
    UnknownPeriodSlot(String),

    /// Duration type other than Block or Skinny
    #[error("Unknown duration type: {0}")]
    UnknownDurationType(String),

    /// Sub-period outside of 1..=2
    #[error("Invalid sub-period: {0} (expected 1 or 2)")]
    InvalidSubPeriod(u8),
}
