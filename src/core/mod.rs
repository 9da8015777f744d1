//! Core module for plan validation and schedule conflict detection

pub mod calendar;
pub mod config;
pub mod conflicts;
pub mod error;
pub mod graduation;
pub mod models;
pub mod planner;
pub mod report;
pub mod validation;

/// Returns the current version of the `CoursePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
