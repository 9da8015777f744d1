//! Shared library for `CoursePlanner`
//! Contains the plan validation and conflict detection engines used by the CLI

pub mod core;
pub mod logger;

pub use core::{config, get_version};
