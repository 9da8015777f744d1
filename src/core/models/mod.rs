//! Data models for `CoursePlanner`

pub mod catalog;
pub mod conflict;
pub mod course;
pub mod offering;
pub mod plan;
pub mod tally;

pub use catalog::Catalog;
pub use conflict::Conflict;
pub use course::Course;
pub use offering::ClassOffering;
pub use plan::StudentPlan;
pub use tally::Tally;
