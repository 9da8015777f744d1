//! Course model

use crate::core::calendar::DurationType;
use serde::{Deserialize, Serialize};

/// Lowest grade level a course can be offered to
pub const MIN_GRADE: u8 = 9;

/// Highest grade level a course can be offered to
pub const MAX_GRADE: u8 = 12;

/// A course in the school catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Catalog-assigned identifier
    pub id: u32,

    /// Course name (e.g., "AP Biology")
    pub name: String,

    /// Catalog course code (e.g., "SCI301"); used to link prerequisites on import
    #[serde(default)]
    pub course_code: Option<String>,

    /// Department (e.g., "English", "Math", "Social Studies")
    pub department: String,

    /// Duration category (e.g., "Full Year", "Semester 1", "Quarter 2")
    pub duration: String,

    /// Block or Skinny
    pub block_type: DurationType,

    /// Credits earned (0.25, 0.5, 1.0, ...)
    pub credits: f32,

    /// Grade levels the course is offered for; empty means every grade
    #[serde(default)]
    pub grade_levels: Vec<u8>,

    /// Ids of prerequisite courses; ids missing from the catalog are ignored
    #[serde(default)]
    pub prerequisite_ids: Vec<u32>,

    /// AP, Honors, or CCP course
    #[serde(default)]
    pub is_advanced: bool,

    /// Catalog description
    #[serde(default)]
    pub description: Option<String>,

    /// Periods occupied (2 for double-block lab sciences)
    #[serde(default = "default_periods")]
    pub periods_required: u8,

    /// Workload estimate from 1 (light) to 5 (most demanding)
    #[serde(default = "default_workload")]
    pub workload_level: u8,
}

const fn default_periods() -> u8 {
    1
}

const fn default_workload() -> u8 {
    3
}

impl Course {
    /// Create a new single-period, full-year, Block course open to all grades
    ///
    /// # Arguments
    /// * `id` - Catalog id
    /// * `name` - Course name
    /// * `department` - Department name
    /// * `credits` - Credits earned
    #[must_use]
    pub const fn new(id: u32, name: String, department: String, credits: f32) -> Self {
        Self {
            id,
            name,
            course_code: None,
            department,
            duration: String::new(),
            block_type: DurationType::Block,
            credits,
            grade_levels: Vec::new(),
            prerequisite_ids: Vec::new(),
            is_advanced: false,
            description: None,
            periods_required: default_periods(),
            workload_level: default_workload(),
        }
    }

    /// Whether a student in `grade` may take this course
    #[must_use]
    pub fn is_offered_to(&self, grade: u8) -> bool {
        self.grade_levels.is_empty() || self.grade_levels.contains(&grade)
    }

    /// Allowed grades in ascending order, comma separated (e.g., "11, 12")
    #[must_use]
    pub fn allowed_grades_label(&self) -> String {
        let mut grades = self.grade_levels.clone();
        grades.sort_unstable();
        grades
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the duration category is a partial-year term
    #[must_use]
    pub fn is_term_limited(&self) -> bool {
        self.duration.contains("Semester") || self.duration.contains("Quarter")
    }

    /// Add a prerequisite by course id
    pub fn add_prerequisite(&mut self, prereq_id: u32) {
        if !self.prerequisite_ids.contains(&prereq_id) {
            self.prerequisite_ids.push(prereq_id);
        }
    }

    /// Data-integrity problems with this course (out-of-range fields)
    ///
    /// Validation tolerates these; they are reported so catalog imports can
    /// be cleaned up.
    #[must_use]
    pub fn integrity_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.credits < 0.0 {
            issues.push(format!("{}: negative credits ({})", self.name, self.credits));
        }
        if !(1..=2).contains(&self.periods_required) {
            issues.push(format!(
                "{}: periods required must be 1 or 2 (got {})",
                self.name, self.periods_required
            ));
        }
        if !(1..=5).contains(&self.workload_level) {
            issues.push(format!(
                "{}: workload level must be 1-5 (got {})",
                self.name, self.workload_level
            ));
        }
        if let Some(grade) = self
            .grade_levels
            .iter()
            .find(|g| !(MIN_GRADE..=MAX_GRADE).contains(*g))
        {
            issues.push(format!("{}: grade level {grade} is not 9-12", self.name));
        }
        issues
    }
}
