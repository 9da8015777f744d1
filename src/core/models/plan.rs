//! Student plan model

use serde::{Deserialize, Serialize};

/// A student's course selection for one school year
///
/// This is what students build when choosing courses, before schedules are
/// published. Selected ids refer to [`Course::id`](super::Course::id); the
/// same id listed twice is still a single selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPlan {
    /// Student name
    pub student_name: String,

    /// Grade level the plan is for (9-12)
    pub grade_level: u8,

    /// School year (e.g., "2025-2026")
    pub school_year: String,

    /// Selected course ids
    #[serde(default)]
    pub selected_course_ids: Vec<u32>,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl StudentPlan {
    /// Create a new empty plan
    ///
    /// # Arguments
    /// * `student_name` - Student name
    /// * `grade_level` - Grade the plan is for
    /// * `school_year` - School year label
    #[must_use]
    pub const fn new(student_name: String, grade_level: u8, school_year: String) -> Self {
        Self {
            student_name,
            grade_level,
            school_year,
            selected_course_ids: Vec::new(),
            notes: None,
        }
    }

    /// Select a course
    ///
    /// # Returns
    /// `false` if the course was already selected
    pub fn add_course(&mut self, course_id: u32) -> bool {
        if self.selected_course_ids.contains(&course_id) {
            false
        } else {
            self.selected_course_ids.push(course_id);
            true
        }
    }

    /// Deselect a course
    ///
    /// # Returns
    /// `true` if the course was removed, `false` if it wasn't selected
    pub fn remove_course(&mut self, course_id: u32) -> bool {
        let before = self.selected_course_ids.len();
        self.selected_course_ids.retain(|id| *id != course_id);
        before != self.selected_course_ids.len()
    }

    /// Whether a course id is selected
    #[must_use]
    pub fn is_selected(&self, course_id: u32) -> bool {
        self.selected_course_ids.contains(&course_id)
    }

    /// Set the notes
    pub fn set_notes(&mut self, notes: String) {
        self.notes = Some(notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> StudentPlan {
        StudentPlan::new("Test Student".to_string(), 9, "2025-2026".to_string())
    }

    #[test]
    fn test_plan_creation() {
        let plan = plan();

        assert_eq!(plan.student_name, "Test Student");
        assert_eq!(plan.grade_level, 9);
        assert_eq!(plan.school_year, "2025-2026");
        assert!(plan.selected_course_ids.is_empty());
        assert!(plan.notes.is_none());
    }

    #[test]
    fn test_add_duplicate_course() {
        let mut plan = plan();

        assert!(plan.add_course(1));
        assert!(!plan.add_course(1));
        assert_eq!(plan.selected_course_ids, vec![1]);
    }

    #[test]
    fn test_remove_course() {
        let mut plan = plan();
        plan.add_course(1);
        plan.add_course(2);

        assert!(plan.remove_course(1));
        assert!(!plan.is_selected(1));
        assert!(plan.is_selected(2));
        assert!(!plan.remove_course(1));
    }

    #[test]
    fn test_remove_course_clears_duplicates_from_raw_input() {
        let mut plan = plan();
        plan.selected_course_ids = vec![3, 3, 4];

        assert!(plan.remove_course(3));
        assert_eq!(plan.selected_course_ids, vec![4]);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "studentName": "Ambitious Junior",
            "gradeLevel": 11,
            "schoolYear": "2025-2026",
            "selectedCourseIds": [4, 5]
        }"#;

        let plan: StudentPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.grade_level, 11);
        assert_eq!(plan.selected_course_ids, vec![4, 5]);
        assert!(plan.notes.is_none());
    }
}
