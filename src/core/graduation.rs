//! Graduation requirements and progress
//!
//! The built-in table is compiled in from `assets/graduation_requirements.toml`.
//! Schools with different requirements can load their own table with
//! [`GraduationRequirements::from_toml`].

use crate::core::models::Tally;
use serde::{Deserialize, Serialize};

const STANDARD_REQUIREMENTS: &str = include_str!("../../assets/graduation_requirements.toml");

/// Credits a department requires for graduation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRequirement {
    /// Department name, matched exactly against course departments
    pub name: String,
    /// Credits required
    pub credits: f32,
}

/// Pacing benchmark for one grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBenchmark {
    /// Grade level (9-12)
    pub level: u8,
    /// Cumulative credits a student should have by the end of this grade
    pub expected_credits: f32,
    /// Recommended courses for this grade (advisory)
    #[serde(default)]
    pub recommended: Vec<String>,
}

/// College admission advice (advisory text only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeRecommendation {
    /// Kind of institution (e.g., "State Universities")
    pub audience: String,
    /// Coursework advice
    pub advice: String,
}

/// Graduation requirements for a school
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationRequirements {
    /// Total credits required to graduate
    pub total_credits_required: f32,

    /// Required credits per department, in reporting order
    pub departments: Vec<DepartmentRequirement>,

    /// Pacing benchmarks per grade
    #[serde(default)]
    pub grades: Vec<GradeBenchmark>,

    /// College admission advice
    #[serde(default)]
    pub college_recommendations: Vec<CollegeRecommendation>,
}

/// Progress in one department
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentProgress {
    /// Department name
    pub department: String,
    /// Credits the department requires
    pub required: f32,
    /// Credits earned by the plan
    pub earned: f32,
    /// Never negative
    pub remaining: f32,
    /// Whether the requirement is met
    pub complete: bool,
}

/// A student's progress toward graduation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationProgress {
    /// Grade the plan is for
    pub grade_level: u8,
    /// Credits selected in the plan
    pub total_credits_earned: f32,
    /// Credits needed to graduate
    pub total_credits_required: f32,
    /// Grade benchmark, 0 for an unknown grade
    pub expected_credits: f32,
    /// Whether the plan meets the grade benchmark
    pub on_track: bool,
    /// Per-department progress in requirement order
    pub department_progress: Vec<DepartmentProgress>,
}

impl GraduationProgress {
    /// Departments that still need credits
    pub fn incomplete(&self) -> impl Iterator<Item = &DepartmentProgress> {
        self.department_progress.iter().filter(|d| !d.complete)
    }
}

impl GraduationRequirements {
    /// The built-in 24-credit requirements table
    ///
    /// # Panics
    /// Panics if the compiled-in table is malformed, which is a build defect.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_toml(STANDARD_REQUIREMENTS)
            .expect("Failed to parse compiled-in graduation requirements")
    }

    /// Parse requirements from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Required credits for a department, if it has a requirement
    #[must_use]
    pub fn required_for(&self, department: &str) -> Option<f32> {
        self.departments
            .iter()
            .find(|d| d.name == department)
            .map(|d| d.credits)
    }

    /// Expected cumulative credits by the end of a grade; 0 for unknown grades
    #[must_use]
    pub fn expected_credits_for(&self, grade: u8) -> f32 {
        self.benchmark(grade).map_or(0.0, |b| b.expected_credits)
    }

    /// Recommended courses for a grade; empty for unknown grades
    #[must_use]
    pub fn recommended_for(&self, grade: u8) -> &[String] {
        self.benchmark(grade)
            .map(|b| b.recommended.as_slice())
            .unwrap_or_default()
    }

    fn benchmark(&self, grade: u8) -> Option<&GradeBenchmark> {
        self.grades.iter().find(|b| b.level == grade)
    }

    /// Progress toward graduation
    ///
    /// # Arguments
    /// * `grade` - Student grade level
    /// * `credits_by_department` - Credits earned per department
    /// * `total_credits` - Credits earned across all departments
    #[must_use]
    pub fn progress(
        &self,
        grade: u8,
        credits_by_department: &Tally<f32>,
        total_credits: f32,
    ) -> GraduationProgress {
        let expected_credits = self.expected_credits_for(grade);

        let department_progress = self
            .departments
            .iter()
            .map(|requirement| {
                let earned = credits_by_department.get_or_zero(&requirement.name);
                DepartmentProgress {
                    department: requirement.name.clone(),
                    required: requirement.credits,
                    earned,
                    remaining: (requirement.credits - earned).max(0.0),
                    complete: earned >= requirement.credits,
                }
            })
            .collect();

        GraduationProgress {
            grade_level: grade,
            total_credits_earned: total_credits,
            total_credits_required: self.total_credits_required,
            expected_credits,
            on_track: total_credits >= expected_credits,
            department_progress,
        }
    }
}

impl Default for GraduationRequirements {
    fn default() -> Self {
        Self::standard()
    }
}
