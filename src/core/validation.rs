//! Student plan validation
//!
//! Checks a course selection against period capacity, grade eligibility,
//! prerequisites, workload and graduation progress. Problems with the
//! selection are reported as errors (the plan cannot work) or warnings (the
//! plan needs a second look); validation itself never fails.

use crate::core::graduation::GraduationRequirements;
use crate::core::models::catalog::{prerequisite_names, resolve_selection};
use crate::core::models::{Course, StudentPlan, Tally};
use serde::Serialize;

/// Periods available in a day: four blocks, each split into two skinny halves
pub const MAX_PERIODS: u32 = 8;

/// Fewer periods than this draws a warning
pub const RECOMMENDED_MIN_PERIODS: u32 = 6;

/// More advanced courses than this is a heavy load
pub const HEAVY_LOAD_ADVANCED: usize = 4;

/// Average workload above this is a demanding schedule
pub const INTENSE_AVERAGE_WORKLOAD: f32 = 4.0;

/// Seniors selecting fewer credits than this are warned
pub const SENIOR_MIN_CREDITS: f32 = 6.0;

/// Weekly homework hours per workload point
pub const HOMEWORK_HOURS_PER_WORKLOAD: u32 = 2;

const SENIOR_GRADE: u8 = 12;

/// Aggregate figures over the selected courses
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatistics {
    /// Number of resolved courses
    pub total_courses: usize,
    /// Sum of course credits
    pub total_credits: f32,
    /// Courses flagged AP/Honors
    pub advanced_courses: usize,
    /// Sum of daily periods required
    pub total_periods: u32,
    /// Department -> credits, in order of first appearance
    pub credits_by_department: Tally<f32>,
    /// Duration category -> course count, in order of first appearance
    pub courses_by_duration: Tally<u32>,
    /// Mean workload level; 0 with no courses
    pub average_workload: f32,
    /// Summed workload times two
    pub estimated_homework_hours_per_week: u32,
}

/// Outcome of validating a plan
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanValidationResult {
    /// True when there are no errors
    pub is_valid: bool,
    /// Problems that make the plan invalid
    pub errors: Vec<String>,
    /// Advisory findings
    pub warnings: Vec<String>,
    /// Figures the checks were computed from
    pub statistics: PlanStatistics,
}

/// Validates student plans against a graduation requirements table
#[derive(Debug, Clone, Copy)]
pub struct PlanValidator<'a> {
    requirements: &'a GraduationRequirements,
}

impl<'a> PlanValidator<'a> {
    /// Create a validator
    #[must_use]
    pub const fn new(requirements: &'a GraduationRequirements) -> Self {
        Self { requirements }
    }

    /// Validate a plan against the course catalog
    ///
    /// Selected ids are matched against `catalog` as a set: ids missing from
    /// the catalog are ignored and an id listed twice counts once. Messages
    /// come out in check order, then in catalog order within each check.
    ///
    /// # Arguments
    /// * `plan` - The student's selection
    /// * `catalog` - Every course the school offers
    #[must_use]
    pub fn validate(&self, plan: &StudentPlan, catalog: &[Course]) -> PlanValidationResult {
        let selected = resolve_selection(catalog, &plan.selected_course_ids);
        crate::debug!(
            "Validating plan for {}: {} of {} selected ids resolved",
            plan.student_name,
            selected.len(),
            plan.selected_course_ids.len()
        );

        let mut result = PlanValidationResult {
            statistics: compute_statistics(&selected),
            ..PlanValidationResult::default()
        };

        check_prerequisites(&selected, catalog, &mut result);
        check_duration_overlap(&selected, &mut result);
        check_period_capacity(&result.statistics, &mut result.errors, &mut result.warnings);
        check_grade_eligibility(&selected, plan.grade_level, &mut result);
        check_workload(&result.statistics, &mut result.warnings);
        self.check_graduation_progress(plan.grade_level, &mut result);

        result.is_valid = result.errors.is_empty();
        result
    }

    fn check_graduation_progress(&self, grade: u8, result: &mut PlanValidationResult) {
        let stats = &result.statistics;
        for requirement in &self.requirements.departments {
            let earned = stats.credits_by_department.get_or_zero(&requirement.name);
            let required = requirement.credits;
            let remaining = required - earned;

            if grade == SENIOR_GRADE && earned < required {
                result.errors.push(format!(
                    "Graduation requirement not met: {} requires {} credits, but you only have {} this year. Need {} more credits.",
                    requirement.name,
                    format_credits(required),
                    format_credits(earned),
                    format_credits(remaining)
                ));
            } else if remaining > 0.0 {
                result.warnings.push(format!(
                    "{}: Need {} more credits to graduate ({} of {} this year).",
                    requirement.name,
                    format_credits(remaining),
                    format_credits(earned),
                    format_credits(required)
                ));
            }
        }

        if grade == SENIOR_GRADE && stats.total_credits < SENIOR_MIN_CREDITS {
            result.warnings.push(format!(
                "Only {} credits selected for senior year. Ensure you have enough credits from previous years to graduate.",
                format_credits(stats.total_credits)
            ));
        }
    }
}

/// Compute statistics for a set of selected courses
#[must_use]
pub fn compute_statistics(courses: &[&Course]) -> PlanStatistics {
    let mut stats = PlanStatistics {
        total_courses: courses.len(),
        ..PlanStatistics::default()
    };

    let mut workload_sum = 0u32;
    for course in courses {
        stats.total_credits += course.credits;
        stats.total_periods += u32::from(course.periods_required);
        if course.is_advanced {
            stats.advanced_courses += 1;
        }
        stats
            .credits_by_department
            .add(&course.department, course.credits);
        stats.courses_by_duration.add(&course.duration, 1);
        workload_sum += u32::from(course.workload_level);
    }

    stats.estimated_homework_hours_per_week = workload_sum * HOMEWORK_HOURS_PER_WORKLOAD;
    if !courses.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let average = workload_sum as f32 / courses.len() as f32;
        stats.average_workload = average;
    }
    stats
}

fn check_prerequisites(selected: &[&Course], catalog: &[Course], result: &mut PlanValidationResult) {
    for course in selected {
        if course.prerequisite_ids.is_empty() {
            continue;
        }
        let names = prerequisite_names(catalog, &course.prerequisite_ids);
        if !names.is_empty() {
            result.warnings.push(format!(
                "{} requires: {}. Make sure you've completed or are currently enrolled in these courses.",
                course.name,
                names.join(", ")
            ));
        }
    }
}

fn check_duration_overlap(selected: &[&Course], result: &mut PlanValidationResult) {
    let mut groups: Vec<((&str, &str), Vec<&str>)> = Vec::new();
    for course in selected.iter().filter(|c| c.is_term_limited()) {
        let key = (course.department.as_str(), course.duration.as_str());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, names)) => names.push(course.name.as_str()),
            None => groups.push((key, vec![course.name.as_str()])),
        }
    }

    for ((department, duration), names) in groups.iter().filter(|(_, names)| names.len() > 1) {
        result.warnings.push(format!(
            "You have multiple {department} courses in {duration}: {}. Verify these don't overlap when schedules are published.",
            names.join(", ")
        ));
    }
}

fn check_period_capacity(stats: &PlanStatistics, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let total = stats.total_periods;
    if total > MAX_PERIODS {
        errors.push(format!(
            "Too many periods required: {total} periods selected, but only {MAX_PERIODS} are available. Remove some courses or choose skinny options."
        ));
    } else if total < RECOMMENDED_MIN_PERIODS {
        warnings.push(format!(
            "Only {total} periods selected. Most students take 6-8 classes. Consider adding more courses to meet graduation requirements."
        ));
    }
}

fn check_grade_eligibility(selected: &[&Course], grade: u8, result: &mut PlanValidationResult) {
    for course in selected.iter().filter(|c| !c.is_offered_to(grade)) {
        result.errors.push(format!(
            "{} is not available for grade {grade}. This course is offered for grades: {}.",
            course.name,
            course.allowed_grades_label()
        ));
    }
}

fn check_workload(stats: &PlanStatistics, warnings: &mut Vec<String>) {
    if stats.advanced_courses > HEAVY_LOAD_ADVANCED {
        warnings.push(format!(
            "Heavy course load: {} AP/Honors courses. Estimated {} hours/week of homework. Consider your extracurriculars and work commitments.",
            stats.advanced_courses, stats.estimated_homework_hours_per_week
        ));
    }

    if stats.average_workload > INTENSE_AVERAGE_WORKLOAD {
        warnings.push(
            "Very demanding schedule. Make sure you have adequate study time and support.".to_string(),
        );
    }
}

/// Format a credit amount for messages: whole amounts keep one decimal
/// ("4.0"), fractional amounts print as-is ("0.25")
#[must_use]
pub fn format_credits(credits: f32) -> String {
    if credits.fract() == 0.0 {
        format!("{credits:.1}")
    } else {
        credits.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::DurationType;

    fn course(id: u32, name: &str, dept: &str, credits: f32) -> Course {
        let mut c = Course::new(id, name.to_string(), dept.to_string(), credits);
        c.duration = "Full Year".to_string();
        c
    }

    fn catalog() -> Vec<Course> {
        let mut english = course(1, "English 9", "English", 1.0);
        english.grade_levels = vec![9];

        let mut algebra = course(2, "Algebra 1", "Math", 1.0);
        algebra.grade_levels = vec![9, 10];

        let mut biology = course(3, "Biology", "Science", 1.0);
        biology.grade_levels = vec![9];
        biology.periods_required = 2;

        let mut ap_bio = course(4, "AP Biology", "Science", 1.0);
        ap_bio.grade_levels = vec![11, 12];
        ap_bio.prerequisite_ids = vec![3];
        ap_bio.is_advanced = true;
        ap_bio.periods_required = 2;
        ap_bio.workload_level = 5;

        let mut ap_calc = course(5, "AP Calculus", "Math", 1.0);
        ap_calc.grade_levels = vec![11, 12];
        ap_calc.is_advanced = true;
        ap_calc.workload_level = 5;

        let mut pe = course(6, "PE", "Physical Education", 0.25);
        pe.duration = "Semester 1".to_string();
        pe.block_type = DurationType::Skinny;
        pe.grade_levels = vec![9, 10, 11, 12];
        pe.workload_level = 1;

        vec![english, algebra, biology, ap_bio, ap_calc, pe]
    }

    fn plan(grade: u8, ids: &[u32]) -> StudentPlan {
        let mut plan = StudentPlan::new("Test Student".to_string(), grade, "2025-2026".to_string());
        plan.selected_course_ids = ids.to_vec();
        plan
    }

    fn validate(grade: u8, ids: &[u32], catalog: &[Course]) -> PlanValidationResult {
        let reqs = GraduationRequirements::standard();
        PlanValidator::new(&reqs).validate(&plan(grade, ids), catalog)
    }

    #[test]
    fn test_valid_freshman_plan() {
        let result = validate(9, &[1, 2, 3, 6], &catalog());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.statistics.total_courses, 4);
        assert!((result.statistics.total_credits - 3.25).abs() < f32::EPSILON);
        assert_eq!(result.statistics.total_periods, 5);
        assert!(result.warnings.iter().any(|w| w.starts_with("Only 5 periods")));
    }

    #[test]
    fn test_grade_ineligible() {
        let result = validate(9, &[4], &catalog());

        assert!(!result.is_valid);
        assert!(result.errors.contains(
            &"AP Biology is not available for grade 9. This course is offered for grades: 11, 12."
                .to_string()
        ));
    }

    #[test]
    fn test_prerequisite_warning() {
        let result = validate(11, &[4], &catalog());

        assert!(result.warnings.contains(
            &"AP Biology requires: Biology. Make sure you've completed or are currently enrolled in these courses."
                .to_string()
        ));
    }

    #[test]
    fn test_unresolvable_prerequisites_are_silent() {
        let mut courses = catalog();
        courses[3].prerequisite_ids = vec![999];

        let result = validate(11, &[4], &courses);
        assert!(!result.warnings.iter().any(|w| w.contains("requires:")));
    }

    #[test]
    fn test_too_many_periods() {
        let mut courses = catalog();
        courses.extend((10..17).map(|id| {
            let mut c = course(id, &format!("Elective {id}"), "Electives", 1.0);
            c.grade_levels = vec![9];
            c
        }));

        // 1 + 2 + 7 = 10 periods
        let result = validate(9, &[1, 3, 10, 11, 12, 13, 14, 15, 16], &courses);

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.starts_with(
            "Too many periods required: 10 periods selected, but only 8 are available."
        )));
    }

    #[test]
    fn test_five_double_period_courses() {
        let courses: Vec<Course> = (1..=5)
            .map(|id| {
                let mut c = course(id, &format!("Lab {id}"), "Science", 1.0);
                c.grade_levels = vec![10];
                c.periods_required = 2;
                c
            })
            .collect();

        let result = validate(10, &[1, 2, 3, 4, 5], &courses);

        assert_eq!(result.statistics.total_periods, 10);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Too many periods")));
    }

    #[test]
    fn test_freshman_course_in_senior_plan() {
        let result = validate(12, &[1], &catalog());

        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("English 9") && e.contains("not available for grade 12")));
    }

    #[test]
    fn test_heavy_load() {
        let courses: Vec<Course> = (1..=5)
            .map(|id| {
                let mut c = course(id, &format!("AP {id}"), "Electives", 1.0);
                c.is_advanced = true;
                c.workload_level = 5;
                c
            })
            .collect();

        let result = validate(11, &[1, 2, 3, 4, 5], &courses);

        assert!(result.warnings.iter().any(|w| w.starts_with(
            "Heavy course load: 5 AP/Honors courses. Estimated 50 hours/week of homework."
        )));
        assert!(result
            .warnings
            .contains(&"Very demanding schedule. Make sure you have adequate study time and support.".to_string()));
    }

    #[test]
    fn test_senior_graduation_errors() {
        let mut english = course(1, "English 12", "English", 1.0);
        english.grade_levels = vec![12];

        let result = validate(12, &[1], &[english]);

        assert!(!result.is_valid);
        assert!(result.errors.contains(
            &"Graduation requirement not met: English requires 4.0 credits, but you only have 1.0 this year. Need 3.0 more credits."
                .to_string()
        ));
        assert!(result.warnings.contains(
            &"Only 1.0 credits selected for senior year. Ensure you have enough credits from previous years to graduate."
                .to_string()
        ));
        // one error per department still short
        assert_eq!(
            result
                .errors
                .iter()
                .filter(|e| e.starts_with("Graduation requirement not met"))
                .count(),
            8
        );
    }

    #[test]
    fn test_underclass_graduation_warnings() {
        let result = validate(9, &[1], &catalog());

        assert!(result.warnings.contains(
            &"English: Need 3.0 more credits to graduate (1.0 of 4.0 this year).".to_string()
        ));
        assert!(result.warnings.contains(
            &"Health: Need 0.5 more credits to graduate (0.0 of 0.5 this year).".to_string()
        ));
    }

    #[test]
    fn test_same_term_department_warning() {
        let mut courses = catalog();
        let mut second_pe = course(7, "Weight Training", "Physical Education", 0.25);
        second_pe.duration = "Semester 1".to_string();
        courses.push(second_pe);

        let result = validate(9, &[6, 7], &courses);

        assert!(result.warnings.contains(
            &"You have multiple Physical Education courses in Semester 1: PE, Weight Training. Verify these don't overlap when schedules are published."
                .to_string()
        ));
    }

    #[test]
    fn test_full_year_courses_skip_overlap_warning() {
        let result = validate(9, &[1, 2], &catalog());
        assert!(!result.warnings.iter().any(|w| w.starts_with("You have multiple")));
    }

    #[test]
    fn test_empty_plan() {
        let result = validate(10, &[], &catalog());

        assert!(result.is_valid);
        assert_eq!(result.statistics, PlanStatistics::default());
        assert!(result.statistics.average_workload.abs() < f32::EPSILON);
        assert!(result.warnings.iter().any(|w| w.starts_with("Only 0 periods selected.")));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let result = validate(9, &[1, 404], &catalog());
        assert_eq!(result.statistics.total_courses, 1);
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let result = validate(9, &[1, 1, 2], &catalog());

        assert_eq!(result.statistics.total_courses, 2);
        assert!((result.statistics.total_credits - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_statistics_grouping() {
        let result = validate(11, &[4, 5, 6], &catalog());
        let stats = &result.statistics;

        assert_eq!(stats.advanced_courses, 2);
        assert_eq!(stats.total_periods, 4);
        assert_eq!(stats.estimated_homework_hours_per_week, 22);
        assert!((stats.average_workload - 11.0 / 3.0).abs() < 1e-5);
        let depts: Vec<&str> = stats.credits_by_department.iter().map(|(k, _)| k).collect();
        assert_eq!(depts, vec!["Science", "Math", "Physical Education"]);
        assert_eq!(stats.courses_by_duration.get("Full Year"), Some(2));
        assert_eq!(stats.courses_by_duration.get("Semester 1"), Some(1));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let courses = catalog();
        let reqs = GraduationRequirements::standard();
        let validator = PlanValidator::new(&reqs);
        let plan = plan(11, &[4, 5, 6]);

        assert_eq!(validator.validate(&plan, &courses), validator.validate(&plan, &courses));
    }

    #[test]
    fn test_format_credits() {
        assert_eq!(format_credits(4.0), "4.0");
        assert_eq!(format_credits(0.0), "0.0");
        assert_eq!(format_credits(0.25), "0.25");
        assert_eq!(format_credits(1.5), "1.5");
    }
}
