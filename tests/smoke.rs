//! Integration smoke tests for `course_planner`

use course_planner::core::calendar::TimeModel;
use course_planner::core::graduation::GraduationRequirements;
use course_planner::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn built_in_tables_load() {
    let model = TimeModel::standard();
    assert!(!model.terms().is_empty());

    let requirements = GraduationRequirements::standard();
    assert!((requirements.total_credits_required - 24.0).abs() < f32::EPSILON);
    assert_eq!(requirements.departments.len(), 8);
}
