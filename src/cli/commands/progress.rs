//! Progress command handler
//!
//! Shows how a plan's credits stack up against the graduation requirements,
//! with grade recommendations and college admission advice.

use super::{plan_and_catalog, requirements_from};
use course_planner::config::Config;
use course_planner::core::models::catalog::resolve_selection;
use course_planner::core::validation::{compute_statistics, format_credits};
use std::path::Path;

/// Run the progress command.
///
/// # Errors
/// Returns a printable message if an input cannot be loaded
pub fn run(plan_path: &Path, catalog_path: &Path, config: &Config) -> Result<(), String> {
    let requirements = requirements_from(config)?;
    let (plan, catalog) = plan_and_catalog(plan_path, catalog_path)?;

    let selected = resolve_selection(catalog.courses(), &plan.selected_course_ids);
    let stats = compute_statistics(&selected);
    let progress = requirements.progress(
        plan.grade_level,
        &stats.credits_by_department,
        stats.total_credits,
    );

    println!(
        "\n=== Graduation Progress: {} (grade {}) ===\n",
        plan.student_name, plan.grade_level
    );
    println!(
        "{} credits this year; grade {} benchmark is {} of {} ({})",
        format_credits(progress.total_credits_earned),
        progress.grade_level,
        format_credits(progress.expected_credits),
        format_credits(progress.total_credits_required),
        if progress.on_track { "on track" } else { "behind pace" }
    );
    println!();

    for dept in &progress.department_progress {
        let mark = if dept.complete { "✓" } else { " " };
        println!(
            "  {mark} {:<20} {:>5} / {:<5} remaining {}",
            dept.department,
            format_credits(dept.earned),
            format_credits(dept.required),
            format_credits(dept.remaining)
        );
    }

    let missing: Vec<&str> = progress
        .incomplete()
        .map(|dept| dept.department.as_str())
        .collect();
    if missing.is_empty() {
        println!("\n✓ Every department requirement is covered");
    } else {
        println!("\nStill needed in: {}", missing.join(", "));
    }

    let recommended = requirements.recommended_for(plan.grade_level);
    if !recommended.is_empty() {
        println!("\nRecommended for grade {}:", plan.grade_level);
        for course in recommended {
            println!("  - {course}");
        }
    }

    if !requirements.college_recommendations.is_empty() {
        println!("\nCollege admission guidance:");
        for rec in &requirements.college_recommendations {
            println!("  {}: {}", rec.audience, rec.advice);
        }
    }

    Ok(())
}
