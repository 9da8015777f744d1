//! Plain text report generator

use crate::core::report::{PlanReportContext, ReportGenerator};
use crate::core::validation::format_credits;
use std::error::Error;
use std::fmt::Write;

/// Plain text report for terminal output
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &PlanReportContext) -> Result<String, Box<dyn Error>> {
        let plan = ctx.plan;
        let stats = &ctx.result.statistics;
        let mut out = String::new();

        writeln!(
            out,
            "Plan for {} (grade {}, {})",
            plan.student_name, plan.grade_level, plan.school_year
        )?;
        writeln!(out, "Status: {}", ctx.status_label())?;
        writeln!(
            out,
            "Courses: {}  Credits: {}  Periods: {}  AP/Honors: {}",
            stats.total_courses,
            format_credits(stats.total_credits),
            stats.total_periods,
            stats.advanced_courses
        )?;
        writeln!(
            out,
            "Average workload: {:.1}  Homework: ~{} hrs/week",
            stats.average_workload, stats.estimated_homework_hours_per_week
        )?;

        if !ctx.result.errors.is_empty() {
            writeln!(out, "\nErrors:")?;
            for error in &ctx.result.errors {
                writeln!(out, "  ✗ {error}")?;
            }
        }
        if !ctx.result.warnings.is_empty() {
            writeln!(out, "\nWarnings:")?;
            for warning in &ctx.result.warnings {
                writeln!(out, "  ! {warning}")?;
            }
        }

        writeln!(
            out,
            "\nGraduation progress ({}):",
            if ctx.progress.on_track { "on track" } else { "behind pace" }
        )?;
        for dept in &ctx.progress.department_progress {
            writeln!(
                out,
                "  {:<20} {:>5} / {:<5} {}",
                dept.department,
                format_credits(dept.earned),
                format_credits(dept.required),
                if dept.complete { "✓" } else { "" }
            )?;
        }

        Ok(out)
    }
}
