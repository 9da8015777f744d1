//! Markdown report generator
//!
//! Renders well in GitHub, GitLab, and VS Code, so counselors can share plans
//! as documents.

use crate::core::report::{PlanReportContext, ReportGenerator};
use crate::core::validation::format_credits;
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/plan_report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &PlanReportContext) -> String {
        let stats = &ctx.result.statistics;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{student_name}}", &ctx.plan.student_name);
        output = output.replace("{{school_year}}", &ctx.plan.school_year);
        output = output.replace("{{grade_level}}", &ctx.plan.grade_level.to_string());
        output = output.replace("{{status}}", ctx.status_label());

        output = output.replace("{{total_courses}}", &stats.total_courses.to_string());
        output = output.replace("{{total_credits}}", &format_credits(stats.total_credits));
        output = output.replace("{{total_periods}}", &stats.total_periods.to_string());
        output = output.replace("{{advanced_courses}}", &stats.advanced_courses.to_string());
        output = output.replace("{{average_workload}}", &format!("{:.1}", stats.average_workload));
        output = output.replace(
            "{{homework_hours}}",
            &stats.estimated_homework_hours_per_week.to_string(),
        );

        output = output.replace("{{errors}}", &Self::bullet_list(&ctx.result.errors, "None"));
        output = output.replace("{{warnings}}", &Self::bullet_list(&ctx.result.warnings, "None"));
        output = output.replace("{{credits_by_department}}", &Self::department_credits_table(ctx));
        output = output.replace("{{on_track}}", &Self::on_track_line(ctx));
        output = output.replace("{{department_progress}}", &Self::progress_table(ctx));
        output = output.replace(
            "{{recommended}}",
            &Self::bullet_list(ctx.recommended_courses(), "No recommendations for this grade."),
        );

        output
    }

    fn bullet_list(items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("_{empty}_");
        }
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn department_credits_table(ctx: &PlanReportContext) -> String {
        let credits = &ctx.result.statistics.credits_by_department;
        if credits.is_empty() {
            return "_No courses selected._".to_string();
        }

        let mut table = String::new();
        table.push_str("| Department | Credits |\n");
        table.push_str("|---|---|\n");
        for (department, amount) in credits.iter() {
            let _ = writeln!(table, "| {department} | {} |", format_credits(*amount));
        }
        table
    }

    fn on_track_line(ctx: &PlanReportContext) -> String {
        let progress = ctx.progress;
        let verdict = if progress.on_track { "On track" } else { "Behind pace" };
        format!(
            "**{verdict}:** {} credits selected; grade {} benchmark is {} of {} total.",
            format_credits(progress.total_credits_earned),
            progress.grade_level,
            format_credits(progress.expected_credits),
            format_credits(progress.total_credits_required)
        )
    }

    fn progress_table(ctx: &PlanReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Department | Required | Earned | Remaining | |\n");
        table.push_str("|---|---|---|---|---|\n");
        for dept in &ctx.progress.department_progress {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                dept.department,
                format_credits(dept.required),
                format_credits(dept.earned),
                format_credits(dept.remaining),
                if dept.complete { "✓" } else { "" }
            );
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &PlanReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::test_support::sample;

    #[test]
    fn test_render_fills_every_placeholder() {
        let (plan, result, progress, requirements) = sample();
        let ctx = PlanReportContext::new(&plan, &result, &progress, &requirements);

        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(!output.contains("{{"), "unfilled placeholder in:\n{output}");
        assert!(output.starts_with("# Course Plan: Jordan Lee"));
        assert!(output.contains("**Status:** Invalid"));
        assert!(output.contains("- AP Calculus is not available for grade 9."));
        assert!(output.contains("| English | 4.0 | 1.0 | 3.0 |  |"));
        assert!(output.contains("- English 9"));
    }

    #[test]
    fn test_generate_writes_file() {
        let (plan, result, progress, requirements) = sample();
        let ctx = PlanReportContext::new(&plan, &result, &progress, &requirements);
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plan.md");

        MarkdownReporter::new().generate(&ctx, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("## Graduation Progress"));
    }
}
