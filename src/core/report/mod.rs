//! Report generation for validated student plans
//!
//! Renders a plan, its validation result and graduation progress as plain
//! text, Markdown or JSON.

pub mod formats;

use crate::core::graduation::{GraduationProgress, GraduationRequirements};
use crate::core::models::StudentPlan;
use crate::core::validation::PlanValidationResult;
use std::error::Error;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct PlanReportContext<'a> {
    /// The plan being reported
    pub plan: &'a StudentPlan,
    /// Validation outcome
    pub result: &'a PlanValidationResult,
    /// Graduation progress for the plan's statistics
    pub progress: &'a GraduationProgress,
    /// Requirements the plan was checked against
    pub requirements: &'a GraduationRequirements,
}

impl<'a> PlanReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        plan: &'a StudentPlan,
        result: &'a PlanValidationResult,
        progress: &'a GraduationProgress,
        requirements: &'a GraduationRequirements,
    ) -> Self {
        Self {
            plan,
            result,
            progress,
            requirements,
        }
    }

    /// "Valid" or "Invalid"
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.result.is_valid {
            "Valid"
        } else {
            "Invalid"
        }
    }

    /// Recommended courses for the plan's grade
    #[must_use]
    pub fn recommended_courses(&self) -> &[String] {
        self.requirements.recommended_for(self.plan.grade_level)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &PlanReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &PlanReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
