//! JSON report generator

use crate::core::graduation::GraduationProgress;
use crate::core::models::StudentPlan;
use crate::core::report::{PlanReportContext, ReportGenerator};
use crate::core::validation::PlanValidationResult;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    plan: &'a StudentPlan,
    validation: &'a PlanValidationResult,
    graduation_progress: &'a GraduationProgress,
    recommended_courses: &'a [String],
}

/// Pretty-printed JSON report
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &PlanReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            plan: ctx.plan,
            validation: ctx.result,
            graduation_progress: ctx.progress,
            recommended_courses: ctx.recommended_courses(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
