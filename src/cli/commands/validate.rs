//! Validate command handler
//!
//! Validates a student plan against a course catalog and renders the result
//! as a report.

use super::{plan_and_catalog, requirements_from};
use course_planner::config::Config;
use course_planner::core::report::{reporter_for, PlanReportContext, ReportFormat, ReportGenerator};
use course_planner::core::validation::PlanValidator;
use course_planner::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options for the validate command
pub struct ValidateArgs<'a> {
    /// Student plan file
    pub plan: &'a Path,
    /// Course catalog file
    pub catalog: &'a Path,
    /// Report format name; config `report_format` when `None`
    pub format: Option<&'a str>,
    /// Report file; stdout when `None`
    pub output: Option<&'a Path>,
    /// Also write the report into the reports directory
    pub save: bool,
}

/// Run the validate command.
///
/// # Returns
/// Whether the plan is valid
///
/// # Errors
/// Returns a printable message if an input cannot be loaded or the report
/// cannot be rendered or written
pub fn run(args: &ValidateArgs, config: &Config) -> Result<bool, String> {
    let format_name = args.format.unwrap_or(&config.planner.report_format);
    let format = if format_name.is_empty() {
        ReportFormat::default()
    } else {
        ReportFormat::from_str(format_name).map_err(|e| format!("✗ {e}"))?
    };

    let requirements = requirements_from(config)?;
    let (plan, catalog) = plan_and_catalog(args.plan, args.catalog)?;

    let result = PlanValidator::new(&requirements).validate(&plan, catalog.courses());
    info!(
        "Validated plan for {}: {} errors, {} warnings",
        plan.student_name,
        result.errors.len(),
        result.warnings.len()
    );
    verbose!(
        "Resolved {} of {} selected courses",
        result.statistics.total_courses,
        plan.selected_course_ids.len()
    );

    let progress = requirements.progress(
        plan.grade_level,
        &result.statistics.credits_by_department,
        result.statistics.total_credits,
    );
    let ctx = PlanReportContext::new(&plan, &result, &progress, &requirements);
    let reporter = reporter_for(format);

    match args.output {
        Some(path) => write_report(reporter.as_ref(), &ctx, path)?,
        None => {
            let rendered = reporter.render(&ctx).map_err(|e| {
                error!("Failed to render {format} report: {e}");
                format!("✗ Failed to render report: {e}")
            })?;
            print!("{rendered}");
        }
    }

    if args.save {
        let path = saved_report_path(config, &plan.student_name, plan.grade_level, format);
        write_report(reporter.as_ref(), &ctx, &path)?;
    }

    Ok(result.is_valid)
}

fn write_report(
    reporter: &dyn ReportGenerator,
    ctx: &PlanReportContext,
    path: &Path,
) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            error!("Failed to create directory {}: {e}", parent.display());
            format!("✗ Failed to create directory {}: {e}", parent.display())
        })?;
    }
    reporter.generate(ctx, path).map_err(|e| {
        error!("Failed to write report {}: {e}", path.display());
        format!("✗ Failed to write {}: {e}", path.display())
    })?;
    info!("Report written: {}", path.display());
    eprintln!("✓ Report generated: {}", path.display());
    Ok(())
}

/// `<reports_dir>/<student>_grade<N>.<ext>`, with the student name made file-safe
fn saved_report_path(config: &Config, student: &str, grade: u8, format: ReportFormat) -> PathBuf {
    let stem: String = student
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    PathBuf::from(&config.paths.reports_dir).join(format!(
        "{stem}_grade{grade}.{}",
        format.extension()
    ))
}
