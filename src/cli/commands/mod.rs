//! CLI command handlers for `CoursePlanner`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod conflicts;
pub mod progress;
pub mod validate;

use course_planner::config::Config;
use course_planner::core::graduation::GraduationRequirements;
use course_planner::core::models::{Catalog, StudentPlan};
use course_planner::core::planner::{load_catalog, load_plan, load_requirements};
use course_planner::{error, info};
use std::path::Path;

/// Load the graduation requirements named in config, or the built-in table
fn requirements_from(config: &Config) -> Result<GraduationRequirements, String> {
    let file = config.planner.requirements_file.as_str();
    let path = (!file.is_empty()).then(|| Path::new(file));
    let requirements = load_requirements(path).map_err(|e| {
        error!("Failed to load graduation requirements {file}: {e}");
        format!("✗ Failed to load graduation requirements {file}: {e}")
    })?;
    if path.is_some() {
        info!("Graduation requirements loaded: {file}");
    }
    Ok(requirements)
}

/// Load a plan and the catalog it selects from
fn plan_and_catalog(plan_path: &Path, catalog_path: &Path) -> Result<(StudentPlan, Catalog), String> {
    let catalog = load_catalog(catalog_path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", catalog_path.display());
        format!("✗ Failed to load {}: {e}", catalog_path.display())
    })?;
    info!(
        "Catalog loaded: {} ({} courses)",
        catalog_path.display(),
        catalog.len()
    );

    let plan = load_plan(plan_path).map_err(|e| {
        error!("Failed to load plan {}: {e}", plan_path.display());
        format!("✗ Failed to load {}: {e}", plan_path.display())
    })?;
    info!("Plan loaded: {}", plan_path.display());

    Ok((plan, catalog))
}
