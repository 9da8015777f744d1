//! Conflicts command handler

use course_planner::core::calendar::TimeModel;
use course_planner::core::conflicts::ConflictDetector;
use course_planner::core::models::ClassOffering;
use course_planner::core::planner::load_offerings;
use course_planner::{error, info};
use std::path::Path;

/// Run the conflicts command.
///
/// # Returns
/// Number of conflicts found
///
/// # Errors
/// Returns a printable message if the offerings cannot be loaded or use a
/// term slot the calendar does not define
pub fn run(offerings_path: &Path, as_json: bool) -> Result<usize, String> {
    let offerings = load_offerings(offerings_path).map_err(|e| {
        error!("Failed to load offerings {}: {e}", offerings_path.display());
        format!("✗ Failed to load {}: {e}", offerings_path.display())
    })?;
    info!(
        "Offerings loaded: {} ({} classes)",
        offerings_path.display(),
        offerings.len()
    );

    let model = TimeModel::standard();
    let conflicts = ConflictDetector::new(&model)
        .detect(&offerings)
        .map_err(|e| {
            error!("Conflict detection failed for {}: {e}", offerings_path.display());
            format!("✗ Calendar configuration error: {e}")
        })?;

    if as_json {
        let json = serde_json::to_string_pretty(&conflicts)
            .map_err(|e| format!("✗ Failed to serialize conflicts: {e}"))?;
        println!("{json}");
        return Ok(conflicts.len());
    }

    print_schedule(&model, &offerings);
    if conflicts.is_empty() {
        println!("✓ No conflicts among {} offerings", offerings.len());
    } else {
        println!("✗ {} conflict(s) found:", conflicts.len());
        for conflict in &conflicts {
            println!("  - {conflict}");
        }
    }

    Ok(conflicts.len())
}

/// One line per offering: term window and daily placement
fn print_schedule(model: &TimeModel, offerings: &[ClassOffering]) {
    let day = model.school_day();
    println!(
        "\n=== Schedule ({}:00-{}:00 school day) ===\n",
        day.start_hour, day.end_hour
    );
    for offering in offerings {
        let window = model
            .slot_label(offering.term_slot)
            .unwrap_or_else(|_| offering.term_slot.to_string());
        let placement = match (offering.placement_label(), offering.period_slot) {
            (Some(label), Some(slot)) => model
                .period_times(slot)
                .map_or_else(|| label.clone(), |times| format!("{label} {times}")),
            _ => "no period yet (not checked)".to_string(),
        };
        println!("  {:<20} {:<16} {placement}", offering.name, window);
    }
    println!();
}
