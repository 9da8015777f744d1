//! Config command handler

use crate::args::ConfigSubcommand;
use course_planner::config::Config;
use std::io::{self, Write};

/// Keys accepted by `config get/set/unset`
const KNOWN_KEYS: [&str; 6] = [
    "level",
    "file",
    "verbose",
    "reports_dir",
    "requirements_file",
    "report_format",
];

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is invalid, or
/// the config file cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "✗ Unknown config key: '{key}' (expected one of: {})",
        KNOWN_KEYS.join(", ")
    )
}

/// Handle the config get subcommand
fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    if let Some(k) = key {
        let value = config.get(&k).ok_or_else(|| unknown_key(&k))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===");
        println!("({})\n", Config::get_config_file_path().display());
        print!("{config}");
    }
    Ok(())
}

/// Handle the config set subcommand
fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    if config.get(key).is_none() {
        return Err(unknown_key(key));
    }
    config.set(key, value).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;

    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|_| unknown_key(key))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;

    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
