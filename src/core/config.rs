//! Configuration module for `CoursePlanner`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$COURSE_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Graduation requirements TOML; empty uses the built-in table
    #[serde(default)]
    pub requirements_file: String,
    /// Default report format (text, markdown, json)
    #[serde(default)]
    pub report_format: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override graduation requirements file
    pub requirements_file: Option<String>,
}

impl Config {
    /// Get the `$COURSE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseplanner`
    /// - macOS: `~/Library/Application Support/courseplanner`
    /// - Windows: `%APPDATA%\courseplanner`
    #[must_use]
    pub fn get_courseplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty in the current config and non-empty in
    /// defaults are updated, so upgrading adds new settings without touching
    /// the user's.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        // Non-short-circuiting `|` so every field is visited
        fill_if_empty(&mut self.logging.level, &defaults.logging.level)
            | fill_if_empty(&mut self.logging.file, &defaults.logging.file)
            | fill_if_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir)
            | fill_if_empty(
                &mut self.planner.requirements_file,
                &defaults.planner.requirements_file,
            )
            | fill_if_empty(
                &mut self.planner.report_format,
                &defaults.planner.report_format,
            )
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is not modified.
    /// Only non-`None` values replace config values.
    ///
    /// # Arguments
    ///
    /// * `overrides` - A `ConfigOverrides` struct with optional override values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(requirements_file) = &overrides.requirements_file {
            self.planner.requirements_file.clone_from(requirements_file);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_courseplanner_dir`](Self::get_courseplanner_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_courseplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_PLANNER` to the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_courseplanner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$COURSE_PLANNER` is expanded
    /// in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.planner.requirements_file =
            Self::expand_variables(&config.planner.requirements_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults,
    ///   and save it back if anything was added
    /// - On first run: create the config directory and write the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Err(e) = defaults.save() {
                crate::debug!("Could not write {}: {e}", config_file.display());
            }
            return defaults;
        }

        let parsed = fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    if let Err(e) = config.save() {
                        crate::debug!("Could not update {}: {e}", config_file.display());
                    }
                }
                config
            }
            Err(e) => {
                crate::debug!("Ignoring unreadable {}: {e}", config_file.display());
                defaults
            }
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`,
    /// `requirements_file`, `report_format` (dashes are accepted in place of
    /// underscores).
    ///
    /// # Returns
    /// `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match canonical_key(key)? {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "reports_dir" => self.paths.reports_dir.clone(),
            "requirements_file" => self.planner.requirements_file.clone(),
            _ => self.planner.report_format.clone(),
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., "maybe" for `verbose`, "pdf" for `report_format`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let key = canonical_key(key).ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        match key {
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "report_format" => {
                value
                    .parse::<crate::core::report::ReportFormat>()
                    .map_err(|e| format!("Invalid value for 'report_format': {e}"))?;
                self.planner.report_format = value.to_string();
            }
            _ => {
                if let Some(slot) = self.text_field(key) {
                    *slot = value.to_string();
                }
            }
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let key = canonical_key(key).ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        if key == "verbose" {
            self.logging.verbose = defaults.logging.verbose;
        } else if let Some(default) = defaults.get(key) {
            if let Some(slot) = self.text_field(key) {
                *slot = default;
            }
        }
        Ok(())
    }

    /// Mutable access to a string-valued setting by canonical key
    fn text_field(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "level" => Some(&mut self.logging.level),
            "file" => Some(&mut self.logging.file),
            "reports_dir" => Some(&mut self.paths.reports_dir),
            "requirements_file" => Some(&mut self.planner.requirements_file),
            "report_format" => Some(&mut self.planner.report_format),
            _ => None,
        }
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

/// Map a user-supplied key (dashes allowed) to its canonical name
fn canonical_key(key: &str) -> Option<&'static str> {
    match key.replace('-', "_").as_str() {
        "level" => Some("level"),
        "file" => Some("file"),
        "verbose" => Some("verbose"),
        "reports_dir" => Some("reports_dir"),
        "requirements_file" => Some("requirements_file"),
        "report_format" => Some("report_format"),
        _ => None,
    }
}

/// Copy `default` into `field` when `field` is empty and `default` isn't
fn fill_if_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  requirements_file = \"{}\"", self.planner.requirements_file)?;
        writeln!(f, "  report_format = \"{}\"", self.planner.report_format)?;

        Ok(())
    }
}
