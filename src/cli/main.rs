//! Command-line interface entry point for `CoursePlanner`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::validate::ValidateArgs;
use course_planner::config::Config;
use course_planner::info;
use course_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let outcome = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults).map(|()| ExitCode::SUCCESS)
        }
        Command::Validate {
            plan,
            catalog,
            format,
            output,
            save,
        } => {
            let validate_args = ValidateArgs {
                plan: &plan,
                catalog: &catalog,
                format: format.as_deref(),
                output: output.as_deref(),
                save,
            };
            commands::validate::run(&validate_args, &config)
                .map(|valid| if valid { ExitCode::SUCCESS } else { ExitCode::from(2) })
        }
        Command::Conflicts { offerings, json } => commands::conflicts::run(&offerings, json)
            .map(|count| if count == 0 { ExitCode::SUCCESS } else { ExitCode::from(2) }),
        Command::Progress { plan, catalog } => {
            commands::progress::run(&plan, &catalog, &config).map(|()| ExitCode::SUCCESS)
        }
    };

    outcome.unwrap_or_else(|message| {
        eprintln!("{message}");
        ExitCode::FAILURE
    })
}
