//! Docent CLI - faculty and hall rosters with generated class timetables
//!
//! Usage: docent [COMMAND]
//!
//! Commands:
//!   session   Interactive session (default)
//!   roster    Print the faculty and hall rosters
//!   prompt    Print the prompt a generate request would send
//!   generate  Request one schedule from the generation service
//!   version   Show version information

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use docent::config::{self, Config};
use docent::presentation::{Cli, Commands, RosterArgs};

mod commands;
mod ui;

use ui::context::UiContext;
use ui::error::print_error;
use ui::output;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir().context("cannot read the current directory") {
        Ok(cwd) => cwd,
        Err(err) => return fail(&cli, &Config::default(), &err),
    };
    let (config, source, warnings) = match config::discover(cli.config.as_deref(), &cwd) {
        Ok(found) => found,
        Err(err) => return fail(&cli, &Config::default(), &anyhow::Error::new(err)),
    };

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    output::print_config_warnings(&warnings, &ui);
    output::verbose(&ui, format!("Config: {}", output::describe_source(&source)));

    match run(cli.command, &config, &ui) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err((command, err)) => {
            print_error(&err, &ui, command);
            ExitCode::FAILURE
        }
    }
}

/// Dispatch one subcommand; `Ok(false)` means it finished but failed.
fn run(
    command: Option<Commands>,
    config: &Config,
    ui: &UiContext,
) -> Result<bool, (&'static str, anyhow::Error)> {
    let tag = |name: &'static str| move |err: anyhow::Error| (name, err);
    match command {
        None => commands::session::cmd_session(&RosterArgs::default(), config, ui)
            .map(|()| true)
            .map_err(tag("session")),
        Some(Commands::Session { roster }) => commands::session::cmd_session(&roster, config, ui)
            .map(|()| true)
            .map_err(tag("session")),
        Some(Commands::Roster { roster }) => commands::roster::cmd_roster(&roster, config, ui)
            .map(|()| true)
            .map_err(tag("roster")),
        Some(Commands::Prompt {
            roster,
            constraints,
        }) => commands::prompt::cmd_prompt(&roster, &constraints, config, ui)
            .map(|()| true)
            .map_err(tag("prompt")),
        Some(Commands::Generate {
            roster,
            constraints,
        }) => commands::generate::cmd_generate(&roster, &constraints, config, ui)
            .map_err(tag("generate")),
        Some(Commands::Version) => commands::version::cmd_version(config, ui)
            .map(|()| true)
            .map_err(tag("version")),
    }
}

fn fail(cli: &Cli, config: &Config, err: &anyhow::Error) -> ExitCode {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, config);
    print_error(err, &ui, "docent");
    ExitCode::FAILURE
}
