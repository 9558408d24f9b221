//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Running `docent` without a subcommand starts an interactive
//! session.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Docent - faculty and hall rosters with generated class timetables
#[derive(Parser, Debug)]
#[command(name = "docent")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'docent' without arguments for an interactive session.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./docent.toml, then ~/.config/docent/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the starting roster comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterArgs {
    /// Roster file to start from (.toml, .json, .yaml)
    #[arg(long, value_name = "FILE", conflicts_with = "sample")]
    pub roster: Option<PathBuf>,

    /// Start from the built-in sample roster
    #[arg(long)]
    pub sample: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session: manage faculty and halls, generate schedules
    Session {
        #[command(flatten)]
        roster: RosterArgs,
    },

    /// Print the faculty and hall rosters
    Roster {
        #[command(flatten)]
        roster: RosterArgs,
    },

    /// Print the prompt that would be sent to the generation service
    Prompt {
        #[command(flatten)]
        roster: RosterArgs,

        /// Additional scheduling constraints (free text)
        #[arg(short, long, default_value = "")]
        constraints: String,
    },

    /// Request one schedule from the generation service
    Generate {
        #[command(flatten)]
        roster: RosterArgs,

        /// Additional scheduling constraints (free text)
        #[arg(short, long, default_value = "")]
        constraints: String,
    },

    /// Show version information
    Version,
}
