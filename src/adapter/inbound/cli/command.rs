//! Command-line interface definitions.
//!
//! Defines the CLI structure for the rightsize application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Minimal-disruption workforce redeployment optimizer
#[derive(Parser, Debug)]
#[command(name = "rightsize")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Forced color setting, or `None` to detect per stream.
    #[must_use]
    pub const fn forced(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

/// Top-level subcommands for the rightsize CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute recommended headcounts for a request
    Optimize(OptimizeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `rightsize config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `optimize` subcommand.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// Request JSON file, or `-` to read from stdin.
    #[arg(short, long)]
    pub request: PathBuf,

    /// Configuration file. Defaults to `~/.rightsize/config.toml` when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl OptimizeArgs {
    /// True when the request should be read from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.request.as_os_str() == "-"
    }
}
