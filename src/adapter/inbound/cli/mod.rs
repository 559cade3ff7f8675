//! CLI module graph.

pub mod command;
pub mod config;
pub mod optimize;
pub mod output;
pub mod paths;

use self::command::{Cli, Commands, ConfigCommand};
use crate::error::Result;

/// Dispatch a parsed command line to its handler.
///
/// # Errors
///
/// Returns the handler's error; the caller decides how to report it.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Optimize(args) => optimize::execute(&args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.config, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}
