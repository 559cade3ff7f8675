use clap::Parser;

use rightsize::adapter::inbound::cli::command::Cli;
use rightsize::adapter::inbound::cli::output::{self, OutputConfig};
use rightsize::adapter::inbound::cli::dispatch;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::set_color(cli.color.forced());

    if let Err(e) = dispatch(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
