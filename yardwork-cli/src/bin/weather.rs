//! Binary entry point for the `weather` tracker.

use clap::Parser;

/// Interactive multi-city weather statistics tracker.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Multi-city weather statistics tracker")]
struct Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse();
    yardwork_cli::weather::run()
}
