//! Binary entry point for the `mulch` calculator.

use clap::Parser;

/// Interactive mulch volume and cost calculator.
#[derive(Debug, Parser)]
#[command(name = "mulch", version, about = "Mulch volume and cost calculator")]
struct Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse();
    yardwork_cli::mulch::run()
}
