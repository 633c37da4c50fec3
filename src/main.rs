//! CLI entry point for the land-sea mask decomposition tool

use clap::Parser;
use subdiv::io::cli::{Cli, DecompositionRunner};

fn main() -> subdiv::Result<()> {
    let cli = Cli::parse();
    let runner = DecompositionRunner::new(cli);
    runner.run().map(|_| ())
}
