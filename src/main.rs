//! CLI entry point for the rotated needle frame generator

use clap::Parser;
use needleframe::io::cli::Cli;

fn main() -> needleframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    cli.run().map(|_| ())
}
