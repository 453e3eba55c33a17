//! CLI entry point for the tile assembler

use clap::Parser;
use tileseam::io::cli::{Cli, run};

fn main() -> tileseam::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    run(cli)
}
