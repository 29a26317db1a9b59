//! CLI entry point for the grid collage tool

use clap::Parser;
use collager::io::cli::{Cli, CollageRunner};

fn main() -> collager::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = CollageRunner::new(cli);
    runner.run().map(drop)
}
