//! CLI entry point for greedy strip reconstruction

use clap::Parser;
use unshred::io::cli::{Cli, FileProcessor};
use unshred::io::logging::init_logging;

fn main() -> unshred::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
