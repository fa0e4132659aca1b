//! CLI entry point for the greedy tile puzzle assembler

use clap::Parser;
use puzzlestitch::io::cli::{Cli, PuzzleProcessor, init_logging};

fn main() -> puzzlestitch::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let mut processor = PuzzleProcessor::new(cli);
    processor.process()
}
