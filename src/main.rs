//! CLI entry point for the connected-texture atlas stitcher

use clap::Parser;
use ctmstitch::io::cli::{Cli, FileProcessor};

fn main() -> ctmstitch::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
