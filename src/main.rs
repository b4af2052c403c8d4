//! CLI entry point for the photo mosaic builder

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    let processor = MosaicProcessor::new(cli);
    processor.process()
}
