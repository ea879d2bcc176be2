//! CLI entry point: prints the corner checksum, then the water roughness

use clap::Parser;
use tilemosaic::io::cli::{Cli, FileProcessor};

// Results are the program's output
#[allow(clippy::print_stdout)]
fn main() -> tilemosaic::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let report = FileProcessor::new(cli).process()?;
    println!("{}", report.checksum);
    println!("{}", report.roughness);
    Ok(())
}
