//! Command-line interface: one tile file in, checksum and roughness out

use crate::algorithm::pipeline::{Report, solve_with_progress};
use crate::io::error::Result;
use crate::io::input::load_tiles;
use crate::io::progress::SearchProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Assemble jigsaw tiles and measure sea monster water roughness"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Text file of `Tile <id>:` blocks
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

/// Runs the assembly pipeline for one input file
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, assemble and measure the input file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if assembly
    /// or measurement fails
    pub fn process(&self) -> Result<Report> {
        let tiles = load_tiles(&self.cli.input)?;
        log::info!(
            "Loaded {} tiles from {}",
            tiles.len(),
            self.cli.input.display()
        );
        solve_with_progress(&tiles, SearchProgress::new())
    }
}
