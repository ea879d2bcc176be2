//! End-to-end run from parsed tiles to checksum and roughness

use crate::algorithm::assembler::Assembler;
use crate::analysis::roughness::water_roughness;
use crate::io::error::Result;
use crate::io::input::parse_tiles;
use crate::io::progress::SearchProgress;
use crate::spatial::tile::Tile;

/// Both scalar results of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Product of the corner tile identifiers
    pub checksum: u64,
    /// Marker pixels left over after removing every sea monster
    pub roughness: usize,
}

/// Assemble once, then derive the checksum and the roughness
///
/// # Errors
///
/// Returns an error if assembly, stitching or either computation fails
pub fn solve_with_progress(tiles: &[Tile], progress: SearchProgress) -> Result<Report> {
    let mosaic = Assembler::new(tiles)?.with_progress(progress).solve()?;
    let checksum = mosaic.checksum()?;
    let roughness = water_roughness(mosaic)?;
    Ok(Report {
        checksum,
        roughness,
    })
}

/// Assemble and measure without progress display
///
/// # Errors
///
/// Returns an error if assembly, stitching or either computation fails
pub fn solve(tiles: &[Tile]) -> Result<Report> {
    solve_with_progress(tiles, SearchProgress::hidden())
}

/// Parse tile blocks and run [`solve`]
///
/// # Errors
///
/// Returns a parse error for malformed input, otherwise as [`solve`]
pub fn solve_str(input: &str) -> Result<Report> {
    solve(&parse_tiles(input)?)
}
