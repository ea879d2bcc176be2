//! Assembled square grid of oriented tiles

use crate::io::error::{Result, computation_error};
use crate::spatial::symmetry::Symmetry;
use crate::spatial::tile::{Tile, TileId};
use std::fmt;

/// Where one grid cell's tile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the tile in the assembler input
    pub index: usize,
    /// Orientation the tile was placed in, relative to its input pixels
    pub symmetry: Symmetry,
}

/// Row-major `side x side` arrangement of tiles whose shared edges match
///
/// Cell `i` sits at row `i / side`, column `i % side`. Tiles are stored in the
/// orientation they were placed in.
#[derive(Debug, Clone)]
pub struct Mosaic {
    side: usize,
    tiles: Vec<Tile>,
    placements: Vec<Placement>,
}

impl Mosaic {
    /// Build a mosaic from placed tiles in row-major order
    ///
    /// Callers guarantee `tiles.len() == side * side` and that placements
    /// correspond to tiles cell for cell.
    pub(crate) const fn new(side: usize, tiles: Vec<Tile>, placements: Vec<Placement>) -> Self {
        Self {
            side,
            tiles,
            placements,
        }
    }

    /// Number of tiles along each side of the grid
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Total number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the mosaic holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Input index and orientation of every cell, row-major
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Tile at the given grid cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.tiles.get(row * self.side + col)
    }

    /// Identifiers of the four corner tiles: top-left, top-right, bottom-left, bottom-right
    pub fn corner_ids(&self) -> Option<[TileId; 4]> {
        let last = self.side.checked_sub(1)?;
        Some([
            self.get(0, 0)?.id(),
            self.get(0, last)?.id(),
            self.get(last, 0)?.id(),
            self.get(last, last)?.id(),
        ])
    }

    /// Product of the four corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns a computation error if the mosaic is empty or the product
    /// overflows 64 bits
    pub fn checksum(&self) -> Result<u64> {
        let corners = self
            .corner_ids()
            .ok_or_else(|| computation_error("checksum", &"mosaic has no corners"))?;

        corners
            .iter()
            .try_fold(1_u64, |product, &id| product.checked_mul(id))
            .ok_or_else(|| {
                computation_error(
                    "checksum",
                    &format!("product of corner ids {corners:?} overflows 64 bits"),
                )
            })
    }

    /// Tile identifiers laid out by grid row
    pub fn ids_grid(&self) -> Vec<Vec<TileId>> {
        self.tiles
            .chunks(self.side.max(1))
            .map(|row| row.iter().map(Tile::id).collect())
            .collect()
    }

    /// Release the tiles in row-major order
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}

impl fmt::Display for Mosaic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.ids_grid().iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col_index, id) in row.iter().enumerate() {
                if col_index > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{id:>5}")?;
            }
        }
        Ok(())
    }
}
