//! Backtracking search placing every tile into a square grid
//!
//! Cells are filled in row-major order. For each cell every free tile is tried
//! in every orientation, in input order and canonical [`Symmetry`] order. A
//! candidate fits when its west edge matches the east edge of its left
//! neighbour and its north edge matches the south edge of the tile above. The
//! first complete grid found is returned; the input is assumed to admit a
//! single arrangement up to a global rotation or reflection, which is not
//! verified.

use crate::algorithm::bitset::PlacementSet;
use crate::algorithm::mosaic::{Mosaic, Placement};
use crate::io::error::{AlgorithmError, Result, invalid_source};
use crate::io::progress::SearchProgress;
use crate::spatial::symmetry::Symmetry;
use crate::spatial::tile::Tile;
use std::collections::HashSet;

/// Every orientation of one input tile, indexed by [`Symmetry::index`]
struct OrientedTile {
    variants: Vec<Tile>,
}

impl OrientedTile {
    fn new(tile: &Tile) -> Self {
        Self {
            variants: tile.orientations().map(|(_, variant)| variant).collect(),
        }
    }

    fn get(&self, symmetry: Symmetry) -> Option<&Tile> {
        self.variants.get(symmetry.index())
    }
}

/// Square side length when `count` is a perfect square
pub const fn grid_side(count: usize) -> Option<usize> {
    let side = count.isqrt();
    if side * side == count {
        Some(side)
    } else {
        None
    }
}

/// Depth-first assembler over an arena of pre-oriented tiles
pub struct Assembler {
    arena: Vec<OrientedTile>,
    side: usize,
    progress: Option<SearchProgress>,
    candidates_tested: u64,
}

impl Assembler {
    /// Validate the tile set and prepare every orientation for the search
    ///
    /// # Errors
    ///
    /// Returns an error if there are no tiles, tiles differ in size, an
    /// identifier repeats, or the tile count is not a perfect square
    pub fn new(tiles: &[Tile]) -> Result<Self> {
        let first = tiles
            .first()
            .ok_or_else(|| invalid_source(&"no tiles to assemble"))?;

        let size = first.size();
        if let Some(odd) = tiles.iter().find(|tile| tile.size() != size) {
            return Err(invalid_source(&format!(
                "tile {} is {}x{} but tile {} is {size}x{size}",
                odd.id(),
                odd.size(),
                odd.size(),
                first.id()
            )));
        }

        let mut seen = HashSet::with_capacity(tiles.len());
        if let Some(duplicate) = tiles.iter().find(|tile| !seen.insert(tile.id())) {
            return Err(invalid_source(&format!(
                "tile id {} appears more than once",
                duplicate.id()
            )));
        }

        let side = grid_side(tiles.len()).ok_or(AlgorithmError::NotPerfectSquare {
            tile_count: tiles.len(),
        })?;

        Ok(Self {
            arena: tiles.iter().map(OrientedTile::new).collect(),
            side,
            progress: None,
            candidates_tested: 0,
        })
    }

    /// Report search depth and backtracks through a progress display
    #[must_use]
    pub fn with_progress(mut self, progress: SearchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Tiles along each side of the target grid
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Candidate orientations checked against their neighbours so far
    pub const fn candidates_tested(&self) -> u64 {
        self.candidates_tested
    }

    /// Run the search
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::NoSolution`] if no placement of every tile
    /// satisfies all edge constraints
    pub fn solve(&mut self) -> Result<Mosaic> {
        let cells = self.arena.len();
        log::debug!(
            "Assembling {cells} tiles into a {side}x{side} grid",
            side = self.side
        );

        if let Some(progress) = self.progress.as_mut() {
            progress.start(cells);
        }

        let mut placed = Vec::with_capacity(cells);
        let mut used = PlacementSet::new(cells);
        let found = self.search(&mut placed, &mut used);

        if let Some(progress) = self.progress.as_ref() {
            progress.finish();
            log::debug!(
                "Search reached depth {} of {cells} with {} backtracks",
                progress.deepest(),
                progress.backtracks()
            );
        }

        if !found {
            log::debug!(
                "Search exhausted after {} candidates",
                self.candidates_tested
            );
            return Err(AlgorithmError::NoSolution {
                tile_count: cells,
                side: self.side,
            });
        }

        let tiles = placed
            .iter()
            .map(|placement| self.tile(*placement).cloned())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid_source(&"placement refers to a missing tile"))?;
        let mosaic = Mosaic::new(self.side, tiles, placed);

        log::info!(
            "Assembled {cells} tiles after testing {} candidates",
            self.candidates_tested
        );
        log::debug!("Mosaic layout:\n{mosaic}");
        Ok(mosaic)
    }

    fn tile(&self, placement: Placement) -> Option<&Tile> {
        self.arena
            .get(placement.index)
            .and_then(|oriented| oriented.get(placement.symmetry))
    }

    fn search(&mut self, placed: &mut Vec<Placement>, used: &mut PlacementSet) -> bool {
        if used.is_full() {
            return true;
        }

        for index in 0..self.arena.len() {
            if used.contains(index) {
                continue;
            }

            for symmetry in Symmetry::ALL {
                let candidate = Placement { index, symmetry };
                self.candidates_tested += 1;
                if !self.fits(placed, candidate) {
                    continue;
                }

                placed.push(candidate);
                used.insert(index);
                if let Some(progress) = self.progress.as_mut() {
                    progress.placed(placed.len());
                }

                if self.search(placed, used) {
                    return true;
                }

                placed.pop();
                used.remove(index);
                log::trace!(
                    "Backtracking tile {index} ({symmetry}) from cell {}",
                    placed.len()
                );
                if let Some(progress) = self.progress.as_mut() {
                    progress.backtracked();
                }
            }
        }

        false
    }

    fn fits(&self, placed: &[Placement], candidate: Placement) -> bool {
        let Some(tile) = self.tile(candidate) else {
            return false;
        };
        let cell = placed.len();

        if cell % self.side != 0 {
            let west = placed
                .last()
                .and_then(|&neighbour| self.tile(neighbour));
            if west.is_none_or(|neighbour| neighbour.east_edge() != tile.west_edge()) {
                return false;
            }
        }

        if cell >= self.side {
            let north = placed
                .get(cell - self.side)
                .and_then(|&neighbour| self.tile(neighbour));
            if north.is_none_or(|neighbour| neighbour.south_edge() != tile.north_edge()) {
                return false;
            }
        }

        true
    }
}

/// Assemble tiles into a mosaic without progress display
///
/// # Errors
///
/// Returns a configuration error if the tile count is not a perfect square,
/// an invalid source error for empty, mixed-size or duplicate-id input, and
/// [`AlgorithmError::NoSolution`] if the search fails
pub fn assemble(tiles: &[Tile]) -> Result<Mosaic> {
    Assembler::new(tiles)?.solve()
}
