//! Sea monster search and water roughness

use crate::algorithm::mosaic::Mosaic;
use crate::algorithm::stitcher::to_picture;
use crate::analysis::pattern::Pattern;
use crate::io::configuration::{MARKER_PIXEL, SEA_MONSTER_MARKER_CELLS};
use crate::io::error::{Result, computation_error};
use crate::spatial::symmetry::Symmetry;
use crate::spatial::tile::Tile;

/// Matches of a pattern in the first orientation that has any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sighting {
    /// Orientation of the picture the matches were found in
    pub symmetry: Symmetry,
    /// Top-left corners of every match in that orientation, row-major
    pub positions: Vec<(usize, usize)>,
}

impl Sighting {
    /// Number of matches
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

/// Find the pattern in the first orientation of the tile that contains it
///
/// Orientations are tried in canonical order and the search stops at the
/// first with a nonzero match count. Returns `None` if no orientation matches.
pub fn find_occurrences(pattern: &Pattern, tile: &Tile) -> Option<Sighting> {
    tile.orientations().find_map(|(symmetry, oriented)| {
        let positions = pattern.positions(oriented.pixels());
        if positions.is_empty() {
            None
        } else {
            log::debug!(
                "Found {} matches of {}x{} pattern under {symmetry}",
                positions.len(),
                pattern.height(),
                pattern.width()
            );
            Some(Sighting {
                symmetry,
                positions,
            })
        }
    })
}

/// Match count of the first orientation containing the pattern, or 0
pub fn count_occurrences(pattern: &Pattern, tile: &Tile) -> usize {
    find_occurrences(pattern, tile).map_or(0, |sighting| sighting.count())
}

/// Total marker pixels, identical in every orientation
pub fn count_markers(tile: &Tile) -> usize {
    tile.count_pixels(MARKER_PIXEL)
}

/// Marker pixels not covered by a sea monster
///
/// Computed as the marker count minus fifteen cells per monster found.
///
/// # Errors
///
/// Returns a computation error if overlapping monsters claim more cells than
/// the picture holds
pub fn roughness(picture: &Tile) -> Result<usize> {
    let markers = count_markers(picture);
    let monsters = count_occurrences(&Pattern::sea_monster(), picture);
    if monsters == 0 {
        log::warn!("No sea monster found in any orientation of the picture");
    }

    monsters
        .checked_mul(SEA_MONSTER_MARKER_CELLS)
        .and_then(|covered| markers.checked_sub(covered))
        .ok_or_else(|| {
            computation_error(
                "roughness",
                &format!("{monsters} monsters cover more than the {markers} marker pixels"),
            )
        })
}

/// Stitch the mosaic and measure the roughness of the resulting picture
///
/// # Errors
///
/// Returns an error if stitching fails or the roughness cannot be computed
pub fn water_roughness(mosaic: Mosaic) -> Result<usize> {
    let picture = to_picture(mosaic)?;
    roughness(&picture)
}
