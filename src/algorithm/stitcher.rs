//! Stitching an assembled mosaic into one picture

use crate::algorithm::mosaic::Mosaic;
use crate::io::configuration::{BLANK_PIXEL, PICTURE_ID};
use crate::io::error::{Result, invalid_source};
use crate::spatial::tile::Tile;
use ndarray::{Array2, Axis, Slice};

/// Strip every tile's border and lay the interiors out in mosaic order
///
/// Tile `i` lands in band `i / side` and column block `i % side`, so the
/// mosaic must still be in the row-major order the assembler produced. The
/// picture has identifier 0 and side `side * (tile_size - 2)`.
///
/// # Errors
///
/// Returns an error if the mosaic is empty, if a tile's border was already
/// removed or if tiles are too small to keep an interior
pub fn to_picture(mosaic: Mosaic) -> Result<Tile> {
    let side = mosaic.side();
    let tile_size = mosaic
        .tiles()
        .first()
        .map(Tile::size)
        .ok_or_else(|| invalid_source(&"cannot stitch an empty mosaic"))?;
    let interior = tile_size.saturating_sub(2);
    let picture_size = side * interior;

    let mut pixels = Array2::from_elem((picture_size, picture_size), BLANK_PIXEL);
    for (index, mut tile) in mosaic.into_tiles().into_iter().enumerate() {
        tile.remove_border()?;

        let top = (index / side) * interior;
        let left = (index % side) * interior;
        let mut block = pixels.view_mut();
        block.slice_axis_inplace(Axis(0), Slice::from(top..top + interior));
        block.slice_axis_inplace(Axis(1), Slice::from(left..left + interior));
        block.assign(tile.pixels());
    }

    log::debug!("Stitched {picture_size}x{picture_size} picture from {side}x{side} mosaic");
    Tile::new(PICTURE_ID, pixels)
}
