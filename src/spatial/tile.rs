//! Square pixel tiles with edge fingerprints and orientation changes

use crate::io::configuration::{BORDER_WIDTH, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::input::parse_tile;
use crate::spatial::symmetry::Symmetry;
use ndarray::{Array2, ArrayView1, Axis, Slice};
use std::fmt;
use std::str::FromStr;

/// Tile identifier as written in the block header
pub type TileId = u64;

/// Square block of pixel bytes with a stable identity
///
/// The identifier never changes. Pixels may be reoriented or stripped of their
/// border, always staying square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    pixels: Array2<u8>,
    border_removed: bool,
}

impl Tile {
    /// Create a tile from a pixel grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or not square
    pub fn new(id: TileId, pixels: Array2<u8>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 {
            return Err(invalid_parameter("pixels", &id, &"tile has no rows"));
        }
        if rows != cols {
            return Err(invalid_parameter(
                "pixels",
                &id,
                &format!("tile is {rows}x{cols}, expected a square"),
            ));
        }

        Ok(Self {
            id,
            pixels,
            border_removed: false,
        })
    }

    /// Create a tile from text rows, one byte per pixel
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in length or do not form a square
    pub fn from_rows<S: AsRef<str>>(id: TileId, rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut bytes = Vec::with_capacity(size * size);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref().as_bytes();
            if row.len() != size {
                return Err(invalid_parameter(
                    "rows",
                    &id,
                    &format!("row {index} has {} pixels, expected {size}", row.len()),
                ));
            }
            bytes.extend_from_slice(row);
        }

        let pixels = Array2::from_shape_vec((size, size), bytes)
            .map_err(|err| invalid_parameter("rows", &id, &err))?;
        Self::new(id, pixels)
    }

    /// Identifier from the block header
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel grid in the current orientation
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Whether [`Tile::remove_border`] has been applied
    pub const fn is_border_removed(&self) -> bool {
        self.border_removed
    }

    /// First row, left to right
    pub fn north_edge(&self) -> ArrayView1<'_, u8> {
        self.pixels.row(0)
    }

    /// Last row, left to right
    pub fn south_edge(&self) -> ArrayView1<'_, u8> {
        self.pixels.row(self.size() - 1)
    }

    /// Last column, top to bottom
    pub fn east_edge(&self) -> ArrayView1<'_, u8> {
        self.pixels.column(self.size() - 1)
    }

    /// First column, top to bottom
    pub fn west_edge(&self) -> ArrayView1<'_, u8> {
        self.pixels.column(0)
    }

    /// Turn the tile a quarter clockwise in place
    ///
    /// Row `i` of the result is column `i` of the original read bottom to top.
    pub fn rotate_right(&mut self) {
        self.pixels = Symmetry::Rotate90.apply(self.pixels.view());
    }

    /// Reverse the row order in place
    pub fn flip_vertical(&mut self) {
        self.pixels = Symmetry::FlipVertical.apply(self.pixels.view());
    }

    /// Copy of this tile viewed under the given orientation
    #[must_use]
    pub fn transformed(&self, symmetry: Symmetry) -> Self {
        Self {
            id: self.id,
            pixels: symmetry.apply(self.pixels.view()),
            border_removed: self.border_removed,
        }
    }

    /// All eight orientations in canonical order
    pub fn orientations(&self) -> impl Iterator<Item = (Symmetry, Self)> + '_ {
        Symmetry::ALL
            .into_iter()
            .map(move |symmetry| (symmetry, self.transformed(symmetry)))
    }

    /// Drop the outermost ring of pixels, shrinking the side by two
    ///
    /// # Errors
    ///
    /// Returns an error if the border was already removed or if nothing would
    /// remain of the tile
    pub fn remove_border(&mut self) -> Result<()> {
        if self.border_removed {
            return Err(AlgorithmError::BorderAlreadyRemoved { id: self.id });
        }

        let size = self.size();
        if size <= 2 * BORDER_WIDTH {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("tile {} has no interior to keep", self.id),
            ));
        }

        let keep = Slice::from(BORDER_WIDTH..size - BORDER_WIDTH);
        let mut interior = self.pixels.view();
        interior.slice_axis_inplace(Axis(0), keep);
        interior.slice_axis_inplace(Axis(1), keep);
        let stripped = interior.to_owned();
        self.pixels = stripped;
        self.border_removed = true;
        Ok(())
    }

    /// Number of cells holding the given pixel byte
    pub fn count_pixels(&self, pixel: u8) -> usize {
        self.pixels.iter().filter(|&&value| value == pixel).count()
    }

    /// Rows rendered as text
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.pixels
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&byte| char::from(byte)).collect())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TILE_HEADER_PREFIX}{}{TILE_HEADER_SUFFIX}", self.id)?;
        for row in self.rows() {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}

impl FromStr for Tile {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tile(s)
    }
}
