//! Marker templates searched for in stitched pictures
//!
//! A template is a small rectangle of characters. Cells holding `#` must line
//! up with marker pixels of the picture; every other cell is unconstrained.

use crate::io::configuration::{MARKER_PIXEL, PATTERN_MARKER, SEA_MONSTER};
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;

/// Fixed template of marker cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    height: usize,
    width: usize,
    markers: Vec<(usize, usize)>,
}

impl Pattern {
    /// Build a template from its text rows
    ///
    /// Trailing spaces count towards the width, so a row of `"# "` is two
    /// cells wide.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, rows differ in width or no cell
    /// is a marker
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or_else(|| invalid_parameter("pattern", &"", &"pattern has no rows"))?;

        let mut markers = Vec::new();
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(invalid_parameter(
                    "pattern",
                    &row,
                    &format!("row {row_index} differs from the first row's width {width}"),
                ));
            }
            markers.extend(
                row.chars()
                    .enumerate()
                    .filter(|&(_, cell)| cell == PATTERN_MARKER)
                    .map(|(col_index, _)| (row_index, col_index)),
            );
        }

        if markers.is_empty() {
            return Err(invalid_parameter(
                "pattern",
                &rows.len(),
                &"pattern has no marker cells",
            ));
        }

        Ok(Self {
            height: rows.len(),
            width,
            markers,
        })
    }

    /// The three-row sea monster
    pub fn sea_monster() -> Self {
        Self::from_static(&SEA_MONSTER)
    }

    fn from_static(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |row| row.len());
        let markers = rows
            .iter()
            .enumerate()
            .flat_map(|(row_index, row)| {
                row.char_indices()
                    .filter(|&(_, cell)| cell == PATTERN_MARKER)
                    .map(move |(col_index, _)| (row_index, col_index))
            })
            .collect();
        Self {
            height: rows.len(),
            width,
            markers,
        }
    }

    /// Rows spanned by the template
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the template
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells that must hold a marker pixel
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Marker cell offsets as `(row, col)` from the template's top-left
    pub fn markers(&self) -> &[(usize, usize)] {
        &self.markers
    }

    /// Whether the template placed with its top-left at `(row, col)` matches
    ///
    /// Placements reaching past the picture edge never match.
    pub fn matches_at(&self, pixels: &Array2<u8>, row: usize, col: usize) -> bool {
        self.markers.iter().all(|&(dr, dc)| {
            pixels.get((row + dr, col + dc)).copied() == Some(MARKER_PIXEL)
        })
    }

    /// Top-left positions of every match, row-major
    pub fn positions(&self, pixels: &Array2<u8>) -> Vec<(usize, usize)> {
        let (rows, cols) = pixels.dim();
        if self.height > rows || self.width > cols {
            return Vec::new();
        }

        let mut found = Vec::new();
        for row in 0..=rows - self.height {
            for col in 0..=cols - self.width {
                if self.matches_at(pixels, row, col) {
                    found.push((row, col));
                }
            }
        }
        found
    }
}
