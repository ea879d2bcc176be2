//! The eight rigid orientations of a square tile
//!
//! Orientations are enumerated in the order visited by stepping a tile through
//! rotate, rotate, rotate, flip, rotate, rotate, rotate starting from its
//! identity orientation. The assembler and the pattern search both walk this
//! order and stop at the first success, so it is defined once here.

use crate::spatial::tile::Tile;
use ndarray::{Array2, ArrayView2, Axis};
use std::fmt;

/// One element of the dihedral group of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Pixels unchanged
    Identity,
    /// Quarter turn clockwise
    Rotate90,
    /// Half turn
    Rotate180,
    /// Quarter turn counter-clockwise
    Rotate270,
    /// Reflection across the main diagonal
    Transpose,
    /// Reflection across the vertical axis, reversing every row
    FlipHorizontal,
    /// Reflection across the anti-diagonal
    AntiTranspose,
    /// Reflection across the horizontal axis, reversing row order
    FlipVertical,
}

/// In-place operation moving a tile to the next orientation of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// [`Tile::rotate_right`]
    Rotate,
    /// [`Tile::flip_vertical`]
    Flip,
}

impl Step {
    /// Apply this step to a tile in place
    pub fn apply_to(self, tile: &mut Tile) {
        match self {
            Self::Rotate => tile.rotate_right(),
            Self::Flip => tile.flip_vertical(),
        }
    }
}

impl Symmetry {
    /// All orientations in canonical search order
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Transpose,
        Self::FlipHorizontal,
        Self::AntiTranspose,
        Self::FlipVertical,
    ];

    /// Position of this orientation in [`Symmetry::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Identity => 0,
            Self::Rotate90 => 1,
            Self::Rotate180 => 2,
            Self::Rotate270 => 3,
            Self::Transpose => 4,
            Self::FlipHorizontal => 5,
            Self::AntiTranspose => 6,
            Self::FlipVertical => 7,
        }
    }

    /// Following orientation in canonical order, wrapping back to identity
    pub const fn next(self) -> Self {
        match self {
            Self::Identity => Self::Rotate90,
            Self::Rotate90 => Self::Rotate180,
            Self::Rotate180 => Self::Rotate270,
            Self::Rotate270 => Self::Transpose,
            Self::Transpose => Self::FlipHorizontal,
            Self::FlipHorizontal => Self::AntiTranspose,
            Self::AntiTranspose => Self::FlipVertical,
            Self::FlipVertical => Self::Identity,
        }
    }

    /// Operation taking a tile in this orientation to [`Symmetry::next`]
    pub const fn step(self) -> Step {
        match self {
            Self::Rotate270 | Self::FlipVertical => Step::Flip,
            _ => Step::Rotate,
        }
    }

    /// Whether this orientation mirrors the tile
    pub const fn is_reflection(self) -> bool {
        self.index() >= 4
    }

    /// Map identity-oriented pixels into this orientation
    ///
    /// Works on any rectangular view; the result is always in standard layout.
    pub fn apply(self, pixels: ArrayView2<'_, u8>) -> Array2<u8> {
        let mut view = pixels;
        match self {
            Self::Identity => {}
            Self::Rotate90 => {
                view.swap_axes(0, 1);
                view.invert_axis(Axis(1));
            }
            Self::Rotate180 => {
                view.invert_axis(Axis(0));
                view.invert_axis(Axis(1));
            }
            Self::Rotate270 => {
                view.swap_axes(0, 1);
                view.invert_axis(Axis(0));
            }
            Self::Transpose => view.swap_axes(0, 1),
            Self::FlipHorizontal => view.invert_axis(Axis(1)),
            Self::AntiTranspose => {
                view.swap_axes(0, 1);
                view.invert_axis(Axis(0));
                view.invert_axis(Axis(1));
            }
            Self::FlipVertical => view.invert_axis(Axis(0)),
        }
        view.as_standard_layout().into_owned()
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::Rotate90 => "rotate 90",
            Self::Rotate180 => "rotate 180",
            Self::Rotate270 => "rotate 270",
            Self::Transpose => "transpose",
            Self::FlipHorizontal => "flip horizontal",
            Self::AntiTranspose => "anti-transpose",
            Self::FlipVertical => "flip vertical",
        };
        f.write_str(name)
    }
}
