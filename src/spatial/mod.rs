//! Tiles and their orientations
//!
//! This module contains:
//! - The square pixel tile with its edge fingerprints
//! - The eight-element symmetry group acting on tiles

/// Orientation group of the square
pub mod symmetry;
/// Square pixel tiles
pub mod tile;

pub use symmetry::Symmetry;
pub use tile::{Tile, TileId};
