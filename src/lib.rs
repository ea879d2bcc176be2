//! Jigsaw tile mosaic assembly and image reconstruction
//!
//! Square pixel tiles are fitted edge to edge by a backtracking search over the
//! eight orientations of every tile. The assembled mosaic is stitched into one
//! picture with tile borders removed, and the picture is scanned for the sea
//! monster pattern to measure how rough the remaining water is.

#![forbid(unsafe_code)]

/// Backtracking assembly, mosaic layout and picture stitching
pub mod algorithm;
/// Pattern templates and roughness measurement over stitched pictures
pub mod analysis;
/// Input parsing, command-line handling, progress display and error handling
pub mod io;
/// Tiles and the orientation group acting on them
pub mod spatial;

pub use algorithm::pipeline::{Report, solve, solve_str};
pub use io::error::{AlgorithmError, Result};
