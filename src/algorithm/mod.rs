/// Backtracking search placing tiles into a square grid
pub mod assembler;
/// Bitset of placed tiles for the search
pub mod bitset;
/// Assembled grid of oriented tiles and its corner checksum
pub mod mosaic;
/// End-to-end run producing the checksum and roughness
pub mod pipeline;
/// Border stripping and picture stitching
pub mod stitcher;
