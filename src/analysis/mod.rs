//! Pattern search over stitched pictures

/// Marker templates, including the sea monster
pub mod pattern;
/// Occurrence counting and roughness measurement
pub mod roughness;
