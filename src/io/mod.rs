/// Command-line argument parsing and file processing
pub mod cli;
/// Pixel alphabet and pattern constants
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Tile block parsing and file loading
pub mod input;
/// Search progress display
pub mod progress;
