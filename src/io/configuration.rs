//! Pixel alphabet, input format markers and pattern constants

/// Pixel byte for a set cell; the only byte pattern markers match against
pub const MARKER_PIXEL: u8 = b'#';
/// Pixel byte for an empty cell
pub const BLANK_PIXEL: u8 = b'.';

/// Text preceding the tile identifier in a block header
pub const TILE_HEADER_PREFIX: &str = "Tile ";
/// Text terminating a block header
pub const TILE_HEADER_SUFFIX: char = ':';

/// Identifier given to the stitched picture
pub const PICTURE_ID: u64 = 0;

/// Width of the stripped border on each side of a tile
pub const BORDER_WIDTH: usize = 1;

/// Template character marking a cell that must hold a marker pixel
pub const PATTERN_MARKER: char = '#';

// Non-marker characters are unconstrained, trailing spaces are significant width
/// Sea monster searched for in the stitched picture
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

/// Number of marker cells in [`SEA_MONSTER`]
pub const SEA_MONSTER_MARKER_CELLS: usize = 15;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Interval between spinner redraws in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;
/// Backtracks between refreshes of the progress message
pub const BACKTRACK_REPORT_INTERVAL: u64 = 1024;
