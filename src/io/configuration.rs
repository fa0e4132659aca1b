//! Reference geometry constants and runtime configuration defaults

// Reference deployment: a 3840x2160 picture cut into 16x16 pieces
/// Grid width in tiles
pub const GRID_COLUMNS: usize = 16;
/// Grid height in tiles
pub const GRID_ROWS: usize = 16;

/// Pixel width of the anchor (top-left) tile
pub const ANCHOR_WIDTH: u32 = 240;
/// Pixel height of the anchor (top-left) tile
pub const ANCHOR_HEIGHT: u32 = 135;
/// Pixel height of every other tile in the first column
pub const STANDARD_HEIGHT: u32 = 136;

// Neighbouring tiles share one pixel row/column along their common border
/// Pixels shared between adjacent cells
pub const CELL_OVERLAP: u32 = 1;

/// Maximum per-channel difference accepted by the tolerance policy
pub const COLOR_TOLERANCE: u8 = 25;

// Input settings
/// File extensions picked up when scanning a tile directory
pub const TILE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
/// Placeholder replaced by the tile index in file name templates
pub const TEMPLATE_PLACEHOLDER: &str = "{}";
/// File name template used when writing scrambled pieces
pub const SCRAMBLE_TEMPLATE: &str = "peace-{}.png";

// Output settings
/// Default file name for the assembled picture
pub const DEFAULT_OUTPUT: &str = "assembled.png";

/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
