//! Stitching constants and runtime configuration defaults

// Atlas layout
/// Virtual blocks per side of the output atlas
pub const ATLAS_SCALE: u32 = 3;

/// Cells per side of a frame's output grid (two parts per virtual block)
pub const GRID_DIM: u32 = ATLAS_SCALE * 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed source texture dimension
pub const MAX_TEXTURE_DIMENSION: u32 = 16_384;

// Output settings
/// Suffix added to stitched output filenames
pub const OUTPUT_SUFFIX: &str = "-3x3";

/// Filename suffix that marks a CTM companion texture in batch mode
pub const CTM_SUFFIX: &str = "_ctm";

/// Suffix added to animated preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

/// Delay between preview animation frames
pub const PREVIEW_FRAME_DELAY_MS: u32 = 100;

/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
