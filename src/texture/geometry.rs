//! Texture dimension validation and animation frame derivation

use crate::io::configuration::{ATLAS_SCALE, MAX_TEXTURE_DIMENSION};
use crate::io::error::{Result, StitchError, invalid_dimensions};
use num_traits::PrimInt;

/// Check whether a value is a positive power of two
pub fn is_power_of_two<T: PrimInt>(value: T) -> bool {
    value > T::zero() && value & (value - T::one()) == T::zero()
}

/// Validated dimensions of one source texture
///
/// Width and height are powers of two. A height larger than the width encodes
/// animation frames stacked vertically, one frame per width-sized band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureGeometry {
    width: u32,
    height: u32,
    frame_count: u32,
}

impl TextureGeometry {
    /// Validate raw dimensions and derive the animation frame count
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::InvalidDimensions`] if either dimension is not a
    /// power of two, the width cannot be split into quadrants, a dimension
    /// exceeds the safety limit, or the height is not an integer multiple of
    /// the width.
    pub fn analyze(width: u32, height: u32) -> Result<Self> {
        if !is_power_of_two(width) || !is_power_of_two(height) {
            return Err(invalid_dimensions(
                width,
                height,
                &"width and height must be powers of two",
            ));
        }

        if width < 2 {
            return Err(invalid_dimensions(
                width,
                height,
                &"width must be at least 2 to split into quadrant parts",
            ));
        }

        if width > MAX_TEXTURE_DIMENSION || height > MAX_TEXTURE_DIMENSION {
            return Err(invalid_dimensions(
                width,
                height,
                &format!("dimensions exceed the {MAX_TEXTURE_DIMENSION} pixel limit"),
            ));
        }

        if height % width != 0 {
            return Err(invalid_dimensions(
                width,
                height,
                &"height must be an integer multiple of width for animated textures",
            ));
        }

        Ok(Self {
            width,
            height,
            frame_count: height / width,
        })
    }

    /// Width of the texture in pixels
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Height of the texture in pixels
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Number of vertically stacked animation frames
    pub const fn frame_count(self) -> u32 {
        self.frame_count
    }

    /// Whether the texture encodes more than one animation frame
    pub const fn is_animated(self) -> bool {
        self.frame_count > 1
    }

    /// Edge length of one extracted part (half the frame width)
    pub const fn part_size(self) -> u32 {
        self.width / 2
    }

    /// Width of the stitched output atlas
    pub const fn atlas_width(self) -> u32 {
        self.width * ATLAS_SCALE
    }

    /// Height of the stitched output atlas
    pub const fn atlas_height(self) -> u32 {
        self.height * ATLAS_SCALE
    }
}

/// Ensure regular and CTM textures agree on the animation frame count
///
/// Inconsistent inputs are rejected outright rather than truncated to the
/// shorter animation.
///
/// # Errors
///
/// Returns [`StitchError::FrameCountMismatch`] when the derived counts differ.
pub const fn ensure_frame_parity(regular: TextureGeometry, ctm: TextureGeometry) -> Result<()> {
    if regular.frame_count == ctm.frame_count {
        Ok(())
    } else {
        Err(StitchError::FrameCountMismatch {
            regular_frames: regular.frame_count,
            ctm_frames: ctm.frame_count,
        })
    }
}
