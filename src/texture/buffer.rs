//! Bounds-checked rectangular copies between RGBA pixel buffers
//!
//! All pixel movement in the stitcher goes through these helpers. Pixels are
//! copied verbatim; there is no blending or color processing.

use crate::io::error::{Result, StitchError};
use image::{Rgba, RgbaImage};

/// Rectangular sub-region of a pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    /// Create a square region with the given edge length
    pub const fn square(x: u32, y: u32, size: u32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
        }
    }

    /// Check whether the region lies fully inside a buffer of the given dimensions
    pub const fn fits(self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }

    const fn as_array(self) -> [u32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// Copy a source region into a same-sized destination buffer
///
/// Refills `dst` in place so part buffers can be reused across animation
/// frames instead of reallocated.
///
/// # Errors
///
/// Returns [`StitchError::SourceBoundsExceeded`] if the region falls outside
/// the source buffer, or if the destination dimensions don't match the region.
pub fn extract_into(
    src: &RgbaImage,
    region: Region,
    plane: &'static str,
    dst: &mut RgbaImage,
) -> Result<()> {
    if !region.fits(src.width(), src.height()) {
        return Err(StitchError::SourceBoundsExceeded {
            plane,
            region: region.as_array(),
            bounds: src.dimensions(),
        });
    }

    if dst.width() != region.width || dst.height() != region.height {
        return Err(StitchError::SourceBoundsExceeded {
            plane: "part",
            region: region.as_array(),
            bounds: dst.dimensions(),
        });
    }

    for row in 0..region.height {
        for col in 0..region.width {
            let pixel = src
                .get_pixel_checked(region.x + col, region.y + row)
                .copied()
                .unwrap_or(Rgba([0, 0, 0, 0]));
            dst.put_pixel(col, row, pixel);
        }
    }

    Ok(())
}

/// Copy the whole of `src` into `dst` at the given pixel offset
///
/// # Errors
///
/// Returns [`StitchError::SourceBoundsExceeded`] if `src` does not fit inside
/// `dst` at that offset.
pub fn blit(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) -> Result<()> {
    let region = Region {
        x,
        y,
        width: src.width(),
        height: src.height(),
    };

    if !region.fits(dst.width(), dst.height()) {
        return Err(StitchError::SourceBoundsExceeded {
            plane: "output",
            region: region.as_array(),
            bounds: dst.dimensions(),
        });
    }

    image::imageops::replace(dst, src, i64::from(x), i64::from(y));
    Ok(())
}
