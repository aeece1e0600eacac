//! Part extraction arena for the 20 quadrant parts
//!
//! Cuts the canonical quadrant parts out of the regular and CTM textures for
//! one animation frame. Geometry is identical across frames, so the buffers
//! are allocated once and refilled in place.

use crate::io::error::Result;
use crate::stitch::classifier::{PartCategory, PartIdentity};
use crate::texture::buffer::{self, Region};
use image::RgbaImage;

/// Reusable arena of the 20 extracted part buffers
pub struct PartSet {
    parts: Vec<RgbaImage>,
    part_size: u32,
}

impl PartSet {
    /// Allocate part buffers with the given edge length
    pub fn new(part_size: u32) -> Self {
        let parts = (0..PartIdentity::COUNT)
            .map(|_| RgbaImage::new(part_size, part_size))
            .collect();

        Self { parts, part_size }
    }

    /// Edge length of every part buffer
    pub const fn part_size(&self) -> u32 {
        self.part_size
    }

    /// Borrow the buffer last extracted for the given identity
    pub fn part(&self, identity: PartIdentity) -> Option<&RgbaImage> {
        self.parts.get(identity.index())
    }

    /// Extract all 20 parts for one animation frame
    ///
    /// Regular parts are cut from the regular texture, the other four
    /// categories from the CTM texture. Each source uses its own width as the
    /// per-frame stride, so the two images may differ in size. The CTM
    /// texture's second band of variants starts half its width in.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StitchError::SourceBoundsExceeded`] if any part
    /// rectangle falls outside its source texture (malformed or undersized
    /// input).
    pub fn extract_frame(
        &mut self,
        regular: &RgbaImage,
        ctm: &RgbaImage,
        frame: u32,
    ) -> Result<()> {
        let part_size = self.part_size;
        let single = ctm.width() / 2;

        for identity in PartIdentity::all() {
            let (source, plane, band_x, band_y) = match identity.category {
                PartCategory::Regular => (regular, "regular", 0, 0),
                PartCategory::Edgeless => (ctm, "ctm", 0, 0),
                PartCategory::Vertical => (ctm, "ctm", single, 0),
                PartCategory::Horizontal => (ctm, "ctm", 0, single),
                PartCategory::CornerOnly => (ctm, "ctm", single, single),
            };

            let frame_base = frame * source.width();
            let x = band_x + identity.horizontal.offset(part_size);
            let y = band_y + frame_base + identity.vertical.offset(part_size);

            if let Some(dst) = self.parts.get_mut(identity.index()) {
                buffer::extract_into(source, Region::square(x, y, part_size), plane, dst)?;
            }
        }

        Ok(())
    }
}
