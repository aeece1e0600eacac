//! Atlas compositing across animation frames
//!
//! Assembles the output atlas one frame at a time. With a CTM texture every
//! cell of the 6x6 grid is filled from the part arena through the layout
//! table; without one the frame's full tile is duplicated into a plain 3x3
//! block. Frame i's region sits directly beneath frame i-1's.

use crate::io::configuration::{ATLAS_SCALE, GRID_DIM};
use crate::io::error::Result;
use crate::stitch::classifier::{self, PartIdentity};
use crate::stitch::parts::PartSet;
use crate::texture::buffer::{self, Region};
use crate::texture::geometry::{self, TextureGeometry};
use image::RgbaImage;
use ndarray::Array2;

/// Drives part extraction and compositing for one stitching operation
///
/// Owns the source buffers, the reusable part arena, and the output atlas.
/// Frames are composited one at a time; any failure aborts the whole
/// operation, and no partially composited atlas is handed out.
pub struct Stitcher {
    regular: RgbaImage,
    ctm: Option<RgbaImage>,
    geometry: TextureGeometry,
    parts: Option<PartSet>,
    layout: Array2<PartIdentity>,
    atlas: RgbaImage,
}

impl Stitcher {
    /// Validate the sources and prepare an empty atlas
    ///
    /// # Errors
    ///
    /// Returns [`crate::StitchError::InvalidDimensions`] if either texture
    /// violates the power-of-two preconditions, or
    /// [`crate::StitchError::FrameCountMismatch`] if the two textures imply
    /// different animation frame counts.
    pub fn new(regular: RgbaImage, ctm: Option<RgbaImage>) -> Result<Self> {
        let geo = TextureGeometry::analyze(regular.width(), regular.height())?;

        let parts = match &ctm {
            Some(ctm_img) => {
                let ctm_geo = TextureGeometry::analyze(ctm_img.width(), ctm_img.height())?;
                geometry::ensure_frame_parity(geo, ctm_geo)?;
                Some(PartSet::new(geo.part_size()))
            }
            None => None,
        };

        let atlas = RgbaImage::new(geo.atlas_width(), geo.atlas_height());

        Ok(Self {
            regular,
            ctm,
            geometry: geo,
            parts,
            layout: classifier::layout(),
            atlas,
        })
    }

    /// Geometry of the regular source texture
    pub const fn geometry(&self) -> TextureGeometry {
        self.geometry
    }

    /// Number of animation frames to composite
    pub const fn frame_count(&self) -> u32 {
        self.geometry.frame_count()
    }

    /// Composite one animation frame into the atlas
    ///
    /// With a CTM texture the frame's 20 parts are extracted into the arena,
    /// then every grid cell (x, y) is filled from the layout table at pixel
    /// `(x * part_size, (y + frame * 6) * part_size)`. Without one, the
    /// frame's full tile lands at `(x * width, (y + frame * 3) * width)` for
    /// the nine virtual block positions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StitchError::SourceBoundsExceeded`] if the frame index
    /// or the source geometry puts any copy rectangle out of bounds. The frame
    /// is aborted on the first failed cell.
    pub fn stitch_frame(&mut self, frame: u32) -> Result<()> {
        if let (Some(ctm), Some(parts)) = (&self.ctm, &mut self.parts) {
            parts.extract_frame(&self.regular, ctm, frame)?;

            let part_size = self.geometry.part_size();
            for ((row, col), identity) in self.layout.indexed_iter() {
                let x = col as u32 * part_size;
                let y = (row as u32 + frame * GRID_DIM) * part_size;
                if let Some(part) = parts.part(*identity) {
                    buffer::blit(&mut self.atlas, part, x, y)?;
                }
            }
        } else {
            let width = self.geometry.width();
            let mut tile = RgbaImage::new(width, width);
            buffer::extract_into(
                &self.regular,
                Region::square(0, frame * width, width),
                "regular",
                &mut tile,
            )?;

            for y in 0..ATLAS_SCALE {
                for x in 0..ATLAS_SCALE {
                    buffer::blit(
                        &mut self.atlas,
                        &tile,
                        x * width,
                        (y + frame * ATLAS_SCALE) * width,
                    )?;
                }
            }
        }

        Ok(())
    }

    /// Composite every animation frame in order
    ///
    /// # Errors
    ///
    /// Propagates the first frame failure; see [`Self::stitch_frame`].
    pub fn stitch_all(&mut self) -> Result<()> {
        for frame in 0..self.geometry.frame_count() {
            self.stitch_frame(frame)?;
        }
        Ok(())
    }

    /// Borrow the composited atlas
    pub const fn atlas(&self) -> &RgbaImage {
        &self.atlas
    }

    /// Consume the stitcher and return the finished atlas
    pub fn into_atlas(self) -> RgbaImage {
        self.atlas
    }
}

/// Stitch a regular texture and optional CTM texture into a 3x3 atlas
///
/// Convenience wrapper over [`Stitcher`] for callers that don't need
/// per-frame progress.
///
/// # Errors
///
/// Propagates validation and compositing failures; see [`Stitcher::new`] and
/// [`Stitcher::stitch_frame`].
pub fn stitch(regular: RgbaImage, ctm: Option<RgbaImage>) -> Result<RgbaImage> {
    let mut stitcher = Stitcher::new(regular, ctm)?;
    stitcher.stitch_all()?;
    Ok(stitcher.into_atlas())
}
