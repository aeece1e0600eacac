//! Animated GIF preview of stitched atlas frames

use crate::io::configuration::{ATLAS_SCALE, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, StitchError};
use crate::io::image::create_parent_dir;
use crate::texture::buffer::{self, Region};
use crate::texture::geometry::TextureGeometry;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Export the atlas's per-frame 3x3 regions as an animated GIF
///
/// Each animation frame of the source becomes one GIF frame showing its
/// stitched 3x3 region. Delays below the viewer-supported minimum are clamped.
/// Single-frame textures produce a single-frame GIF.
///
/// # Errors
///
/// Returns an error if:
/// - The atlas is smaller than the geometry implies
/// - The output file cannot be created
/// - GIF encoding fails
pub fn export_preview(
    atlas: &RgbaImage,
    geometry: TextureGeometry,
    output_path: &Path,
    frame_delay_ms: u32,
) -> Result<()> {
    let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let region_width = geometry.atlas_width();
    let region_height = geometry.width() * ATLAS_SCALE;

    let mut frames = Vec::with_capacity(geometry.frame_count() as usize);
    for frame in 0..geometry.frame_count() {
        let region = Region {
            x: 0,
            y: frame * region_height,
            width: region_width,
            height: region_height,
        };

        let mut frame_image = RgbaImage::new(region_width, region_height);
        buffer::extract_into(atlas, region, "atlas", &mut frame_image)?;

        frames.push(Frame::from_parts(
            frame_image,
            0,
            0,
            Delay::from_numer_denom_ms(effective_delay_ms, 1),
        ));
    }

    create_parent_dir(output_path)?;

    let file = std::fs::File::create(output_path).map_err(|e| StitchError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
