//! PNG decode and atlas export

use crate::io::error::{Result, StitchError};
use image::RgbaImage;
use std::path::Path;

/// Load a source texture and convert it to RGBA8
///
/// # Errors
///
/// Returns [`StitchError::ImageLoad`] if the file cannot be opened or decoded.
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| StitchError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(img.to_rgba8())
}

/// Save a stitched atlas as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the given path
pub fn export_atlas(atlas: &RgbaImage, output_path: &Path) -> Result<()> {
    create_parent_dir(output_path)?;

    atlas
        .save(output_path)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

pub(crate) fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}
