//! Error types for stitching operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// Failed to load a source texture from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a stitched atlas or preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source texture dimensions violate stitching preconditions
    ///
    /// Width and height must be powers of two, and height must be an
    /// integer multiple of width for animated textures.
    InvalidDimensions {
        /// Width of the offending texture
        width: u32,
        /// Height of the offending texture
        height: u32,
        /// Explanation of the violated precondition
        reason: String,
    },

    /// Regular and CTM textures imply different animation frame counts
    FrameCountMismatch {
        /// Frame count derived from the regular texture
        regular_frames: u32,
        /// Frame count derived from the CTM texture
        ctm_frames: u32,
    },

    /// Part classification was queried outside the 6x6 output grid
    OutOfRangeCoordinate {
        /// Queried cell column
        x: u32,
        /// Queried cell row
        y: u32,
    },

    /// An extraction rectangle falls outside a source buffer
    SourceBoundsExceeded {
        /// Name of the source plane the rectangle was read from
        plane: &'static str,
        /// Requested rectangle as (x, y, width, height)
        region: [u32; 4],
        /// Dimensions of the source buffer
        bounds: (u32, u32),
    },

    /// Command-line or interactive input failed validation
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load texture '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid texture dimensions {width}x{height}: {reason}")
            }
            Self::FrameCountMismatch {
                regular_frames,
                ctm_frames,
            } => {
                write!(
                    f,
                    "Regular and CTM textures have differing frame counts ({regular_frames} vs {ctm_frames})"
                )
            }
            Self::OutOfRangeCoordinate { x, y } => {
                write!(
                    f,
                    "Incorrect lookup coordinates: expected between (0,0) and (5,5), got ({x},{y})"
                )
            }
            Self::SourceBoundsExceeded {
                plane,
                region,
                bounds,
            } => {
                write!(
                    f,
                    "Extraction rectangle {}x{} at ({},{}) exceeds {plane} texture bounds {}x{}",
                    region[2], region[3], region[0], region[1], bounds.0, bounds.1
                )
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> StitchError {
    StitchError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(width: u32, height: u32, reason: &impl ToString) -> StitchError {
    StitchError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    }
}
