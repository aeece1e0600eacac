//! Part classification, extraction, and atlas compositing
//!
//! The stitching core: a pure coordinate-to-part classification over the 6x6
//! output grid, an arena of 20 extracted quadrant parts, and the compositor
//! that assembles the output atlas frame by frame.

/// Coordinate-to-part classification for the 6x6 output grid
pub mod classifier;
/// Atlas compositing across animation frames
pub mod compositor;
/// Part extraction arena for the 20 quadrant parts
pub mod parts;

pub use compositor::{Stitcher, stitch};
