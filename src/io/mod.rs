//! Input/output operations, orchestration, and error handling
//!
//! Everything outside the stitching core lives here: argument parsing, the
//! interactive prompt fallback, PNG decode/encode, the GIF preview exporter,
//! progress display, and the error types shared across the crate.

/// Command-line interface and batch orchestration
pub mod cli;
/// Stitching constants and runtime configuration defaults
pub mod configuration;
/// Error types for stitching operations
pub mod error;
/// PNG decode and atlas export
pub mod image;
/// Interactive prompt session for selecting input textures
pub mod interactive;
/// Animated GIF preview of stitched atlas frames
pub mod preview;
/// Multi-file progress tracking
pub mod progress;
