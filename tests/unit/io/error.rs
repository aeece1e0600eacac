//! Tests for error display formatting and source chaining

#[cfg(test)]
mod tests {

    use ctmstitch::StitchError;
    use ctmstitch::io::error::{invalid_dimensions, invalid_input};
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_out_of_range_coordinate_display() {
        let err = StitchError::OutOfRangeCoordinate { x: 9, y: 0 };
        assert_eq!(
            err.to_string(),
            "Incorrect lookup coordinates: expected between (0,0) and (5,5), got (9,0)"
        );
    }

    #[test]
    fn test_source_bounds_display_names_the_plane() {
        let err = StitchError::SourceBoundsExceeded {
            plane: "ctm",
            region: [16, 0, 8, 8],
            bounds: (16, 16),
        };

        let message = err.to_string();
        assert!(message.contains("ctm texture"));
        assert!(message.contains("8x8 at (16,0)"));
        assert!(message.contains("16x16"));
    }

    #[test]
    fn test_frame_count_mismatch_display() {
        let err = StitchError::FrameCountMismatch {
            regular_frames: 4,
            ctm_frames: 2,
        };
        assert!(err.to_string().contains("(4 vs 2)"));
    }

    #[test]
    fn test_invalid_dimensions_helper() {
        let err = invalid_dimensions(12, 24, &"width and height must be powers of two");
        let message = err.to_string();
        assert!(message.contains("12x24"));
        assert!(message.contains("powers of two"));
    }

    #[test]
    fn test_invalid_input_helper() {
        let err = invalid_input(&"target file must be a PNG image");
        assert_eq!(err.to_string(), "Invalid input: target file must be a PNG image");
    }

    #[test]
    fn test_filesystem_errors_chain_their_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StitchError::FileSystem {
            path: PathBuf::from("textures"),
            operation: "create directory",
            source: io_err,
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StitchError = io_err.into();
        assert!(matches!(err, StitchError::FileSystem { .. }));
    }
}
