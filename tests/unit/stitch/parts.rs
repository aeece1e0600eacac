//! Tests for part extraction offsets, arena reuse, and bounds checking

#[cfg(test)]
mod tests {

    use ctmstitch::StitchError;
    use ctmstitch::stitch::classifier::{
        HorizontalHalf, PartCategory, PartIdentity, VerticalHalf,
    };
    use ctmstitch::stitch::parts::PartSet;
    use image::{Rgba, RgbaImage};

    fn block_colored(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x / 8) as u8 * 16, (y / 8) as u8 * 16, 0, 255])
        })
    }

    const fn identity(
        category: PartCategory,
        vertical: VerticalHalf,
        horizontal: HorizontalHalf,
    ) -> PartIdentity {
        PartIdentity {
            category,
            vertical,
            horizontal,
        }
    }

    #[test]
    fn test_extracted_parts_carry_their_source_blocks() {
        let regular = block_colored(16, 16);
        let ctm = block_colored(32, 32);

        let mut parts = PartSet::new(8);
        assert!(parts.extract_frame(&regular, &ctm, 0).is_ok());

        // (identity, expected top-left source pixel of the part)
        let expectations = [
            (
                identity(
                    PartCategory::Regular,
                    VerticalHalf::Top,
                    HorizontalHalf::Left,
                ),
                Rgba([0, 0, 0, 255]),
            ),
            (
                identity(
                    PartCategory::Regular,
                    VerticalHalf::Bottom,
                    HorizontalHalf::Right,
                ),
                Rgba([16, 16, 0, 255]),
            ),
            (
                identity(
                    PartCategory::Edgeless,
                    VerticalHalf::Top,
                    HorizontalHalf::Left,
                ),
                Rgba([0, 0, 0, 255]),
            ),
            (
                identity(
                    PartCategory::Vertical,
                    VerticalHalf::Top,
                    HorizontalHalf::Left,
                ),
                Rgba([32, 0, 0, 255]),
            ),
            (
                identity(
                    PartCategory::Horizontal,
                    VerticalHalf::Bottom,
                    HorizontalHalf::Left,
                ),
                Rgba([0, 48, 0, 255]),
            ),
            (
                identity(
                    PartCategory::CornerOnly,
                    VerticalHalf::Bottom,
                    HorizontalHalf::Right,
                ),
                Rgba([48, 48, 0, 255]),
            ),
        ];

        for (id, expected) in expectations {
            let part = parts.part(id);
            let top_left = part.and_then(|p| p.get_pixel_checked(0, 0)).copied();
            assert_eq!(top_left, Some(expected), "{id:?}");
        }
    }

    #[test]
    fn test_animated_extraction_uses_per_source_strides() {
        // Two frames: regular stride 16, CTM stride 32
        let regular = block_colored(16, 32);
        let ctm = block_colored(32, 64);

        let mut parts = PartSet::new(8);
        assert!(parts.extract_frame(&regular, &ctm, 1).is_ok());

        let regular_part = identity(
            PartCategory::Regular,
            VerticalHalf::Top,
            HorizontalHalf::Left,
        );
        let top_left = parts
            .part(regular_part)
            .and_then(|p| p.get_pixel_checked(0, 0))
            .copied();
        // Frame 1 of the regular texture starts at y=16
        assert_eq!(top_left, Some(Rgba([0, 32, 0, 255])));

        let edgeless_part = identity(
            PartCategory::Edgeless,
            VerticalHalf::Top,
            HorizontalHalf::Left,
        );
        let top_left = parts
            .part(edgeless_part)
            .and_then(|p| p.get_pixel_checked(0, 0))
            .copied();
        // Frame 1 of the CTM texture starts at y=32
        assert_eq!(top_left, Some(Rgba([0, 64, 0, 255])));
    }

    #[test]
    fn test_re_extraction_is_idempotent() {
        let regular = block_colored(16, 16);
        let ctm = block_colored(32, 32);

        let mut parts = PartSet::new(8);
        assert!(parts.extract_frame(&regular, &ctm, 0).is_ok());

        let first: Vec<Vec<u8>> = PartIdentity::all()
            .filter_map(|id| parts.part(id).map(|p| p.as_raw().clone()))
            .collect();

        assert!(parts.extract_frame(&regular, &ctm, 0).is_ok());

        let second: Vec<Vec<u8>> = PartIdentity::all()
            .filter_map(|id| parts.part(id).map(|p| p.as_raw().clone()))
            .collect();

        assert_eq!(first.len(), PartIdentity::COUNT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_undersized_ctm_exceeds_source_bounds() {
        // Part size 8 but the CTM is only 8x8: the vertical band at x=4
        // already runs past the right edge
        let regular = block_colored(16, 16);
        let ctm = block_colored(8, 8);

        let mut parts = PartSet::new(8);
        match parts.extract_frame(&regular, &ctm, 0) {
            Err(StitchError::SourceBoundsExceeded { plane, .. }) => {
                assert_eq!(plane, "ctm");
            }
            Ok(()) => unreachable!("undersized ctm must fail extraction"),
            Err(e) => unreachable!("unexpected error kind: {e}"),
        }
    }

    #[test]
    fn test_out_of_range_frame_exceeds_source_bounds() {
        let regular = block_colored(16, 16);
        let ctm = block_colored(32, 32);

        let mut parts = PartSet::new(8);
        assert!(parts.extract_frame(&regular, &ctm, 1).is_err());
    }

    #[test]
    fn test_part_size_is_preserved() {
        let parts = PartSet::new(8);
        assert_eq!(parts.part_size(), 8);

        let first = PartIdentity::all().next().map(|id| parts.part(id));
        if let Some(Some(part)) = first {
            assert_eq!(part.dimensions(), (8, 8));
        } else {
            unreachable!("arena must expose all identities");
        }
    }
}
