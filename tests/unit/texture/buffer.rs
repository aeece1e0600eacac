//! Tests for bounds-checked region extraction and blitting

#[cfg(test)]
mod tests {

    use ctmstitch::StitchError;
    use ctmstitch::texture::buffer::{Region, blit, extract_into};
    use image::{Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_region_fits_within_bounds() {
        assert!(Region::square(0, 0, 8).fits(8, 8));
        assert!(Region::square(8, 8, 8).fits(16, 16));

        assert!(!Region::square(9, 0, 8).fits(16, 16));
        assert!(!Region::square(0, 16, 1).fits(16, 16));
    }

    #[test]
    fn test_region_fits_does_not_overflow() {
        let region = Region::square(u32::MAX, u32::MAX, u32::MAX);
        assert!(!region.fits(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_extract_copies_the_requested_rectangle() {
        let src = gradient(16, 16);
        let mut dst = RgbaImage::new(4, 4);

        assert!(extract_into(&src, Region::square(8, 4, 4), "regular", &mut dst).is_ok());

        assert_eq!(
            dst.get_pixel_checked(0, 0).copied(),
            Some(Rgba([8, 4, 0, 255]))
        );
        assert_eq!(
            dst.get_pixel_checked(3, 3).copied(),
            Some(Rgba([11, 7, 0, 255]))
        );
    }

    #[test]
    fn test_extract_rejects_out_of_bounds_region() {
        let src = gradient(16, 16);
        let mut dst = RgbaImage::new(8, 8);

        match extract_into(&src, Region::square(12, 0, 8), "ctm", &mut dst) {
            Err(StitchError::SourceBoundsExceeded {
                plane,
                region,
                bounds,
            }) => {
                assert_eq!(plane, "ctm");
                assert_eq!(region, [12, 0, 8, 8]);
                assert_eq!(bounds, (16, 16));
            }
            Ok(()) => unreachable!("out-of-bounds region must fail"),
            Err(e) => unreachable!("unexpected error kind: {e}"),
        }
    }

    #[test]
    fn test_extract_rejects_mismatched_destination() {
        let src = gradient(16, 16);
        let mut dst = RgbaImage::new(8, 8);

        let result = extract_into(&src, Region::square(0, 0, 4), "regular", &mut dst);
        assert!(matches!(
            result,
            Err(StitchError::SourceBoundsExceeded { plane: "part", .. })
        ));
    }

    #[test]
    fn test_blit_places_source_at_offset() {
        let mut dst = RgbaImage::new(16, 16);
        let src = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));

        assert!(blit(&mut dst, &src, 8, 8).is_ok());

        assert_eq!(
            dst.get_pixel_checked(8, 8).copied(),
            Some(Rgba([9, 9, 9, 255]))
        );
        assert_eq!(
            dst.get_pixel_checked(7, 8).copied(),
            Some(Rgba([0, 0, 0, 0]))
        );
        assert_eq!(
            dst.get_pixel_checked(11, 11).copied(),
            Some(Rgba([9, 9, 9, 255]))
        );
    }

    #[test]
    fn test_blit_rejects_overhanging_source() {
        let mut dst = RgbaImage::new(16, 16);
        let src = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));

        assert!(matches!(
            blit(&mut dst, &src, 14, 0),
            Err(StitchError::SourceBoundsExceeded {
                plane: "output",
                ..
            })
        ));
    }
}
