//! Tests for foreground pixel extraction and the classification mask

#[cfg(test)]
mod tests {
    use crate::{BASE, DIAL, TIP, compass_fixture};
    use image::RgbaImage;
    use needleframe::analysis::classifier::RedNeedleClassifier;
    use needleframe::analysis::foreground::{ForegroundPixel, ForegroundSet};

    // Tests every needle pixel is found in row-major order with its color
    #[test]
    fn test_extract_scan_order() {
        let set = ForegroundSet::extract(&compass_fixture(), &RedNeedleClassifier);

        assert_eq!(set.len(), 8);
        assert!(!set.is_empty());
        assert_eq!(
            set.pixels().first(),
            Some(&ForegroundPixel {
                x: 8,
                y: 0,
                color: TIP
            })
        );
        assert_eq!(
            set.pixels().last(),
            Some(&ForegroundPixel {
                x: 8,
                y: 7,
                color: BASE
            })
        );
        assert!(set.pixels().windows(2).all(|w| w[0].y < w[1].y));
    }

    // Tests the mask reports original classifications and treats outside as background
    #[test]
    fn test_mask_lookup() {
        let set = ForegroundSet::extract(&compass_fixture(), &RedNeedleClassifier);

        assert!(set.is_foreground_at(8, 3));
        assert!(!set.is_foreground_at(7, 3));
        assert!(!set.is_foreground_at(8, 8));
        assert!(!set.is_foreground_at(-1, 0));
        assert!(!set.is_foreground_at(8, -1));
        assert!(!set.is_foreground_at(16, 0));
        assert!(!set.is_foreground_at(0, 16));
    }

    // Tests an image without needle colors yields an empty set
    #[test]
    fn test_extract_empty() {
        let image = RgbaImage::from_pixel(16, 16, DIAL);
        let set = ForegroundSet::extract(&image, &RedNeedleClassifier);

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.is_foreground_at(8, 8));
    }

    // Tests a custom closure classifier drives extraction
    #[test]
    fn test_extract_with_closure() {
        let everything_opaque = |pixel: image::Rgba<u8>| pixel.0[3] > 0;
        let mut image = RgbaImage::from_pixel(4, 4, DIAL);
        image.put_pixel(0, 0, image::Rgba([0, 0, 0, 0]));

        let set = ForegroundSet::extract(&image, &everything_opaque);

        assert_eq!(set.len(), 15);
        assert!(!set.is_foreground_at(0, 0));
        assert!(set.is_foreground_at(3, 3));
    }
}
