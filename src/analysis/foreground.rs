//! Extraction of the foreground pixel set and its classification mask

use crate::analysis::classifier::ForegroundClassifier;
use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// One classified needle pixel with its original color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundPixel {
    /// Column in the source image
    pub x: u32,
    /// Row in the source image
    pub y: u32,
    /// Color in the source image
    pub color: Rgba<u8>,
}

/// Every foreground pixel of a source image, in row-major scan order
///
/// Also keeps the full classification grid of the source so later stages can
/// consult original classifications after pixels have been replaced.
#[derive(Debug, Clone)]
pub struct ForegroundSet {
    pixels: Vec<ForegroundPixel>,
    mask: Array2<bool>,
}

impl ForegroundSet {
    /// Classify every pixel of `image`
    pub fn extract<C>(image: &RgbaImage, classifier: &C) -> Self
    where
        C: ForegroundClassifier + ?Sized,
    {
        let (width, height) = image.dimensions();
        let mut mask = Array2::from_elem((height as usize, width as usize), false);
        let mut pixels = Vec::new();

        // enumerate_pixels walks rows top to bottom, left to right
        for (x, y, &color) in image.enumerate_pixels() {
            if classifier.is_foreground(color) {
                if let Some(cell) = mask.get_mut((y as usize, x as usize)) {
                    *cell = true;
                }
                pixels.push(ForegroundPixel { x, y, color });
            }
        }

        Self { pixels, mask }
    }

    /// Foreground pixels in scan order
    pub fn pixels(&self) -> &[ForegroundPixel] {
        &self.pixels
    }

    /// Number of foreground pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the classifier matched nothing
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Original classification at a signed position; out-of-bounds reads as `false`
    pub fn is_foreground_at(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.mask
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(false)
    }
}
