//! Per-pixel color predicates separating the needle from the dial
//!
//! Any closure over `Rgba<u8>` implements both traits.

use crate::io::configuration::{
    DIAL_MAX_LUMA, DIAL_MIN_LUMA, NEEDLE_MAX_BLUE, NEEDLE_MAX_GREEN, NEEDLE_MIN_RED,
    NEEDLE_RED_DOMINANCE,
};
use image::Rgba;

/// Decides whether a pixel belongs to the rotating element
pub trait ForegroundClassifier {
    /// Returns true iff the pixel is part of the rotating element
    fn is_foreground(&self, pixel: Rgba<u8>) -> bool;
}

/// Decides whether a stroke may overwrite an existing frame pixel
pub trait PaintPredicate {
    /// Returns true iff the pixel may be painted over
    fn is_paintable(&self, pixel: Rgba<u8>) -> bool;
}

impl<F> ForegroundClassifier for F
where
    F: Fn(Rgba<u8>) -> bool,
{
    fn is_foreground(&self, pixel: Rgba<u8>) -> bool {
        self(pixel)
    }
}

impl<F> PaintPredicate for F
where
    F: Fn(Rgba<u8>) -> bool,
{
    fn is_paintable(&self, pixel: Rgba<u8>) -> bool {
        self(pixel)
    }
}

/// Narrow saturated-red band used by the compass needle
///
/// Copper and brown rim colors are bright in red too, so the test also
/// requires low green/blue and a red channel more than double both.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedNeedleClassifier;

impl ForegroundClassifier for RedNeedleClassifier {
    fn is_foreground(&self, pixel: Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            return false;
        }

        let red = u16::from(r);
        r > NEEDLE_MIN_RED
            && g <= NEEDLE_MAX_GREEN
            && b <= NEEDLE_MAX_BLUE
            && red > u16::from(g) * NEEDLE_RED_DOMINANCE
            && red > u16::from(b) * NEEDLE_RED_DOMINANCE
    }
}

/// Transparent pixels and the gray dial face are paintable, everything else is decoration
#[derive(Debug, Clone, Copy, Default)]
pub struct DialAreaPredicate;

impl PaintPredicate for DialAreaPredicate {
    fn is_paintable(&self, pixel: Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            return true;
        }

        r == g && g == b && (DIAL_MIN_LUMA..=DIAL_MAX_LUMA).contains(&r)
    }
}
