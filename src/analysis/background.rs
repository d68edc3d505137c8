//! Nearest-sample inpainting of the dial behind the needle
//!
//! Each removed needle pixel takes the color of its first usable neighbor,
//! orthogonal neighbors before diagonal ones. Neighbor eligibility is judged on
//! the original classification, never on already reconstructed output, so one
//! pass cannot spread a fill across adjacent needle pixels.
//!
//! Pixels with no usable neighbor receive a single fallback color.

use crate::analysis::foreground::ForegroundSet;
use crate::io::configuration::FALLBACK_BACKGROUND;
use image::{Rgba, RgbaImage};

/// Neighbor offsets in priority order: horizontal, vertical, then diagonals
pub const NEIGHBOR_ORDER: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Return a copy of `source` with every foreground pixel replaced by an inferred fill
pub fn reconstruct_background(source: &RgbaImage, foreground: &ForegroundSet) -> RgbaImage {
    let mut background = source.clone();

    for pixel in foreground.pixels() {
        let fill = infer_fill(source, foreground, i64::from(pixel.x), i64::from(pixel.y));
        background.put_pixel(pixel.x, pixel.y, fill);
    }

    background
}

/// Color of the first in-bounds, opaque, non-foreground neighbor of `(x, y)`
pub fn infer_fill(source: &RgbaImage, foreground: &ForegroundSet, x: i64, y: i64) -> Rgba<u8> {
    NEIGHBOR_ORDER
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| !foreground.is_foreground_at(nx, ny))
        .find_map(|(nx, ny)| {
            let nx = u32::try_from(nx).ok()?;
            let ny = u32::try_from(ny).ok()?;
            source
                .get_pixel_checked(nx, ny)
                .copied()
                .filter(|neighbor| neighbor.0[3] > 0)
        })
        .unwrap_or(Rgba(FALLBACK_BACKGROUND))
}
