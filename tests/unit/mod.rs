//! Unit tests mirroring the `src/` module tree

mod analysis;
mod io;

use image::{Rgba, RgbaImage};

/// Gray of the empty dial face
pub const DIAL: Rgba<u8> = Rgba([47, 47, 47, 255]);
/// Outermost needle shade
pub const TIP: Rgba<u8> = Rgba([255, 60, 60, 255]);
/// Middle needle shade
pub const MID: Rgba<u8> = Rgba([220, 45, 45, 255]);
/// Needle shade nearest the pivot
pub const BASE: Rgba<u8> = Rgba([180, 35, 35, 255]);

/// 16x16 dial with a vertical three-shade needle from the center to the top edge
pub fn compass_fixture() -> RgbaImage {
    let mut image = RgbaImage::from_pixel(16, 16, DIAL);
    for y in 0..8 {
        let shade = match y {
            0..=2 => TIP,
            3..=5 => MID,
            _ => BASE,
        };
        image.put_pixel(8, y, shade);
    }
    image
}
