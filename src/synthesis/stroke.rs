//! Rotated needle stroke synthesis
//!
//! The needle is redrawn as a two-pixel wide line from the nearest to the
//! farthest profile distance. The walk advances in sub-pixel increments so
//! truncation to pixel coordinates never skips a ring, and every step paints
//! the profile color for its distance at two positions offset half a pixel to
//! either side of the line.

use crate::analysis::classifier::PaintPredicate;
use crate::analysis::profile::RadialProfile;
use crate::io::configuration::{STROKE_OFFSETS, STROKE_STEP};
use crate::io::error::{Result, invalid_parameter};
use crate::synthesis::direction::StrokeAxes;
use image::RgbaImage;

/// Composites rotated needle strokes onto a fixed background
pub struct StrokeSynthesizer<'a, P: ?Sized> {
    background: &'a RgbaImage,
    profile: &'a RadialProfile,
    paintable: &'a P,
    step: f64,
}

impl<'a, P: PaintPredicate + ?Sized> StrokeSynthesizer<'a, P> {
    /// Create a synthesizer using the default walk increment
    pub const fn new(
        background: &'a RgbaImage,
        profile: &'a RadialProfile,
        paintable: &'a P,
    ) -> Self {
        Self {
            background,
            profile,
            paintable,
            step: STROKE_STEP,
        }
    }

    /// Override the walk increment
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not strictly between 0 and 1 pixel
    pub fn with_step(mut self, step: f64) -> Result<Self> {
        if !(step > 0.0 && step < 1.0) {
            return Err(invalid_parameter(
                "step",
                &step,
                &"must be greater than 0 and smaller than one pixel",
            ));
        }
        self.step = step;
        Ok(self)
    }

    /// Walk increment in pixels
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Produce one frame with the needle pointing at `angle` degrees
    pub fn synthesize(&self, angle: f64) -> RgbaImage {
        let mut frame = self.background.clone();
        let axes = StrokeAxes::from_degrees(angle);
        let pivot = self.profile.pivot();
        let max_distance = self.profile.max_distance();
        let mut distance = self.profile.min_distance();

        while distance <= max_distance {
            let color = self.profile.color_at(distance);
            let center = axes.along((pivot.x, pivot.y), distance);

            for offset in STROKE_OFFSETS {
                let (px, py) = axes.across(center, offset);
                let Some((x, y)) = pixel_coordinates(&frame, px, py) else {
                    continue;
                };
                let paint = frame
                    .get_pixel_checked(x, y)
                    .is_some_and(|&existing| self.paintable.is_paintable(existing));
                if paint {
                    frame.put_pixel(x, y, color);
                }
            }

            distance += self.step;
        }

        frame
    }
}

/// Truncate a point toward zero; `None` when the pixel lies outside `frame`
fn pixel_coordinates(frame: &RgbaImage, px: f64, py: f64) -> Option<(u32, u32)> {
    let x = u32::try_from(px.trunc() as i64).ok()?;
    let y = u32::try_from(py.trunc() as i64).ok()?;
    (x < frame.width() && y < frame.height()).then_some((x, y))
}
