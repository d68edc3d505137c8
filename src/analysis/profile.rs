//! Distance-to-color profile of the needle around its pivot

use crate::analysis::foreground::ForegroundSet;
use image::{Rgba, RgbaImage};

/// Real-valued rotation center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    /// Horizontal coordinate in pixels
    pub x: f64,
    /// Vertical coordinate in pixels
    pub y: f64,
}

impl Pivot {
    /// Create a pivot at an explicit coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Geometric center of an image
    pub fn image_center(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(f64::from(width) / 2.0, f64::from(height) / 2.0)
    }

    /// Euclidean distance from the center of pixel `(x, y)` to the pivot
    pub fn distance_to_pixel(&self, x: u32, y: u32) -> f64 {
        let dx = f64::from(x) + 0.5 - self.x;
        let dy = f64::from(y) + 0.5 - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One sample of the needle color at a given distance from the pivot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Distance from the pivot in pixels
    pub distance: f64,
    /// Original needle color
    pub color: Rgba<u8>,
}

/// Non-empty needle profile sorted by ascending distance
///
/// Color lookup is a step function: the first sample whose distance is at
/// least the queried one, falling back to the farthest sample past the end.
#[derive(Debug, Clone)]
pub struct RadialProfile {
    pivot: Pivot,
    samples: Vec<ProfileSample>,
}

impl RadialProfile {
    /// Build the profile of a foreground set; `None` when the set is empty
    pub fn from_foreground(foreground: &ForegroundSet, pivot: Pivot) -> Option<Self> {
        let samples = foreground
            .pixels()
            .iter()
            .map(|pixel| ProfileSample {
                distance: pivot.distance_to_pixel(pixel.x, pixel.y),
                color: pixel.color,
            })
            .collect();

        Self::from_samples(pivot, samples)
    }

    /// Build a profile from raw samples; `None` when `samples` is empty
    ///
    /// Samples at equal distance keep their input order.
    pub fn from_samples(pivot: Pivot, mut samples: Vec<ProfileSample>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        samples.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Some(Self { pivot, samples })
    }

    /// Rotation center the distances are measured from
    pub const fn pivot(&self) -> Pivot {
        self.pivot
    }

    /// Samples in ascending distance order
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    /// Distance of the nearest sample
    pub fn min_distance(&self) -> f64 {
        self.samples.first().map_or(0.0, |sample| sample.distance)
    }

    /// Distance of the farthest sample
    pub fn max_distance(&self) -> f64 {
        self.samples.last().map_or(0.0, |sample| sample.distance)
    }

    /// Color of the first sample at or beyond `distance`
    pub fn color_at(&self, distance: f64) -> Rgba<u8> {
        self.samples
            .iter()
            .find(|sample| distance <= sample.distance)
            .or_else(|| self.samples.last())
            .map_or(Rgba([0, 0, 0, 0]), |sample| sample.color)
    }
}
