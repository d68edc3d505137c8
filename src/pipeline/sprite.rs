//! Per-sprite decomposition into a static dial and a radial needle profile

use crate::analysis::background::reconstruct_background;
use crate::analysis::classifier::{ForegroundClassifier, PaintPredicate};
use crate::analysis::foreground::ForegroundSet;
use crate::analysis::profile::{Pivot, RadialProfile};
use crate::synthesis::StrokeSynthesizer;
use image::RgbaImage;

/// Everything derived once from a source sprite before frames are generated
#[derive(Debug, Clone)]
pub struct SpriteDecomposition {
    /// Source with the needle removed
    pub background: RgbaImage,
    /// Classified needle pixels of the source
    pub foreground: ForegroundSet,
    /// Needle colors by distance from the image center
    pub profile: RadialProfile,
}

impl SpriteDecomposition {
    /// Classify, inpaint and profile `source`
    ///
    /// Returns `None` when the classifier finds no foreground pixels.
    pub fn from_image<C>(source: &RgbaImage, classifier: &C) -> Option<Self>
    where
        C: ForegroundClassifier + ?Sized,
    {
        let foreground = ForegroundSet::extract(source, classifier);
        let profile = RadialProfile::from_foreground(&foreground, Pivot::image_center(source))?;
        let background = reconstruct_background(source, &foreground);

        Some(Self {
            background,
            foreground,
            profile,
        })
    }

    /// Synthesizer painting onto this sprite's background
    pub const fn synthesizer<'a, P>(&'a self, paintable: &'a P) -> StrokeSynthesizer<'a, P>
    where
        P: PaintPredicate + ?Sized,
    {
        StrokeSynthesizer::new(&self.background, &self.profile, paintable)
    }
}

/// `(index, angle in degrees)` for `count` angles evenly spanning a full turn
pub fn frame_angles(count: usize) -> impl Iterator<Item = (usize, f64)> {
    let step = if count == 0 { 0.0 } else { 360.0 / count as f64 };
    (0..count).map(move |index| (index, index as f64 * step))
}
