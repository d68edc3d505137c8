//! Exact-match palette remapping used to derive tier sprites from one base texture

use crate::io::error::Result;
use crate::io::image::{load_rgba, save_png_atomic, source_file_name};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// RGB triple without alpha
pub type Rgb = [u8; 3];

/// Named color table producing one tier sprite
#[derive(Debug, Clone, Copy)]
pub struct PaletteVariant {
    /// Identifier of the sprite written for this variant
    pub sprite_id: &'static str,
    /// `(from, to)` replacements, matched exactly on RGB
    pub entries: &'static [(Rgb, Rgb)],
}

impl PaletteVariant {
    /// Replacement for `rgb`, if the table has one
    pub fn lookup(&self, rgb: Rgb) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(from, _)| *from == rgb)
            .map(|&(_, to)| to)
    }
}

/// Copper rim with a dark red needle
pub const BASIC: PaletteVariant = PaletteVariant {
    sprite_id: "basic_ore_compass",
    entries: &[
        ([192, 192, 192], [184, 115, 51]),
        ([168, 168, 168], [205, 127, 50]),
        ([96, 96, 96], [139, 90, 43]),
        ([64, 64, 64], [101, 67, 33]),
        ([220, 20, 60], [139, 0, 0]),
        ([255, 0, 0], [165, 42, 42]),
        ([224, 224, 224], [192, 192, 192]),
        ([255, 255, 255], [220, 220, 220]),
    ],
};

/// Gold rim with a diamond needle
pub const ADVANCED: PaletteVariant = PaletteVariant {
    sprite_id: "advanced_ore_compass",
    entries: &[
        ([192, 192, 192], [255, 215, 0]),
        ([168, 168, 168], [255, 165, 0]),
        ([96, 96, 96], [184, 134, 11]),
        ([64, 64, 64], [139, 105, 20]),
        ([220, 20, 60], [0, 206, 209]),
        ([255, 0, 0], [64, 224, 208]),
        ([224, 224, 224], [65, 105, 225]),
        ([255, 255, 255], [135, 206, 235]),
    ],
};

/// Netherite rim with an amethyst needle
pub const MASTER: PaletteVariant = PaletteVariant {
    sprite_id: "master_ore_compass",
    entries: &[
        ([192, 192, 192], [58, 58, 58]),
        ([168, 168, 168], [47, 47, 47]),
        ([96, 96, 96], [31, 31, 31]),
        ([64, 64, 64], [10, 10, 10]),
        ([220, 20, 60], [217, 70, 239]),
        ([255, 0, 0], [232, 218, 239]),
        ([224, 224, 224], [155, 89, 182]),
        ([255, 255, 255], [187, 143, 206]),
    ],
};

/// Built-in variants in tier order
pub const BUILTIN_VARIANTS: [PaletteVariant; 3] = [BASIC, ADVANCED, MASTER];

/// Return a copy of `image` with every table color replaced
///
/// Transparent pixels and colors without an entry pass through unchanged;
/// replaced pixels keep their alpha.
pub fn remap(image: &RgbaImage, variant: &PaletteVariant) -> RgbaImage {
    let mut output = image.clone();

    for pixel in output.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        if let Some([nr, ng, nb]) = variant.lookup([r, g, b]) {
            *pixel = Rgba([nr, ng, nb, a]);
        }
    }

    output
}

/// Remap `base` with every built-in variant and write `<sprite_id>.png` into `dir`
///
/// Returns the written paths in variant order.
///
/// # Errors
///
/// Returns an error if the base image cannot be loaded or a variant cannot be written
pub fn write_variants(base: &Path, dir: &Path) -> Result<Vec<PathBuf>> {
    let source = load_rgba(base)?;
    let mut written = Vec::with_capacity(BUILTIN_VARIANTS.len());

    for variant in &BUILTIN_VARIANTS {
        let path = dir.join(source_file_name(variant.sprite_id));
        save_png_atomic(&remap(&source, variant), &path)?;
        log::info!("Wrote palette variant {}", path.display());
        written.push(path);
    }

    Ok(written)
}
