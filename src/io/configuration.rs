//! Generation constants and runtime configuration defaults

// Frame layout
/// Number of equally spaced needle angles generated per sprite
pub const DEFAULT_FRAME_COUNT: usize = 32;
/// Zero-padding width of the frame index in output file names
pub const FRAME_INDEX_WIDTH: usize = 2;
/// Extension of every raster written by the generator
pub const OUTPUT_EXTENSION: &str = "png";

// Must stay below one pixel so rounding never leaves a gap along the stroke
/// Radial increment used when walking the stroke outward from the pivot
pub const STROKE_STEP: f64 = 0.4;

/// Perpendicular offsets of the two stroke pixels painted at each step
pub const STROKE_OFFSETS: [f64; 2] = [-0.5, 0.5];

// Needle hue band
/// Red channel must exceed this value
pub const NEEDLE_MIN_RED: u8 = 150;
/// Green channel must not exceed this value
pub const NEEDLE_MAX_GREEN: u8 = 70;
/// Blue channel must not exceed this value
pub const NEEDLE_MAX_BLUE: u8 = 70;
/// Red must be more than this multiple of both green and blue
pub const NEEDLE_RED_DOMINANCE: u16 = 2;

// Empty dial area that a stroke may paint over
/// Lowest gray level considered part of the dial face
pub const DIAL_MIN_LUMA: u8 = 40;
/// Highest gray level considered part of the dial face
pub const DIAL_MAX_LUMA: u8 = 110;

/// Fill used when no usable neighbor exists around a removed needle pixel
pub const FALLBACK_BACKGROUND: [u8; 4] = [47, 47, 47, 255];

/// Sprite identifiers processed when none are given on the command line
pub const DEFAULT_SPRITES: [&str; 3] = [
    "basic_ore_compass",
    "advanced_ore_compass",
    "master_ore_compass",
];

// Layered model output
/// Parent model referenced by every generated model record
pub const MODEL_PARENT: &str = "minecraft:item/generated";
/// Resource namespace prefixed to texture references
pub const MODEL_NAMESPACE: &str = "ore_compass";
/// Extension of model record files
pub const MODEL_EXTENSION: &str = "json";
/// Suffix of the per-sprite body texture holding the reconstructed background
pub const BODY_SUFFIX: &str = "_body";
/// File stem prefix of the needle layers shared by all sprites
pub const NEEDLE_LAYER_PREFIX: &str = "ore_compass_needle";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
