//! Separation of the needle from the static dial and its radial description

/// Background inpainting at former needle positions
pub mod background;
/// Foreground and paintability predicates over single pixels
pub mod classifier;
/// Foreground pixel set extraction and classification mask
pub mod foreground;
/// Pivot point and distance-ordered color profile of the needle
pub mod profile;
