//! Rotated needle sprite generation from a single static texture
//!
//! The needle is isolated from the dial by color, the dial is inpainted where
//! the needle used to be, and the needle is redrawn as a fixed-width stroke at
//! evenly spaced angles around the image center, one frame per angle.

#![forbid(unsafe_code)]

/// Needle classification, background reconstruction and radial profiling
pub mod analysis;
/// Command line, configuration, errors and raster persistence
pub mod io;
/// Per-sprite decomposition and the frame batch driver
pub mod pipeline;
/// Rotated stroke synthesis
pub mod synthesis;

pub use io::error::{FrameError, Result};
