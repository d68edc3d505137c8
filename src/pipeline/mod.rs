//! Orchestration from source sprite to persisted frame set

/// Batch driver over sprites and frame angles
pub mod batch;
/// One-time per-sprite decomposition and frame angle layout
pub mod sprite;

pub use batch::{BatchConfig, BatchReport, FrameBatch};
