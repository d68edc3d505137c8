//! Input/output: command line, configuration, errors, rasters and collaborator formats

/// Command-line interface and its mapping onto a batch configuration
pub mod cli;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Raster loading, atomic file replacement and frame naming
pub mod image;
/// Layered item model records and texture layers
pub mod model;
/// Exact-match palette remapping for tier variants
pub mod palette;
/// Progress bars for batch runs
pub mod progress;
