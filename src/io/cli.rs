//! Command-line interface for generating rotated needle frames

use crate::io::configuration::{DEFAULT_FRAME_COUNT, DEFAULT_SPRITES};
use crate::io::error::Result;
use crate::pipeline::batch::{BatchConfig, BatchReport, FrameBatch};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "needleframe")]
#[command(
    author,
    version,
    about = "Generate rotated needle frames from static compass sprites"
)]
/// Command-line arguments for the frame generator
pub struct Cli {
    /// Directory containing the source sprites; frames are written next to them
    #[arg(value_name = "TEXTURES_DIR")]
    pub textures_dir: PathBuf,

    /// Number of equally spaced angles generated per sprite
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// Sprite identifier to process (repeatable, defaults to the three compass tiers)
    #[arg(short, long = "sprite", value_name = "ID")]
    pub sprites: Vec<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write layered model records into this directory
    #[arg(short, long, value_name = "DIR")]
    pub models: Option<PathBuf>,

    /// Derive tier sprites from this base image before generating
    #[arg(short, long, value_name = "PNG")]
    pub palette_base: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sprite identifiers to process
    pub fn sprite_ids(&self) -> Vec<String> {
        if self.sprites.is_empty() {
            DEFAULT_SPRITES.iter().map(ToString::to_string).collect()
        } else {
            self.sprites.clone()
        }
    }

    /// Batch configuration described by these arguments
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            textures_dir: self.textures_dir.clone(),
            sprites: self.sprite_ids(),
            frame_count: self.frames,
            models_dir: self.models.clone(),
            palette_base: self.palette_base.clone(),
            show_progress: self.should_show_progress(),
        }
    }

    /// Run the full batch
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the textures directory is missing
    pub fn run(&self) -> Result<BatchReport> {
        FrameBatch::new(self.batch_config()).run()
    }
}
