//! Sequential frame generation over every configured sprite
//!
//! Failures are local to one sprite: a missing source, an undecodable file or
//! a sprite without needle pixels is logged and counted, and the batch moves
//! on. Only an invalid configuration or a missing textures directory aborts
//! the run, and both are detected before any file is touched.

use crate::analysis::classifier::{
    DialAreaPredicate, ForegroundClassifier, PaintPredicate, RedNeedleClassifier,
};
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_SPRITES, MODEL_EXTENSION, NEEDLE_LAYER_PREFIX, OUTPUT_EXTENSION,
};
use crate::io::error::{FrameError, Result, file_system_error, invalid_parameter};
use crate::io::image::{
    frame_file_name, load_rgba, remove_indexed_files, remove_stale_frames, save_png_atomic,
    source_file_name,
};
use crate::io::model::{
    ModelRecord, body_file_name, model_path, needle_layer, needle_layer_file_name,
};
use crate::io::palette::write_variants;
use crate::io::progress::ProgressManager;
use crate::pipeline::sprite::{SpriteDecomposition, frame_angles};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a batch run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory holding source sprites; frames are written next to them
    pub textures_dir: PathBuf,
    /// Sprite identifiers, each read from `<id>.png`
    pub sprites: Vec<String>,
    /// Number of equally spaced angles per sprite
    pub frame_count: usize,
    /// Write layered model records here, plus body and needle layer textures
    pub models_dir: Option<PathBuf>,
    /// Derive the tier sprites from this base image before generating
    pub palette_base: Option<PathBuf>,
    /// Display progress bars
    pub show_progress: bool,
}

impl BatchConfig {
    /// Default configuration for `textures_dir`
    pub fn new(textures_dir: impl Into<PathBuf>) -> Self {
        Self {
            textures_dir: textures_dir.into(),
            sprites: DEFAULT_SPRITES.iter().map(ToString::to_string).collect(),
            frame_count: DEFAULT_FRAME_COUNT,
            models_dir: None,
            palette_base: None,
            show_progress: false,
        }
    }

    /// Check parameters that would make the run meaningless
    ///
    /// # Errors
    ///
    /// Returns an error if the frame count is zero or a sprite identifier is empty
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(invalid_parameter(
                "frame_count",
                &self.frame_count,
                &"at least one frame is required",
            ));
        }
        if let Some(sprite) = self.sprites.iter().find(|s| s.trim().is_empty()) {
            return Err(invalid_parameter(
                "sprite",
                sprite,
                &"sprite identifiers must not be empty",
            ));
        }
        Ok(())
    }

    /// Degrees between consecutive frames
    pub fn degrees_per_frame(&self) -> f64 {
        360.0 / self.frame_count as f64
    }
}

/// A sprite that was skipped and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSprite {
    /// Sprite identifier
    pub sprite: String,
    /// Human readable reason
    pub reason: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Sprites whose frames were all written
    pub succeeded: usize,
    /// Sprites attempted
    pub total: usize,
    /// Frame files written across all sprites
    pub frames_written: usize,
    /// Stale frames, needle layers and model records removed before generation
    pub stale_removed: usize,
    /// Sprites that were skipped
    pub skipped: Vec<SkippedSprite>,
}

/// Drives classification, reconstruction and synthesis for every configured sprite
pub struct FrameBatch<C = RedNeedleClassifier, P = DialAreaPredicate> {
    config: BatchConfig,
    classifier: C,
    paintable: P,
    progress_manager: Option<ProgressManager>,
}

impl FrameBatch {
    /// Batch using the red needle classifier and dial area paint predicate
    pub fn new(config: BatchConfig) -> Self {
        Self::with_predicates(config, RedNeedleClassifier, DialAreaPredicate)
    }
}

impl<C: ForegroundClassifier, P: PaintPredicate> FrameBatch<C, P> {
    /// Batch using custom predicates, for palettes with a differently colored needle
    pub fn with_predicates(config: BatchConfig, classifier: C, paintable: P) -> Self {
        let progress_manager = config.show_progress.then(ProgressManager::new);

        Self {
            config,
            classifier,
            paintable,
            progress_manager,
        }
    }

    /// Configuration of this batch
    pub const fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Generate frames for every sprite
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The textures directory does not exist
    /// - The models directory cannot be created
    /// - Stale frames cannot be listed or removed
    pub fn run(&mut self) -> Result<BatchReport> {
        self.config.validate()?;

        let textures_dir = self.config.textures_dir.clone();
        if !textures_dir.is_dir() {
            return Err(FrameError::MissingDirectory { path: textures_dir });
        }

        log::info!("Output directory: {}", textures_dir.display());
        log::info!(
            "Frames per sprite: {} ({} degrees apart)",
            self.config.frame_count,
            self.config.degrees_per_frame()
        );

        if let Some(base) = self.config.palette_base.clone() {
            if let Err(e) = write_variants(&base, &textures_dir) {
                log::warn!("Palette variants not generated: {e}");
            }
        }

        let mut stale_removed = remove_stale_frames(&textures_dir, &self.config.sprites)?;
        if let Some(ref models_dir) = self.config.models_dir {
            fs::create_dir_all(models_dir)
                .map_err(|e| file_system_error(models_dir.as_path(), "create directory", e))?;
            stale_removed +=
                remove_indexed_files(&textures_dir, &[NEEDLE_LAYER_PREFIX], OUTPUT_EXTENSION)?;
            stale_removed +=
                remove_indexed_files(models_dir, &self.config.sprites, MODEL_EXTENSION)?;
        }

        let mut report = BatchReport {
            total: self.config.sprites.len(),
            stale_removed,
            ..BatchReport::default()
        };
        log::info!("Removed {} stale files", report.stale_removed);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(report.total);
        }

        let mut needle_layers_pending = self.config.models_dir.is_some();
        for sprite in self.config.sprites.clone() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_sprite(&sprite, self.config.frame_count);
            }

            let outcome = self.process_sprite(&textures_dir, &sprite, needle_layers_pending);
            let succeeded = outcome.is_ok();
            match outcome {
                Ok(frames) => {
                    report.succeeded += 1;
                    report.frames_written += frames;
                    needle_layers_pending = false;
                    log::info!("Generated {frames} frames for {sprite}");
                }
                Err(e) => {
                    log::warn!("Skipping {sprite}: {e}");
                    report.skipped.push(SkippedSprite {
                        sprite: sprite.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_sprite(&sprite, succeeded);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "Done! Generated textures for {}/{} sprites",
            report.succeeded,
            report.total
        );
        log::info!("Total textures created: {}", report.frames_written);

        Ok(report)
    }

    fn process_sprite(
        &self,
        textures_dir: &Path,
        sprite: &str,
        write_needle_layers: bool,
    ) -> Result<usize> {
        let source_path = textures_dir.join(source_file_name(sprite));
        if !source_path.is_file() {
            return Err(FrameError::MissingSource { path: source_path });
        }

        let source = load_rgba(&source_path)?;
        log::info!(
            "Processing {sprite} ({}x{})",
            source.width(),
            source.height()
        );

        let decomposition = SpriteDecomposition::from_image(&source, &self.classifier).ok_or_else(
            || FrameError::NoForeground {
                sprite: sprite.to_string(),
            },
        )?;
        let pivot = decomposition.profile.pivot();
        log::info!("  Found {} needle pixels", decomposition.foreground.len());
        log::debug!("  Rotation center: ({}, {})", pivot.x, pivot.y);

        if self.config.models_dir.is_some() {
            save_png_atomic(
                &decomposition.background,
                &textures_dir.join(body_file_name(sprite)),
            )?;
        }

        let synthesizer = decomposition.synthesizer(&self.paintable);
        let mut written = 0;

        for (index, angle) in frame_angles(self.config.frame_count) {
            let frame = synthesizer.synthesize(angle);
            save_png_atomic(&frame, &textures_dir.join(frame_file_name(sprite, index)))?;
            written += 1;

            if let Some(ref models_dir) = self.config.models_dir {
                ModelRecord::for_frame(sprite, index)
                    .write_to(&model_path(models_dir, sprite, index))?;
                if write_needle_layers {
                    save_png_atomic(
                        &needle_layer(&frame, &decomposition.background),
                        &textures_dir.join(needle_layer_file_name(index)),
                    )?;
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.frame_written();
            }
        }

        Ok(written)
    }
}
