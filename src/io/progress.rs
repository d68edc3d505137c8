//! Sprite and frame progress display for batch runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sprites: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates a batch bar over sprites and a bar over the current sprite's frames
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    frame_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            frame_bar: None,
        }
    }

    /// Create the batch bar for `sprite_count` sprites
    pub fn initialize(&mut self, sprite_count: usize) {
        let batch_bar = ProgressBar::new(sprite_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));
    }

    /// Start a frame bar for `sprite`
    pub fn start_sprite(&mut self, sprite: &str, frame_count: usize) {
        if let Some(previous) = self.frame_bar.take() {
            previous.finish_and_clear();
        }
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(sprite.to_string());
        self.frame_bar = Some(self.multi_progress.add(bar));
    }

    /// Report one more frame written for the current sprite
    pub fn frame_written(&self) {
        if let Some(ref bar) = self.frame_bar {
            bar.inc(1);
        }
    }

    /// Mark the current sprite as done, whatever its outcome
    pub fn complete_sprite(&mut self, sprite: &str, succeeded: bool) {
        if let Some(bar) = self.frame_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            let mark = if succeeded { "✓" } else { "✗" };
            batch_bar.set_message(format!("{mark} {sprite}"));
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All sprites processed");
        }
        let _ = self.multi_progress.clear();
    }
}
