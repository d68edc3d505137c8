//! Layered item model records and the texture layers they reference
//!
//! Each frame model stacks two textures: the reconstructed dial of its sprite
//! (`layer0`, written once per sprite) and a white needle layer for the frame
//! index (`layer1`, shared by every sprite so it can be tinted per tier).

use crate::io::configuration::{
    BODY_SUFFIX, FRAME_INDEX_WIDTH, MODEL_EXTENSION, MODEL_NAMESPACE, MODEL_PARENT,
    NEEDLE_LAYER_PREFIX, OUTPUT_EXTENSION,
};
use crate::io::error::{FrameError, Result};
use crate::io::image::write_file_atomic;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Texture references of a layered model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTextures {
    /// Body texture, drawn first
    pub layer0: String,
    /// Needle texture, drawn on top
    pub layer1: String,
}

/// Item model record for one `(sprite, frame)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Parent model
    pub parent: String,
    /// Texture layers
    pub textures: ModelTextures,
}

impl ModelRecord {
    /// Record referencing the body of `sprite` and the shared needle of frame `index`
    pub fn for_frame(sprite: &str, index: usize) -> Self {
        Self {
            parent: MODEL_PARENT.to_string(),
            textures: ModelTextures {
                layer0: format!("{MODEL_NAMESPACE}:item/{}", body_texture_name(sprite)),
                layer1: format!("{MODEL_NAMESPACE}:item/{}", needle_layer_name(index)),
            },
        }
    }

    /// Serialize to `path`, atomically replacing any previous record
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| FrameError::Serialization {
            path: path.to_path_buf(),
            source: e,
        })?;
        json.push('\n');
        write_file_atomic(json.as_bytes(), path)
    }
}

/// Texture name of the reconstructed dial of `sprite`
pub fn body_texture_name(sprite: &str) -> String {
    format!("{sprite}{BODY_SUFFIX}")
}

/// File name of the body texture of `sprite`
pub fn body_file_name(sprite: &str) -> String {
    format!("{}.{OUTPUT_EXTENSION}", body_texture_name(sprite))
}

/// File name of the shared needle layer for frame `index`
pub fn needle_layer_file_name(index: usize) -> String {
    format!("{}.{OUTPUT_EXTENSION}", needle_layer_name(index))
}

/// Texture name of the shared needle layer for frame `index`
pub fn needle_layer_name(index: usize) -> String {
    format!("{NEEDLE_LAYER_PREFIX}_{index:0width$}", width = FRAME_INDEX_WIDTH)
}

/// Location of the model record for `(sprite, index)` inside `models_dir`
pub fn model_path(models_dir: &Path, sprite: &str, index: usize) -> PathBuf {
    models_dir.join(format!(
        "{sprite}_{index:0width$}.{MODEL_EXTENSION}",
        width = FRAME_INDEX_WIDTH
    ))
}

/// Needle-only layer of a frame, recolored white for tinting
///
/// Keeps every pixel where `frame` differs from `background`, with its alpha;
/// all other pixels become fully transparent.
pub fn needle_layer(frame: &RgbaImage, background: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(frame.width(), frame.height(), |x, y| {
        let painted = frame.get_pixel(x, y);
        let differs = background
            .get_pixel_checked(x, y)
            .is_none_or(|original| original != painted);
        if differs && painted.0[3] > 0 {
            Rgba([255, 255, 255, painted.0[3]])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
