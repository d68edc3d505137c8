//! Raster loading, atomic file replacement and indexed file naming

use crate::io::configuration::{FRAME_INDEX_WIDTH, OUTPUT_EXTENSION};
use crate::io::error::{FrameError, Result, file_system_error};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Load any supported raster as 8-bit RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| FrameError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Write `image` as PNG, replacing `path` only once the encoding is complete
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
/// - The temporary file cannot be renamed into place
pub fn save_png_atomic(image: &RgbaImage, path: &Path) -> Result<()> {
    replace_atomically(path, |temp_path| {
        image
            .save_with_format(temp_path, ImageFormat::Png)
            .map_err(|e| FrameError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })
    })
}

/// Write `contents` to `path` through the same temporary sibling as frames
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the bytes cannot
/// be written or the temporary file cannot be renamed into place
pub fn write_file_atomic(contents: &[u8], path: &Path) -> Result<()> {
    replace_atomically(path, |temp_path| {
        fs::write(temp_path, contents).map_err(|e| file_system_error(path, "write", e))
    })
}

/// Produce the new content in a hidden sibling, then rename it over `path`
///
/// Readers never observe a partially written file.
fn replace_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let temp_path = temporary_sibling(path);
    if let Err(e) = write(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        file_system_error(path, "rename", e)
    })
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!(".{name}.tmp"))
}

/// File name of the source sprite for `sprite`
pub fn source_file_name(sprite: &str) -> String {
    format!("{sprite}.{OUTPUT_EXTENSION}")
}

/// File name of frame `index` for `sprite`, e.g. `needle_07.png`
pub fn frame_file_name(sprite: &str, index: usize) -> String {
    format!(
        "{sprite}_{index:0width$}.{OUTPUT_EXTENSION}",
        width = FRAME_INDEX_WIDTH
    )
}

/// Whether `name` is a generated frame of `sprite`, whatever the frame count was
pub fn is_frame_file_name(sprite: &str, name: &str) -> bool {
    is_indexed_file_name(sprite, name, OUTPUT_EXTENSION)
}

/// Whether `name` is `<stem>_<index>.<extension>` with an index of at least two digits
pub fn is_indexed_file_name(stem: &str, name: &str, extension: &str) -> bool {
    let Some(rest) = name
        .strip_prefix(stem)
        .and_then(|rest| rest.strip_prefix('_'))
    else {
        return false;
    };
    let Some(digits) = rest
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
    else {
        return false;
    };

    digits.len() >= FRAME_INDEX_WIDTH && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Delete every previously generated frame of the given sprites in `dir`
///
/// Returns the number of files removed.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a frame cannot be removed
pub fn remove_stale_frames<S: AsRef<str>>(dir: &Path, sprites: &[S]) -> Result<usize> {
    remove_indexed_files(dir, sprites, OUTPUT_EXTENSION)
}

/// Delete every `<stem>_<index>.<extension>` file in `dir` for the given stems
///
/// A name that is also `<stem>.<extension>` of one of `stems` is kept, so a
/// sprite called `compass_01` survives cleanup of the frames of `compass`.
/// Returns the number of files removed.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a file cannot be removed
pub fn remove_indexed_files<S: AsRef<str>>(
    dir: &Path,
    stems: &[S],
    extension: &str,
) -> Result<usize> {
    let protected: Vec<String> = stems
        .iter()
        .map(|stem| format!("{}.{extension}", stem.as_ref()))
        .collect();
    let entries = fs::read_dir(dir).map_err(|e| file_system_error(dir, "list directory", e))?;
    let mut stale = Vec::new();

    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "list directory", e))?
            .path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file()
            && !protected.iter().any(|keep| keep == name)
            && stems
                .iter()
                .any(|stem| is_indexed_file_name(stem.as_ref(), name, extension))
        {
            stale.push(path);
        }
    }

    stale.sort();
    for path in &stale {
        fs::remove_file(path).map_err(|e| file_system_error(path.as_path(), "remove", e))?;
        log::debug!("Removed stale file {}", path.display());
    }

    Ok(stale.len())
}
