/// Asset tree access
///
/// This module handles:
/// - Recognizing image files by extension
/// - Counting images per top-level folder (counter.rs)
/// - Uniform random picks and the size / vehicle categories (selector.rs, category.rs)
/// - Cup and course selection (cups.rs)

pub mod category;
pub mod counter;
pub mod cups;
pub mod selector;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// Recognized image extensions, lowercase and in probe order
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Check whether a path carries a recognized image extension (case-insensitive)
pub fn has_image_extension(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// List the image files directly inside `folder` (non-recursive), sorted by path
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut images: Vec<PathBuf> = read_entries(folder)?
        .into_iter()
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    images.sort();
    Ok(images)
}

/// List the immediate subdirectories of `folder`, sorted by path
pub fn list_subfolders(folder: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut dirs: Vec<PathBuf> = read_entries(folder)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn read_entries(folder: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let entries = fs::read_dir(folder).map_err(|e| AssetError::io(folder, e))?;
    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect())
}
