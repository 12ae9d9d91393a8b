//! Per-folder image counts for an asset root
use std::fmt;
use std::path::Path;

use walkdir::WalkDir;

use super::{has_image_extension, list_subfolders};
use crate::error::AssetError;

/// Image count of one top-level folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderCount {
    pub name: String,
    pub count: usize,
}

/// Counts for every immediate subfolder of a root, sorted by folder name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCount {
    pub folders: Vec<FolderCount>,
    pub total: usize,
}

/// Recursively count the image files below `folder`
///
/// Entries that can't be read are skipped.
pub fn count_images_in_folder(folder: &Path) -> usize {
    WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && has_image_extension(entry.path()))
        .count()
}

/// Count images in each immediate subfolder of `root`
///
/// Files sitting directly in `root` are not counted.
pub fn count_images(root: &Path) -> Result<ImageCount, AssetError> {
    let mut result = ImageCount::default();

    for subdir in list_subfolders(root)? {
        let count = count_images_in_folder(&subdir);
        let name = subdir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        tracing::debug!(folder = %name, count, "counted folder");

        result.total += count;
        result.folders.push(FolderCount { name, count });
    }

    Ok(result)
}

impl fmt::Display for ImageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for folder in &self.folders {
            writeln!(f, "Folder: {}: {} images", folder.name, folder.count)?;
        }
        write!(f, "\nTotal images found: {}", self.total)
    }
}
