//! Cup and course selection
//!
//! Two layouts are supported under `Cups/`:
//! - one folder per cup, holding the cup emblem `<CupName>.<ext>` next to its course images
//! - a flat folder of course images with no emblems
use std::path::{Path, PathBuf};

use rand::Rng;

use super::selector::choose;
use super::{list_images, list_subfolders, IMAGE_EXTENSIONS};
use crate::error::AssetError;

/// Result of one cup randomize action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CupDraw {
    /// Cup folder name; `None` in the flat layout
    pub cup_name: Option<String>,
    /// Emblem image, when the cup folder has one
    pub cup_image: Option<PathBuf>,
    pub course: PathBuf,
}

/// Pick a random cup below `cups_dir`, then a random course from it
pub fn draw_cup<R: Rng + ?Sized>(cups_dir: &Path, rng: &mut R) -> Result<CupDraw, AssetError> {
    let cup_folders = list_subfolders(cups_dir)?;

    let Some(cup_folder) = choose(&cup_folders, rng) else {
        return draw_flat(cups_dir, rng);
    };

    let cup_name = cup_folder
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let images = list_images(cup_folder)?;
    let courses = course_candidates(&images, &cup_name);
    let course = choose(&courses, rng)
        .cloned()
        .ok_or_else(|| AssetError::NoCourses {
            path: cup_folder.clone(),
        })?;

    tracing::info!("Selected cup: {}", cup_name);
    tracing::info!(
        "Selected course: {}",
        course.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(CupDraw {
        cup_image: find_cup_image(&images, &cup_name),
        cup_name: Some(cup_name),
        course,
    })
}

fn draw_flat<R: Rng + ?Sized>(cups_dir: &Path, rng: &mut R) -> Result<CupDraw, AssetError> {
    let images = list_images(cups_dir)?;
    let course = choose(&images, rng).cloned().ok_or_else(|| AssetError::NoCups {
        path: cups_dir.to_path_buf(),
    })?;

    tracing::info!(
        "Selected course: {}",
        course.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(CupDraw {
        cup_name: None,
        cup_image: None,
        course,
    })
}

/// Course images of a cup: everything except the emblem, or everything if
/// the emblem is all there is
///
/// Besides the exact emblem, any file whose stem matches the cup name without
/// its last `.suffix` (ignoring case) is skipped.
pub fn course_candidates(images: &[PathBuf], cup_name: &str) -> Vec<PathBuf> {
    let filtered: Vec<PathBuf> = images
        .iter()
        .filter(|path| !is_cup_image(path, cup_name) && !shares_cup_stem(path, cup_name))
        .cloned()
        .collect();

    if filtered.is_empty() {
        images.to_vec()
    } else {
        filtered
    }
}

/// The emblem image `<cup_name>.<ext>`, preferring extensions in probe order
///
/// The name and extension must match exactly, as a file lookup would on a
/// case-sensitive filesystem.
pub fn find_cup_image(images: &[PathBuf], cup_name: &str) -> Option<PathBuf> {
    images
        .iter()
        .filter(|path| is_cup_image(path, cup_name))
        .min_by_key(|path| extension_rank(path))
        .cloned()
}

fn is_cup_image(path: &Path, cup_name: &str) -> bool {
    let stem_matches = path
        .file_stem()
        .map(|stem| stem.to_string_lossy() == cup_name)
        .unwrap_or(false);
    stem_matches && extension_rank(path).is_some()
}

fn shares_cup_stem(path: &Path, cup_name: &str) -> bool {
    let cup_stem = match cup_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => cup_name,
    };
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase() == cup_stem.to_lowercase())
        .unwrap_or(false)
}

/// Position of the extension in the probe order; exact lowercase match only
fn extension_rank(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_string_lossy();
    IMAGE_EXTENSIONS.iter().position(|known| *known == ext)
}
