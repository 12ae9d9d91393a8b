use std::fmt;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::error::AssetError;
use crate::layout::{Dimensions, Fit};
use crate::names::format_filename;

/// Which picture a slot shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Character,
    Vehicle,
    Cup,
    Course,
}

impl SlotKind {
    /// Lowercase name used in inline error messages
    pub fn label(self) -> &'static str {
        match self {
            SlotKind::Character => "character",
            SlotKind::Vehicle => "vehicle",
            SlotKind::Cup => "cup",
            SlotKind::Course => "course",
        }
    }
}

/// A decoded, resized image ready for the renderer
#[derive(Clone)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub handle: Handle,
    pub dimensions: Dimensions,
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("path", &self.path)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

/// Decode `path` and resize it according to `fit`
pub fn load_thumbnail(path: &Path, fit: Fit) -> Result<Thumbnail, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let original = Dimensions::new(img.width(), img.height());
    let dimensions = fit.apply(original);

    let resized = if dimensions == original {
        img
    } else {
        img.resize_exact(dimensions.width, dimensions.height, FilterType::Lanczos3)
    };

    let rgba = resized.to_rgba8();
    let handle = Handle::from_rgba(dimensions.width, dimensions.height, rgba.into_raw());

    Ok(Thumbnail {
        path: path.to_path_buf(),
        handle,
        dimensions,
    })
}

/// What a slot currently holds
#[derive(Debug, Clone, Default)]
pub enum SlotImage {
    #[default]
    Empty,
    Loaded(Thumbnail),
    /// Inline message shown in place of the image
    Failed(String),
}

/// One display slot; it owns the thumbnail it shows
#[derive(Debug, Clone)]
pub struct DisplaySlot {
    kind: SlotKind,
    image: SlotImage,
    name: String,
}

impl DisplaySlot {
    pub fn new(kind: SlotKind) -> Self {
        Self {
            kind,
            image: SlotImage::Empty,
            name: String::new(),
        }
    }

    pub fn image(&self) -> &SlotImage {
        &self.image
    }

    /// Display name derived from the file, or `Error`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.image, SlotImage::Loaded(_))
    }

    /// Load `path` into the slot, or show the load error inline
    pub fn show(&mut self, path: &Path, fit: Fit) {
        match load_thumbnail(path, fit) {
            Ok(thumbnail) => {
                let filename = path.file_name().unwrap_or_default().to_string_lossy();
                self.name = format_filename(&filename);
                self.image = SlotImage::Loaded(thumbnail);
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️  Failed to load {} {}: {}",
                    self.kind.label(),
                    path.display(),
                    e
                );
                self.fail(format!("Error loading {}: {}", self.kind.label(), e));
            }
        }
    }

    /// Replace the image with an inline message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.image = SlotImage::Failed(message.into());
        self.name = "Error".to_string();
    }

    pub fn clear(&mut self) {
        self.image = SlotImage::Empty;
        self.name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_thumbnail_is_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Wide.png");
        write_png(&path, 80, 40);

        let thumb = load_thumbnail(&path, Fit::Thumbnail(Dimensions::new(20, 20))).unwrap();
        assert_eq!(thumb.dimensions, Dimensions::new(20, 10));
    }

    #[test]
    fn test_fill_enlarges_small_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Tiny.png");
        write_png(&path, 10, 20);

        let thumb = load_thumbnail(&path, Fit::Fill(Dimensions::new(30, 32))).unwrap();
        assert_eq!(thumb.dimensions, Dimensions::new(16, 32));
    }

    #[test]
    fn test_show_sets_display_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KingBoo.png");
        write_png(&path, 8, 8);

        let mut slot = DisplaySlot::new(SlotKind::Character);
        slot.show(&path, Fit::Thumbnail(Dimensions::new(300, 300)));

        assert!(slot.is_loaded());
        assert_eq!(slot.name(), "King Boo");
    }

    #[test]
    fn test_corrupt_file_fails_inline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let mut slot = DisplaySlot::new(SlotKind::Vehicle);
        slot.show(&path, Fit::Thumbnail(Dimensions::new(300, 300)));

        assert!(!slot.is_loaded());
        assert_eq!(slot.name(), "Error");
        match slot.image() {
            SlotImage::Failed(message) => {
                assert!(message.starts_with("Error loading vehicle: "))
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_fails_inline() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = DisplaySlot::new(SlotKind::Course);
        slot.show(&dir.path().join("Gone.png"), Fit::Fill(Dimensions::new(300, 320)));
        assert!(matches!(slot.image(), SlotImage::Failed(_)));
    }
}
