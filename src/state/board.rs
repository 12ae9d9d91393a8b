use std::path::PathBuf;

use rand::Rng;

use super::slot::{DisplaySlot, SlotKind};
use crate::assets::category::{cups_dir, Size};
use crate::assets::cups::{draw_cup, CupDraw};
use crate::assets::selector::draw_roster;
use crate::layout::SlotMetrics;
use crate::names::format_filename;

/// Everything the window shows
///
/// Rebuilt piece by piece on each randomize action; nothing is persisted.
#[derive(Debug)]
pub struct Board {
    asset_root: PathBuf,
    metrics: SlotMetrics,
    pub size: Option<Size>,
    pub character: DisplaySlot,
    pub vehicle: DisplaySlot,
    pub cup: DisplaySlot,
    pub course: DisplaySlot,
    /// `<Cup> - <Course>` under the cup and course boxes
    pub cup_caption: String,
}

impl Board {
    pub fn new(asset_root: impl Into<PathBuf>, metrics: SlotMetrics) -> Self {
        Self {
            asset_root: asset_root.into(),
            metrics,
            size: None,
            character: DisplaySlot::new(SlotKind::Character),
            vehicle: DisplaySlot::new(SlotKind::Vehicle),
            cup: DisplaySlot::new(SlotKind::Cup),
            course: DisplaySlot::new(SlotKind::Course),
            cup_caption: String::new(),
        }
    }

    pub fn metrics(&self) -> &SlotMetrics {
        &self.metrics
    }

    /// `Size: <Size>` header text
    pub fn size_label(&self) -> String {
        match self.size {
            Some(size) => format!("Size: {}", size),
            None => "Size: ".to_string(),
        }
    }

    /// Draw a new size, character and vehicle
    pub fn randomize_roster<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let draw = draw_roster(&self.asset_root, rng);
        self.size = Some(draw.size);

        match draw.character {
            Ok(path) => self.character.show(&path, self.metrics.character_fit),
            Err(e) => {
                tracing::warn!("⚠️  No character for size {}: {}", draw.size, e);
                self.character.fail(e.to_string());
            }
        }

        match draw.vehicle {
            Ok(path) => self.vehicle.show(&path, self.metrics.vehicle_fit),
            Err(e) => {
                tracing::warn!(
                    "⚠️  No vehicle for {} / {}: {}",
                    draw.vehicle_type,
                    draw.size,
                    e
                );
                self.vehicle.fail(e.to_string());
            }
        }
    }

    /// Draw a new cup and course
    pub fn randomize_cup<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match draw_cup(&cups_dir(&self.asset_root), rng) {
            Ok(draw) => self.show_cup(&draw),
            Err(e) => {
                tracing::warn!("⚠️  Cup draw failed: {}", e);
                self.cup.fail(e.to_string());
                self.course.clear();
                self.cup_caption = "Error".to_string();
            }
        }
    }

    fn show_cup(&mut self, draw: &CupDraw) {
        match (&draw.cup_image, &draw.cup_name) {
            (Some(emblem), _) => self.cup.show(emblem, self.metrics.cup_fit),
            (None, Some(_)) => self.cup.fail("Cup image not found"),
            (None, None) => self.cup.clear(),
        }

        self.course.show(&draw.course, self.metrics.course_fit);

        self.cup_caption = if self.course.is_loaded() {
            cup_caption(draw)
        } else {
            "Error".to_string()
        };
    }
}

/// `<Cup Name> - <Course Name>`, or just the course in the flat layout
pub fn cup_caption(draw: &CupDraw) -> String {
    let filename = draw.course.file_name().unwrap_or_default().to_string_lossy();
    let course = format_filename(&filename);
    match &draw.cup_name {
        Some(cup) => format!("{} - {}", format_filename(cup), course),
        None => course,
    }
}
