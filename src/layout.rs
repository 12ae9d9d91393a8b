//! Aspect-preserving sizing for the display slots
//!
//! All math is done on integer pixel sizes; ratios are compared by
//! cross-multiplication so no floating point rounding leaks into the result.

/// Width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn fits_within(&self, bounds: Dimensions) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }

    fn scaled(self, scale: f32) -> Self {
        Self {
            width: (self.width as f32 * scale) as u32,
            height: (self.height as f32 * scale) as u32,
        }
    }
}

/// Scale `image` so it touches the edge of `bounds` without distortion
///
/// When the image is relatively wider than the box its width matches the box,
/// otherwise its height does. The other side is truncated and never below 1px.
pub fn fit_to_box(image: Dimensions, bounds: Dimensions) -> Dimensions {
    if image.is_empty() || bounds.is_empty() {
        return Dimensions::default();
    }

    let (w, h) = (u64::from(image.width), u64::from(image.height));
    let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

    if w * bh > bw * h {
        Dimensions::new(bounds.width, ((bw * h / w) as u32).max(1))
    } else {
        Dimensions::new(((bh * w / h) as u32).max(1), bounds.height)
    }
}

/// Shrink-only variant of [`fit_to_box`]
///
/// An image already inside `bounds` keeps its size.
pub fn thumbnail(image: Dimensions, bounds: Dimensions) -> Dimensions {
    if image.fits_within(bounds) {
        image
    } else {
        fit_to_box(image, bounds)
    }
}

/// How an image is sized into its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Downscale only, never enlarge
    Thumbnail(Dimensions),
    /// Scale up or down until an edge touches the box
    Fill(Dimensions),
}

impl Fit {
    pub fn apply(self, image: Dimensions) -> Dimensions {
        match self {
            Fit::Thumbnail(bounds) => thumbnail(image, bounds),
            Fit::Fill(bounds) => fit_to_box(image, bounds),
        }
    }
}

/// Box and thumbnail sizes at 1.0 scale
const CHARACTER_BOX: Dimensions = Dimensions::new(320, 320);
const VEHICLE_BOX: Dimensions = Dimensions::new(320, 320);
const CUP_BOX: Dimensions = Dimensions::new(200, 320);
const COURSE_BOX: Dimensions = Dimensions::new(300, 320);
const CHARACTER_THUMB: Dimensions = Dimensions::new(300, 300);
const VEHICLE_THUMB: Dimensions = Dimensions::new(300, 300);
const CUP_THUMB: Dimensions = Dimensions::new(190, 310);
const NAME_ROW_HEIGHT: u32 = 40;

/// Spacing around each box, in unscaled pixels
pub const BOX_PADDING: u16 = 10;

/// Pixel sizes of every slot for a given UI scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMetrics {
    pub scale: f32,
    pub character_box: Dimensions,
    pub vehicle_box: Dimensions,
    pub cup_box: Dimensions,
    pub course_box: Dimensions,
    pub character_fit: Fit,
    pub vehicle_fit: Fit,
    pub cup_fit: Fit,
    pub course_fit: Fit,
    pub name_row_height: u32,
}

impl SlotMetrics {
    pub fn scaled(scale: f32) -> Self {
        let course_box = COURSE_BOX.scaled(scale);
        Self {
            scale,
            character_box: CHARACTER_BOX.scaled(scale),
            vehicle_box: VEHICLE_BOX.scaled(scale),
            cup_box: CUP_BOX.scaled(scale),
            course_box,
            character_fit: Fit::Thumbnail(CHARACTER_THUMB.scaled(scale)),
            vehicle_fit: Fit::Thumbnail(VEHICLE_THUMB.scaled(scale)),
            cup_fit: Fit::Thumbnail(CUP_THUMB.scaled(scale)),
            course_fit: Fit::Fill(course_box),
            name_row_height: (NAME_ROW_HEIGHT as f32 * scale) as u32,
        }
    }

    /// Initial window size holding all four boxes plus headers and buttons
    pub fn window_size(&self) -> Dimensions {
        let pad = u32::from(BOX_PADDING) * 2;
        let width = self.character_box.width
            + self.vehicle_box.width
            + self.cup_box.width
            + self.course_box.width
            + pad * 5;
        let height =
            self.character_box.height + self.name_row_height + (260.0 * self.scale) as u32;
        Dimensions::new(width, height)
    }
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_matches_box_width() {
        let out = fit_to_box(Dimensions::new(640, 480), Dimensions::new(320, 320));
        assert_eq!(out, Dimensions::new(320, 240));
    }

    #[test]
    fn test_tall_image_matches_box_height() {
        let out = fit_to_box(Dimensions::new(300, 600), Dimensions::new(300, 320));
        assert_eq!(out, Dimensions::new(160, 320));
    }

    #[test]
    fn test_small_image_is_enlarged() {
        let out = fit_to_box(Dimensions::new(64, 32), Dimensions::new(300, 320));
        assert_eq!(out, Dimensions::new(300, 150));
    }

    #[test]
    fn test_fit_preserves_ratio_and_touches_an_edge() {
        let boxes = [(320, 320), (200, 320), (300, 320), (480, 270)];
        let images = [(1920, 1080), (1080, 1920), (500, 500), (123, 457), (801, 33)];

        for &(bw, bh) in &boxes {
            for &(w, h) in &images {
                let bounds = Dimensions::new(bw, bh);
                let out = fit_to_box(Dimensions::new(w, h), bounds);

                assert!(out.fits_within(bounds), "{out:?} outside {bounds:?}");
                assert!(out.width == bw || out.height == bh);

                // Truncation moves the free side by less than one pixel
                let expected_ratio = w as f64 / h as f64;
                if out.width == bw {
                    let exact = bw as f64 / expected_ratio;
                    assert!((exact - out.height as f64).abs() < 1.0 || out.height == 1);
                } else {
                    let exact = bh as f64 * expected_ratio;
                    assert!((exact - out.width as f64).abs() < 1.0 || out.width == 1);
                }
            }
        }
    }

    #[test]
    fn test_same_ratio_fills_box() {
        let out = fit_to_box(Dimensions::new(100, 160), Dimensions::new(200, 320));
        assert_eq!(out, Dimensions::new(200, 320));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(
            fit_to_box(Dimensions::new(0, 10), Dimensions::new(10, 10)),
            Dimensions::default()
        );
        assert_eq!(
            fit_to_box(Dimensions::new(10, 10), Dimensions::new(0, 10)),
            Dimensions::default()
        );
        assert_eq!(
            fit_to_box(Dimensions::new(10_000, 1), Dimensions::new(300, 320)),
            Dimensions::new(300, 1)
        );
    }

    #[test]
    fn test_thumbnail_never_enlarges() {
        let bounds = Dimensions::new(300, 300);
        assert_eq!(thumbnail(Dimensions::new(120, 80), bounds), Dimensions::new(120, 80));
        assert_eq!(thumbnail(Dimensions::new(600, 300), bounds), Dimensions::new(300, 150));
    }

    #[test]
    fn test_metrics_scale() {
        let metrics = SlotMetrics::scaled(1.5);
        assert_eq!(metrics.character_box, Dimensions::new(480, 480));
        assert_eq!(metrics.cup_box, Dimensions::new(300, 480));
        assert_eq!(metrics.cup_fit, Fit::Thumbnail(Dimensions::new(285, 465)));
        assert_eq!(metrics.course_fit, Fit::Fill(Dimensions::new(450, 480)));
        assert_eq!(metrics.name_row_height, 60);
    }
}
