//! Visible-viewport geometry
//!
//! Maps container size, image size, zoom and pan offset to the visible
//! sub-rectangle of the source image, in image-space units. All functions
//! here are total: degenerate inputs clamp to a zero-size viewport
//! instead of failing, so the render path never has to branch on errors.

use serde::{Deserialize, Serialize};

/// Host canvas dimensions in surface pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Source image dimensions in image pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Pan offset in surface pixels, applied on top of the centered placement
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pan {
    pub x: f32,
    pub y: f32,
}

impl Pan {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The visible sub-rectangle of the source image, in image-space units.
///
/// A new value replaces the old one on every pan/zoom/resize event;
/// nothing mutates a viewport in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge in image pixels, never negative
    pub x: f32,
    /// Top edge in image pixels, never negative
    pub y: f32,
    /// Visible width in image pixels
    pub width: f32,
    /// Visible height in image pixels
    pub height: f32,
    /// Effective zoom factor (zoom percent / 100)
    pub scale: f32,
}

impl Viewport {
    /// Compute the visible image-space rectangle.
    ///
    /// The image is centered in the container and then shifted by `pan`.
    /// When the displayed image fits inside the container the whole image
    /// is visible and the viewport saturates at the image extents. A
    /// zero, negative or non-finite zoom yields a zero-size viewport and
    /// the downstream blit becomes a no-op.
    #[must_use]
    pub fn compute(container: CanvasSize, image: ImageSize, zoom_percent: f32, pan: Pan) -> Self {
        let scale = zoom_percent / 100.0;
        if !scale.is_finite() || scale <= 0.0 {
            return Self {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                scale: 0.0,
            };
        }

        let display_w = image.width as f32 * scale;
        let display_h = image.height as f32 * scale;

        // Image top-left in container space
        let img_left = (container.width - display_w) / 2.0 + pan.x;
        let img_top = (container.height - display_h) / 2.0 + pan.y;

        let x = (-img_left / scale).max(0.0);
        let y = (-img_top / scale).max(0.0);
        let width = (image.width as f32 - x)
            .min(container.width / scale)
            .max(0.0);
        let height = (image.height as f32 - y)
            .min(container.height / scale)
            .max(0.0);

        Self {
            x,
            y,
            width,
            height,
            scale,
        }
    }

    /// True if the image-space point lies within the viewport padded by
    /// `margin` on every side
    #[must_use]
    pub fn contains(&self, x: f32, y: f32, margin: f32) -> bool {
        x >= self.x - margin
            && x <= self.x + self.width + margin
            && y >= self.y - margin
            && y <= self.y + self.height + margin
    }

    /// True if nothing is visible
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn large_atlas_centered_no_pan() {
        let vp = Viewport::compute(
            CanvasSize::new(800.0, 600.0),
            ImageSize::new(4096, 4096),
            100.0,
            Pan::default(),
        );

        // Centered placement puts the container in the middle of the atlas
        assert_close(vp.x, (4096.0 - 800.0) / 2.0);
        assert_close(vp.y, (4096.0 - 600.0) / 2.0);
        assert_close(vp.width, 800.0);
        assert_close(vp.height, 600.0);
        assert_close(vp.scale, 1.0);
    }

    #[test]
    fn small_sprite_fully_visible() {
        let vp = Viewport::compute(
            CanvasSize::new(800.0, 600.0),
            ImageSize::new(100, 50),
            100.0,
            Pan::default(),
        );

        assert_close(vp.x, 0.0);
        assert_close(vp.y, 0.0);
        assert_close(vp.width, 100.0);
        assert_close(vp.height, 50.0);
    }

    #[test]
    fn pan_shifts_visible_rect() {
        let container = CanvasSize::new(800.0, 600.0);
        let image = ImageSize::new(1600, 1200);

        let centered = Viewport::compute(container, image, 100.0, Pan::default());
        assert_close(centered.x, 400.0);
        assert_close(centered.y, 300.0);

        // Shifting the image right by 100 reveals 100 fewer left pixels
        let panned = Viewport::compute(container, image, 100.0, Pan::new(100.0, 0.0));
        assert_close(panned.x, 300.0);
        assert_close(panned.y, 300.0);
        assert_close(panned.width, 800.0);
    }

    #[test]
    fn zoom_shrinks_image_space_extent() {
        let vp = Viewport::compute(
            CanvasSize::new(800.0, 600.0),
            ImageSize::new(1600, 1200),
            200.0,
            Pan::default(),
        );

        assert_close(vp.scale, 2.0);
        assert_close(vp.width, 400.0);
        assert_close(vp.height, 300.0);
        assert_close(vp.x, 600.0);
    }

    #[test]
    fn degenerate_zoom_yields_empty_viewport() {
        for zoom in [0.0, -50.0, f32::NAN, f32::INFINITY] {
            let vp = Viewport::compute(
                CanvasSize::new(800.0, 600.0),
                ImageSize::new(4096, 4096),
                zoom,
                Pan::default(),
            );
            assert!(vp.is_empty(), "zoom {zoom} should produce an empty viewport");
        }
    }

    #[test]
    fn stays_within_image_bounds() {
        let container = CanvasSize::new(640.0, 480.0);
        let image = ImageSize::new(2048, 1024);

        for zoom in [25.0, 50.0, 100.0, 400.0] {
            for pan in [
                Pan::new(0.0, 0.0),
                Pan::new(5000.0, -5000.0),
                Pan::new(-5000.0, 5000.0),
            ] {
                let vp = Viewport::compute(container, image, zoom, pan);
                assert!(vp.x >= 0.0);
                assert!(vp.y >= 0.0);
                assert!(vp.width >= 0.0);
                assert!(vp.height >= 0.0);
                assert!(vp.x + vp.width <= image.width as f32 + EPS);
                assert!(vp.y + vp.height <= image.height as f32 + EPS);
            }
        }
    }

    #[test]
    fn contains_respects_margin() {
        let vp = Viewport {
            x: 100.0,
            y: 100.0,
            width: 50.0,
            height: 50.0,
            scale: 1.0,
        };

        assert!(vp.contains(125.0, 125.0, 0.0));
        assert!(!vp.contains(95.0, 125.0, 0.0));
        assert!(vp.contains(95.0, 125.0, 10.0));
        assert!(!vp.contains(85.0, 125.0, 10.0));
    }
}
