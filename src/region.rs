//! Buffered render regions
//!
//! Expands a viewport into an integer-aligned source/destination
//! rectangle pair. The buffer margin pre-renders around the visible area
//! so the next small pan lands on pixels that already exist.

use serde::{Deserialize, Serialize};

use crate::viewport::{ImageSize, Viewport};

/// Default buffer margin per axis, as a fraction of the viewport extent
pub const DEFAULT_BUFFER_RATIO: f32 = 0.2;

/// Integer-aligned rectangle in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the rectangle covers no pixels
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel area
    #[must_use]
    pub const fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A buffered, bounds-clamped source/destination rectangle pair.
///
/// `source` is the image-space rectangle to copy. It always contains the
/// viewport it was expanded from, intersected with the image bounds.
/// `dest` defaults to an origin-anchored copy of the source extents;
/// callers drawing into a sub-area of a larger surface override it with
/// [`RenderRegion::with_dest_origin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRegion {
    pub source: PixelRect,
    pub dest: PixelRect,
}

impl RenderRegion {
    /// Expand a viewport by `buffer_ratio` per axis and clamp to the
    /// image bounds.
    ///
    /// Rounding is fixed: floor on the lower bound, ceil on the span.
    /// The region can overshoot the exact buffered viewport by up to a
    /// pixel but never undershoots it.
    #[must_use]
    pub fn expand(viewport: &Viewport, image: ImageSize, buffer_ratio: f32) -> Self {
        let buffer_x = viewport.width * buffer_ratio;
        let buffer_y = viewport.height * buffer_ratio;

        let x = (viewport.x - buffer_x).floor().max(0.0) as u32;
        let y = (viewport.y - buffer_y).floor().max(0.0) as u32;
        let width = ((viewport.width + 2.0 * buffer_x).ceil().max(0.0) as u32)
            .min(image.width.saturating_sub(x));
        let height = ((viewport.height + 2.0 * buffer_y).ceil().max(0.0) as u32)
            .min(image.height.saturating_sub(y));

        let source = PixelRect::new(x, y, width, height);
        Self {
            source,
            dest: PixelRect::new(0, 0, width, height),
        }
    }

    /// Place the destination rectangle at an offset inside a larger surface
    #[must_use]
    pub fn with_dest_origin(mut self, x: u32, y: u32) -> Self {
        self.dest.x = x;
        self.dest.y = y;
        self
    }
}
