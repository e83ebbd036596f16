//! Blit execution
//!
//! Thin boundary over the host drawing surface: resize the destination
//! when its dimensions changed, clear the target rectangle, copy the
//! source rectangle once. All pixel work belongs to the [`Surface`]
//! implementation; this module only sequences the calls.

use log::trace;

use crate::region::{PixelRect, RenderRegion};

/// Host 2-D drawing surface contract
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reallocate to the given dimensions, discarding contents
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the rectangle to transparent
    fn clear(&mut self, rect: PixelRect);

    /// Copy `src` from `source` onto `dest` of self. The rectangle pair
    /// encodes any scaling; implementations apply no extra transform.
    fn copy_region(&mut self, source: &Self, src: PixelRect, dest: PixelRect);
}

/// Copy a render region from `source` onto `dest`.
///
/// The destination surface is resized only when its dimensions differ
/// from the destination rectangle, so steady-state pans reuse the
/// existing allocation. A zero-area region is a no-op.
pub fn blit<S: Surface>(region: &RenderRegion, source: &S, dest: &mut S) {
    if region.source.is_empty() || region.dest.is_empty() {
        trace!("blit skipped: empty region");
        return;
    }

    if dest.width() != region.dest.width || dest.height() != region.dest.height {
        dest.resize(region.dest.width, region.dest.height);
    }
    dest.clear(region.dest);
    dest.copy_region(source, region.source, region.dest);
}

/// In-memory RGBA surface for tests and headless rendering.
///
/// Pixel copies use nearest-neighbor sampling: sprite art wants hard
/// texel edges, and the rectangle pair already encodes the scale.
pub struct PixelSurface {
    buf: image::RgbaImage,
}

impl PixelSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buf: image::RgbaImage::new(width, height),
        }
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buf.get_pixel(x, y).0
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.buf.put_pixel(x, y, image::Rgba(rgba));
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.buf.width()
    }

    fn height(&self) -> u32 {
        self.buf.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.buf = image::RgbaImage::new(width, height);
    }

    fn clear(&mut self, rect: PixelRect) {
        let x_end = rect.x.saturating_add(rect.width).min(self.buf.width());
        let y_end = rect.y.saturating_add(rect.height).min(self.buf.height());

        for y in rect.y.min(y_end)..y_end {
            for x in rect.x.min(x_end)..x_end {
                self.buf.put_pixel(x, y, image::Rgba([0, 0, 0, 0]));
            }
        }
    }

    fn copy_region(&mut self, source: &Self, src: PixelRect, dest: PixelRect) {
        if src.is_empty() || dest.is_empty() {
            return;
        }

        let x_end = dest.x.saturating_add(dest.width).min(self.buf.width());
        let y_end = dest.y.saturating_add(dest.height).min(self.buf.height());

        for dy in dest.y.min(y_end)..y_end {
            for dx in dest.x.min(x_end)..x_end {
                let sx = src.x + (u64::from(dx - dest.x) * u64::from(src.width) / u64::from(dest.width)) as u32;
                let sy = src.y + (u64::from(dy - dest.y) * u64::from(src.height) / u64::from(dest.height)) as u32;
                if sx < source.buf.width() && sy < source.buf.height() {
                    let px = *source.buf.get_pixel(sx, sy);
                    self.buf.put_pixel(dx, dy, px);
                }
            }
        }
    }
}
