//! Zoom and pan input state for the sprite canvas
//!
//! Tracks the zoom percentage and the pan offset applied on top of the
//! centered image placement. The output pair feeds
//! [`Viewport::compute`](crate::viewport::Viewport::compute).

use serde::{Deserialize, Serialize};

use crate::viewport::Pan;

/// Pan direction for keyboard/scroll navigation, named by the edge of
/// the image being revealed
#[derive(Clone, Copy, Debug)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Returns true if the direction is vertical (Up or Down)
    #[must_use]
    pub fn vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Zoom percentage and pan offset for one document view
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomPan {
    /// Zoom percentage (100.0 = one texel per surface pixel)
    pub percent: f32,

    /// Pan offset in surface pixels, relative to the centered placement
    pub pan: Pan,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self {
            percent: 100.0,
            pan: Pan::default(),
        }
    }
}

impl ZoomPan {
    /// Zoom in rate multiplier per step - 10%
    pub const ZOOM_IN_RATE: f32 = 1.1;
    /// Zoom out rate divisor per step - 5%
    pub const ZOOM_OUT_RATE: f32 = 1.05;
    /// Minimum zoom percentage
    pub const MIN_PERCENT: f32 = 10.0;
    /// Maximum zoom percentage; single texels of a 16x16 sprite still
    /// need to fill a good part of the screen
    pub const MAX_PERCENT: f32 = 6400.0;
    /// Base pan step in surface pixels
    pub const BASE_PAN_STEP: f32 = 32.0;

    /// Effective scale factor for viewport computation
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.percent / 100.0
    }

    /// Zoom in by one step
    pub fn step_in(&mut self) {
        self.percent = Self::clamp_percent(self.percent * Self::ZOOM_IN_RATE);
    }

    /// Zoom out by one step
    pub fn step_out(&mut self) {
        self.percent = Self::clamp_percent(self.percent / Self::ZOOM_OUT_RATE);
    }

    /// Pan one step in the given direction. The step shrinks as zoom
    /// grows, for finer control over magnified texels.
    pub fn pan_step(&mut self, direction: PanDirection) {
        let step = (Self::BASE_PAN_STEP / self.scale()).max(1.0);
        match direction {
            PanDirection::Up => self.pan.y += step,
            PanDirection::Down => self.pan.y -= step,
            PanDirection::Left => self.pan.x += step,
            PanDirection::Right => self.pan.x -= step,
        }
    }

    /// Back to 100% centered
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp percent to the valid range, handling NaN/Inf
    #[must_use]
    pub fn clamp_percent(percent: f32) -> f32 {
        if !percent.is_finite() {
            100.0
        } else {
            percent.clamp(Self::MIN_PERCENT, Self::MAX_PERCENT)
        }
    }
}
