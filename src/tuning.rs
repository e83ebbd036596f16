//! Render heuristics configuration
//!
//! The buffer and threshold constants encode a trade-off between a few
//! pixels of staleness at the buffered-region edges and recomputing on
//! every mouse-move tick. They are empirical defaults, not derived from
//! a measured frame budget, so every one of them is overridable.

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::culling::MARGIN_SCALE;
use crate::region::DEFAULT_BUFFER_RATIO;

/// Relative viewport-delta dead-zone for redraw decisions
pub const DEFAULT_REDRAW_THRESHOLD: f32 = 0.1;
/// Scale delta that always qualifies for a redraw
pub const DEFAULT_SCALE_THRESHOLD: f32 = 0.01;

/// Tunable render heuristics, usually deserialized from user settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderTuning {
    /// Buffer margin around the viewport, as a fraction of its extent
    #[serde(default = "default_buffer_ratio")]
    pub buffer_ratio: f32,

    /// Viewport delta, relative to the incoming extent, below which a
    /// redraw is skipped
    #[serde(default = "default_redraw_threshold")]
    pub redraw_threshold: f32,

    /// Scale delta above which a redraw always happens
    #[serde(default = "default_scale_threshold")]
    pub scale_threshold: f32,

    /// Multiplier applied to tool margins when culling
    #[serde(default = "default_margin_scale")]
    pub margin_scale: f32,

    /// Entry capacity for the render cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_buffer_ratio() -> f32 {
    DEFAULT_BUFFER_RATIO
}

fn default_redraw_threshold() -> f32 {
    DEFAULT_REDRAW_THRESHOLD
}

fn default_scale_threshold() -> f32 {
    DEFAULT_SCALE_THRESHOLD
}

fn default_margin_scale() -> f32 {
    MARGIN_SCALE
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for RenderTuning {
    fn default() -> Self {
        Self {
            buffer_ratio: default_buffer_ratio(),
            redraw_threshold: default_redraw_threshold(),
            scale_threshold: default_scale_threshold(),
            margin_scale: default_margin_scale(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Rejected tuning values
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("buffer ratio must be finite and non-negative, got {0}")]
    BufferRatio(f32),

    #[error("redraw threshold must be finite and non-negative, got {0}")]
    RedrawThreshold(f32),

    #[error("scale threshold must be finite and non-negative, got {0}")]
    ScaleThreshold(f32),

    #[error("margin scale must be finite and non-negative, got {0}")]
    MarginScale(f32),

    #[error("cache capacity must be at least 1")]
    CacheCapacity,
}

impl RenderTuning {
    /// Check every field before the values reach the render path
    pub fn validate(&self) -> Result<(), TuningError> {
        fn finite_non_negative(v: f32) -> bool {
            v.is_finite() && v >= 0.0
        }

        if !finite_non_negative(self.buffer_ratio) {
            return Err(TuningError::BufferRatio(self.buffer_ratio));
        }
        if !finite_non_negative(self.redraw_threshold) {
            return Err(TuningError::RedrawThreshold(self.redraw_threshold));
        }
        if !finite_non_negative(self.scale_threshold) {
            return Err(TuningError::ScaleThreshold(self.scale_threshold));
        }
        if !finite_non_negative(self.margin_scale) {
            return Err(TuningError::MarginScale(self.margin_scale));
        }
        if self.cache_capacity == 0 {
            return Err(TuningError::CacheCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RenderTuning::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let tuning = RenderTuning {
            buffer_ratio: -0.1,
            ..RenderTuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::BufferRatio(_))
        ));

        let tuning = RenderTuning {
            redraw_threshold: f32::NAN,
            ..RenderTuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::RedrawThreshold(_))
        ));

        let tuning = RenderTuning {
            cache_capacity: 0,
            ..RenderTuning::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::CacheCapacity)));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let tuning: RenderTuning = serde_json::from_str("{}").unwrap();
        assert_eq!(tuning, RenderTuning::default());

        let tuning: RenderTuning = serde_json::from_str(r#"{"buffer_ratio": 0.5}"#).unwrap();
        assert!((tuning.buffer_ratio - 0.5).abs() < 1e-6);
        assert!((tuning.redraw_threshold - DEFAULT_REDRAW_THRESHOLD).abs() < 1e-6);
        assert_eq!(tuning.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }
}
