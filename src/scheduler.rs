//! Redraw scheduling
//!
//! Decides whether a new viewport differs enough from the last rendered
//! one to be worth a re-render, and keeps the buffered render region of
//! the accepted viewport. The comparison is a relative dead-zone:
//! position and extent deltas are measured against the incoming
//! viewport's own extent, so the threshold tracks the zoom level and a
//! mouse-move tick at high zoom does not force redundant work.
//!
//! Callers must serialize `should_redraw`/`update`/`mark_dirty`/`reset`
//! on one logical thread; there is no internal synchronization.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::region::RenderRegion;
use crate::tuning::{RenderTuning, TuningError};
use crate::viewport::{ImageSize, Viewport};

/// Redraw decision state.
///
/// `Uninitialized` and `Dirty` force the next decision to be a full
/// redraw; `Clean` compares against the last accepted viewport.
/// Transitions are pure methods returning the next state, so a snapshot
/// can be serialized while debugging a misbehaving view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum RedrawState {
    /// No viewport accepted yet
    #[default]
    Uninitialized,
    /// Last accepted viewport with its buffered region
    Clean {
        last: Viewport,
        region: RenderRegion,
    },
    /// Forced redraw; stale values kept for callers still mid-draw
    Dirty {
        last: Option<Viewport>,
        region: Option<RenderRegion>,
    },
}

impl RedrawState {
    /// True unless the state holds a currently valid viewport
    #[must_use]
    pub fn needs_full_redraw(&self) -> bool {
        !matches!(self, Self::Clean { .. })
    }

    /// Transition into `Dirty`, keeping existing values as stale
    #[must_use]
    pub fn dirtied(self) -> Self {
        match self {
            Self::Uninitialized => Self::Dirty {
                last: None,
                region: None,
            },
            Self::Clean { last, region } => Self::Dirty {
                last: Some(last),
                region: Some(region),
            },
            dirty @ Self::Dirty { .. } => dirty,
        }
    }

    /// The `Clean` state for a freshly accepted viewport
    #[must_use]
    pub fn accepted(last: Viewport, region: RenderRegion) -> Self {
        Self::Clean { last, region }
    }

    /// Last accepted viewport, possibly stale in `Dirty`
    #[must_use]
    pub fn last_viewport(&self) -> Option<&Viewport> {
        match self {
            Self::Uninitialized => None,
            Self::Clean { last, .. } => Some(last),
            Self::Dirty { last, .. } => last.as_ref(),
        }
    }

    /// Last computed render region, possibly stale in `Dirty`
    #[must_use]
    pub fn render_region(&self) -> Option<&RenderRegion> {
        match self {
            Self::Uninitialized => None,
            Self::Clean { region, .. } => Some(region),
            Self::Dirty { region, .. } => region.as_ref(),
        }
    }
}

/// Stateful redraw scheduler: one per document view
#[derive(Clone, Debug, Default)]
pub struct RedrawScheduler {
    state: RedrawState,
    tuning: RenderTuning,
}

impl RedrawScheduler {
    /// Scheduler with the default tuning
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler with caller-supplied tuning, typically from settings
    pub fn with_tuning(tuning: RenderTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: RedrawState::Uninitialized,
            tuning,
        })
    }

    /// Whether `next` is worth a re-render.
    ///
    /// Always true before the first `update` and after `mark_dirty`.
    /// From `Clean`, true when any position or extent delta exceeds
    /// `redraw_threshold` of the incoming extent, or the scale moved by
    /// more than `scale_threshold`.
    #[must_use]
    pub fn should_redraw(&self, next: &Viewport) -> bool {
        let RedrawState::Clean { last, .. } = &self.state else {
            return true;
        };

        let t = self.tuning.redraw_threshold;
        let moved = (next.x - last.x).abs() > next.width * t
            || (next.y - last.y).abs() > next.height * t
            || (next.width - last.width).abs() > next.width * t
            || (next.height - last.height).abs() > next.height * t
            || (next.scale - last.scale).abs() > self.tuning.scale_threshold;

        if !moved {
            trace!("redraw skipped: viewport within dead-zone");
        }
        moved
    }

    /// Accept `viewport` and recompute the buffered render region
    pub fn update(&mut self, viewport: Viewport, image: ImageSize) {
        let region = RenderRegion::expand(&viewport, image, self.tuning.buffer_ratio);
        debug!(
            "render region updated: {}x{} at ({}, {})",
            region.source.width, region.source.height, region.source.x, region.source.y
        );
        self.state = RedrawState::accepted(viewport, region);
    }

    /// Force the next decision to redraw, e.g. after the image content
    /// changed under an unchanged viewport
    pub fn mark_dirty(&mut self) {
        self.state = std::mem::take(&mut self.state).dirtied();
    }

    /// Drop all state, as when the document is replaced
    pub fn reset(&mut self) {
        self.state = RedrawState::Uninitialized;
    }

    /// Last computed region, or `None` when nothing has been accepted
    /// yet; `None` means "nothing to draw", not an error
    #[must_use]
    pub fn render_region(&self) -> Option<&RenderRegion> {
        self.state.render_region()
    }

    /// Last accepted viewport
    #[must_use]
    pub fn last_viewport(&self) -> Option<&Viewport> {
        self.state.last_viewport()
    }

    /// Current decision state, snapshot-friendly
    #[must_use]
    pub fn state(&self) -> &RedrawState {
        &self.state
    }

    #[must_use]
    pub fn tuning(&self) -> &RenderTuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(x: f32, y: f32) -> Viewport {
        Viewport {
            x,
            y,
            width: 400.0,
            height: 300.0,
            scale: 1.0,
        }
    }

    const IMAGE: ImageSize = ImageSize::new(2048, 2048);

    #[test]
    fn uninitialized_always_redraws() {
        let scheduler = RedrawScheduler::new();
        assert!(scheduler.should_redraw(&viewport(0.0, 0.0)));
        assert!(scheduler.render_region().is_none());
        assert!(scheduler.state().needs_full_redraw());
    }

    #[test]
    fn small_pan_stays_in_dead_zone() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(500.0, 500.0), IMAGE);

        // 400 * 0.1 = 40 pixels of slack per axis
        assert!(!scheduler.should_redraw(&viewport(530.0, 500.0)));
        assert!(!scheduler.should_redraw(&viewport(500.0, 525.0)));
        assert!(!scheduler.state().needs_full_redraw());
    }

    #[test]
    fn large_pan_triggers_redraw() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(500.0, 500.0), IMAGE);

        assert!(scheduler.should_redraw(&viewport(545.0, 500.0)));
        assert!(scheduler.should_redraw(&viewport(500.0, 535.0)));
    }

    #[test]
    fn scale_change_triggers_redraw() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(500.0, 500.0), IMAGE);

        let mut zoomed = viewport(500.0, 500.0);
        zoomed.scale = 1.02;
        assert!(scheduler.should_redraw(&zoomed));

        let mut barely = viewport(500.0, 500.0);
        barely.scale = 1.005;
        assert!(!scheduler.should_redraw(&barely));
    }

    #[test]
    fn mark_dirty_forces_redraw_and_keeps_stale_region() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(500.0, 500.0), IMAGE);
        let stale = *scheduler.render_region().unwrap();

        scheduler.mark_dirty();

        assert!(scheduler.should_redraw(&viewport(500.0, 500.0)));
        assert!(scheduler.state().needs_full_redraw());
        assert_eq!(scheduler.render_region(), Some(&stale));
        assert!(scheduler.last_viewport().is_some());
    }

    #[test]
    fn update_clears_dirty() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.mark_dirty();
        scheduler.update(viewport(100.0, 100.0), IMAGE);

        assert!(!scheduler.state().needs_full_redraw());
        assert!(!scheduler.should_redraw(&viewport(100.0, 100.0)));
    }

    #[test]
    fn reset_returns_to_uninitialized() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(100.0, 100.0), IMAGE);
        scheduler.reset();

        assert_eq!(scheduler.state(), &RedrawState::Uninitialized);
        assert!(scheduler.render_region().is_none());
        assert!(scheduler.last_viewport().is_none());
    }

    #[test]
    fn update_region_uses_buffer_ratio() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(500.0, 500.0), IMAGE);

        let region = scheduler.render_region().unwrap();
        // 400 * 0.2 = 80 buffer per side, 300 * 0.2 = 60
        assert_eq!(region.source.x, 420);
        assert_eq!(region.source.y, 440);
        assert_eq!(region.source.width, 560);
        assert_eq!(region.source.height, 420);
    }

    #[test]
    fn state_snapshot_round_trips_through_json() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.update(viewport(500.0, 500.0), IMAGE);

        let json = serde_json::to_string(scheduler.state()).unwrap();
        let restored: RedrawState = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, scheduler.state());
    }
}
