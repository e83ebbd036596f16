//! Render-cost telemetry
//!
//! Informational estimates of how much work viewport rendering saves
//! over full-image rendering. Hosts put these in logs and status lines;
//! nothing downstream makes control decisions from them.

use log::debug;

/// Estimated saving from rendering a viewport instead of the full image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionSavings {
    /// Pixels not rendered per frame
    pub pixel_reduction: u64,
    /// Share of the full image skipped, 0..=100
    pub percentage_saved: f32,
    /// Full-image pixel cost over viewport pixel cost
    pub estimated_speedup: f32,
}

/// Compare full-image pixel cost against viewport pixel cost.
///
/// An empty viewport reports an infinite speedup; a viewport covering
/// the whole image reports zero savings. Both are fine for a log line.
#[must_use]
pub fn estimate_savings(
    full_w: u32,
    full_h: u32,
    viewport_w: u32,
    viewport_h: u32,
) -> RegionSavings {
    let full = u64::from(full_w) * u64::from(full_h);
    let viewport = u64::from(viewport_w) * u64::from(viewport_h);
    let pixel_reduction = full.saturating_sub(viewport);

    let percentage_saved = if full == 0 {
        0.0
    } else {
        pixel_reduction as f32 / full as f32 * 100.0
    };
    let estimated_speedup = if viewport == 0 {
        f32::INFINITY
    } else {
        full as f32 / viewport as f32
    };

    debug!(
        "viewport rendering saves {percentage_saved:.1}% ({pixel_reduction} px, ~{estimated_speedup:.1}x)"
    );

    RegionSavings {
        pixel_reduction,
        percentage_saved,
        estimated_speedup,
    }
}
