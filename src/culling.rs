//! Operation culling
//!
//! Restricts a spatial operation log to the operations that can affect
//! the visible region, so per-frame replay cost tracks what is on screen
//! rather than document history size.

use crate::viewport::Viewport;

/// Multiplier applied to a tool margin: once for the brush footprint
/// reaching past its center point, once as a pad against partial overlap
/// at the viewport edge.
pub const MARGIN_SCALE: f32 = 2.0;

/// Image-space position of a drawing operation.
///
/// The culler reads nothing else; whatever payload the painting engine
/// attaches rides along untouched.
pub trait Spatial {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

impl<T: Spatial + ?Sized> Spatial for &T {
    fn x(&self) -> f32 {
        (**self).x()
    }

    fn y(&self) -> f32 {
        (**self).y()
    }
}

/// Keep the operations whose point lies within the viewport padded by
/// `tool_margin * MARGIN_SCALE` on every side.
///
/// Pure filter: no side effects, empty input yields empty output, and a
/// zero margin is an exact viewport membership test.
pub fn cull<I>(ops: I, viewport: Viewport, tool_margin: f32) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Spatial,
{
    cull_with_margin_scale(ops, viewport, tool_margin, MARGIN_SCALE)
}

/// [`cull`] with an explicit margin multiplier, for tuned callers
pub fn cull_with_margin_scale<I>(
    ops: I,
    viewport: Viewport,
    tool_margin: f32,
    margin_scale: f32,
) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Spatial,
{
    let margin = tool_margin * margin_scale;
    ops.into_iter()
        .filter(move |op| viewport.contains(op.x(), op.y(), margin))
}
