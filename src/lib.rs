//! Viewport and render-region core for a texture-pack sprite editor.
//!
//! Converts pan/zoom state into a visible image-space rectangle, expands
//! it into a buffered render region, decides when a redraw is actually
//! worth doing, culls off-screen drawing operations and bounds the memory
//! used by cached derived images with an LRU policy. The painting engine,
//! the host canvas and all I/O live outside this crate and are reached
//! through the [`blit::Surface`] and [`culling::Spatial`] traits.

pub mod blit;
pub mod cache;
pub mod culling;
pub mod diagnostics;
pub mod region;
pub mod scheduler;
pub mod tuning;
pub mod viewport;
pub mod zoom;

pub use blit::{PixelSurface, Surface, blit};
pub use cache::{DEFAULT_CACHE_CAPACITY, RenderCache, ThumbnailCache, ThumbnailKey};
pub use culling::{MARGIN_SCALE, Spatial, cull, cull_with_margin_scale};
pub use diagnostics::{RegionSavings, estimate_savings};
pub use region::{DEFAULT_BUFFER_RATIO, PixelRect, RenderRegion};
pub use scheduler::{RedrawScheduler, RedrawState};
pub use tuning::{RenderTuning, TuningError};
pub use viewport::{CanvasSize, ImageSize, Pan, Viewport};
pub use zoom::{PanDirection, ZoomPan};
