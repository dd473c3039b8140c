//! Host capabilities consumed by the animation driver
//!
//! The driver owns no scroll state, geometry, or clock of its own; it
//! reads and writes through these traits. Any browsing surface that can
//! answer them (a terminal viewport, a canvas, a test double) can host
//! scroll animations.

use crate::driver::ScrollAnimation;

/// A vertically scrollable browsing surface.
pub trait ScrollSurface {
    /// Current scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Move the surface to `offset`. The surface may clamp the write to
    /// its own scroll range.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Total scrollable height of the content.
    fn scrollable_height(&self) -> f64;
}

/// Bounding geometry of a scroll target.
pub trait ElementGeometry {
    /// Top edge of the element relative to the current viewport, or
    /// `None` when the element cannot report its geometry. The driver
    /// treats `None` as a silent no-op.
    fn top(&self) -> Option<f64>;
}

/// Frame-synchronized callback scheduling.
///
/// The host contract: at each frame boundary, step every queued animation
/// exactly once, in the order queued, passing the frame's timestamp; an
/// animation whose step returns `true` is re-queued for the following
/// frame. One pass per frame, serial, so steps of a single animation
/// never overlap and writes from concurrent animations interleave at
/// frame granularity.
pub trait FrameScheduler {
    /// Queue `animation` to be stepped at the next frame boundary.
    fn request_frame(&mut self, animation: ScrollAnimation);
}
