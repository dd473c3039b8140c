//! Frame-driven scroll animation
//!
//! [`scroll_to`] computes a clamped target offset for an element and
//! queues a single [`ScrollAnimation`] with the host's frame scheduler.
//! The call is fire-and-forget: it returns before any motion happens,
//! and the host steps the animation once per frame until the duration
//! elapses. Nothing here ever returns an error; every degraded input
//! (missing element, zero distance, non-positive duration) is absorbed
//! as a no-op or a degenerate single-step jump.

use std::fmt;

use tracing::debug;

use crate::easing::{Easing, EasingFn};
use crate::surface::{ElementGeometry, FrameScheduler, ScrollSurface};
use crate::timing;

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 500.0;

/// Per-call scroll configuration
#[derive(Debug, Clone)]
pub struct ScrollOptions {
    /// Total animation time in milliseconds. Non-positive values degrade
    /// to a single-step jump to the target.
    pub duration_ms: f64,
    /// Adjustment subtracted from the element's top edge before the
    /// target is computed (e.g. the height of a sticky header).
    pub offset: f64,
    /// Easing applied to the animation's progress.
    pub easing: Easing,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            offset: 0.0,
            easing: Easing::default(),
        }
    }
}

/// One in-flight scroll animation
///
/// Created by [`scroll_to`], stepped by the host once per frame. The
/// origin timestamp is taken from the first frame's timestamp, so the
/// first step always writes the starting offset back unchanged.
pub struct ScrollAnimation {
    start_ts: Option<f64>,
    from: f64,
    delta: f64,
    duration_ms: f64,
    easing: EasingFn,
}

impl ScrollAnimation {
    fn new(from: f64, delta: f64, duration_ms: f64, easing: EasingFn) -> Self {
        Self {
            start_ts: None,
            from,
            delta,
            duration_ms,
            easing,
        }
    }

    /// The nominal end offset of this animation.
    pub fn target(&self) -> f64 {
        self.from + self.delta
    }

    /// Advance one frame at `timestamp_ms` and write the interpolated
    /// offset to the surface. Returns `true` while another frame is
    /// wanted.
    ///
    /// There is no final snap: the last write is `from + delta * f(1)`,
    /// which equals the target only for easing functions that satisfy
    /// `f(1) = 1`.
    pub fn step<S>(&mut self, surface: &mut S, timestamp_ms: f64) -> bool
    where
        S: ScrollSurface + ?Sized,
    {
        let start = *self.start_ts.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - start;
        let eased = (self.easing)(timing::progress(elapsed, self.duration_ms));
        surface.set_scroll_offset(self.from + self.delta * eased);
        !timing::is_complete(elapsed, self.duration_ms)
    }
}

impl fmt::Debug for ScrollAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnimation")
            .field("start_ts", &self.start_ts)
            .field("from", &self.from)
            .field("delta", &self.delta)
            .field("duration_ms", &self.duration_ms)
            .finish_non_exhaustive()
    }
}

/// Smoothly scroll the surface to bring `element` into view.
///
/// The target is the element's top edge (adjusted by `options.offset`),
/// clamped so the surface never scrolls past the bottom of its content:
/// when less than one viewport of content remains below the element, the
/// target becomes the maximum scroll offset instead.
///
/// Returns immediately in all cases. A missing element, an element
/// without geometry, and a target equal to the current offset all leave
/// the surface untouched, with no frame requested.
pub fn scroll_to<H, E>(host: &mut H, element: Option<&E>, options: ScrollOptions)
where
    H: ScrollSurface + FrameScheduler,
    E: ElementGeometry + ?Sized,
{
    let Some(top) = element.and_then(|e| e.top()) else {
        return;
    };

    let current = host.scroll_offset();
    let element_y = current + (top - options.offset);

    let target = if host.scrollable_height() - element_y < host.viewport_height() {
        host.scrollable_height() - host.viewport_height()
    } else {
        element_y
    };

    let delta = target - current;
    if delta == 0.0 {
        return;
    }

    debug!(
        "scroll animation: {:.1} -> {:.1} over {}ms",
        current, target, options.duration_ms
    );

    let easing = options.easing.resolve();
    host.request_frame(ScrollAnimation::new(
        current,
        delta,
        options.duration_ms,
        easing,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingCurve;

    /// Surface double: records every offset write and queues frames in
    /// FIFO order, like a real host.
    struct TestSurface {
        offset: f64,
        viewport: f64,
        content: f64,
        writes: Vec<f64>,
        queued: Vec<ScrollAnimation>,
    }

    impl TestSurface {
        fn new(offset: f64, viewport: f64, content: f64) -> Self {
            Self {
                offset,
                viewport,
                content,
                writes: Vec::new(),
                queued: Vec::new(),
            }
        }

        /// Step all queued animations at each scripted timestamp,
        /// re-queueing the ones that want another frame.
        fn run_frames(&mut self, timestamps: &[f64]) {
            for &ts in timestamps {
                let mut pending = std::mem::take(&mut self.queued);
                pending.retain_mut(|animation| animation.step(self, ts));
                pending.append(&mut self.queued);
                self.queued = pending;
            }
        }
    }

    impl ScrollSurface for TestSurface {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: f64) {
            self.offset = offset;
            self.writes.push(offset);
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn scrollable_height(&self) -> f64 {
            self.content
        }
    }

    impl FrameScheduler for TestSurface {
        fn request_frame(&mut self, animation: ScrollAnimation) {
            self.queued.push(animation);
        }
    }

    struct Probe {
        top: Option<f64>,
    }

    impl ElementGeometry for Probe {
        fn top(&self) -> Option<f64> {
            self.top
        }
    }

    fn linear_options(duration_ms: f64) -> ScrollOptions {
        ScrollOptions {
            duration_ms,
            easing: Easing::Curve(EasingCurve::Linear),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_element_is_noop() {
        let mut surface = TestSurface::new(100.0, 800.0, 5000.0);
        scroll_to(&mut surface, Option::<&Probe>::None, ScrollOptions::default());
        assert!(surface.queued.is_empty());
        assert!(surface.writes.is_empty());
        assert_eq!(surface.offset, 100.0);
    }

    #[test]
    fn test_element_without_geometry_is_noop() {
        let mut surface = TestSurface::new(100.0, 800.0, 5000.0);
        let probe = Probe { top: None };
        scroll_to(&mut surface, Some(&probe), ScrollOptions::default());
        assert!(surface.queued.is_empty());
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_zero_delta_schedules_nothing() {
        let mut surface = TestSurface::new(1000.0, 800.0, 5000.0);
        // Element exactly at the top of the viewport: target == current.
        let probe = Probe { top: Some(0.0) };
        scroll_to(&mut surface, Some(&probe), ScrollOptions::default());
        assert!(surface.queued.is_empty());
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_target_clamps_near_document_bottom() {
        let mut surface = TestSurface::new(0.0, 800.0, 5200.0);
        // 5200 - 5000 = 200 < 800, so the raw target would leave empty
        // space below; clamp to 5200 - 800 = 4400.
        let probe = Probe { top: Some(5000.0) };
        scroll_to(&mut surface, Some(&probe), ScrollOptions::default());
        assert_eq!(surface.queued.len(), 1);
        assert_eq!(surface.queued[0].target(), 4400.0);
    }

    #[test]
    fn test_offset_shifts_target() {
        let mut surface = TestSurface::new(0.0, 800.0, 10_000.0);
        let probe = Probe { top: Some(500.0) };
        let options = ScrollOptions {
            offset: 80.0,
            ..Default::default()
        };
        scroll_to(&mut surface, Some(&probe), options);
        assert_eq!(surface.queued[0].target(), 420.0);
    }

    #[test]
    fn test_linear_animation_end_to_end() {
        let mut surface = TestSurface::new(0.0, 800.0, 10_000.0);
        let probe = Probe { top: Some(500.0) };
        scroll_to(&mut surface, Some(&probe), linear_options(500.0));
        assert_eq!(surface.queued.len(), 1);

        // Frame timestamps 0, 100, 250, 500 ms after the first frame.
        surface.run_frames(&[1000.0, 1100.0, 1250.0, 1500.0]);
        assert_eq!(surface.writes, vec![0.0, 100.0, 250.0, 500.0]);
        assert_eq!(surface.offset, 500.0);
        // Nothing re-queued after the final step.
        assert!(surface.queued.is_empty());
    }

    #[test]
    fn test_zero_duration_is_single_step_jump() {
        let mut surface = TestSurface::new(0.0, 800.0, 10_000.0);
        let probe = Probe { top: Some(300.0) };
        scroll_to(&mut surface, Some(&probe), linear_options(0.0));

        surface.run_frames(&[42.0]);
        assert_eq!(surface.writes, vec![300.0]);
        assert!(surface.queued.is_empty());
    }

    #[test]
    fn test_custom_easing_lands_where_it_lands() {
        let mut surface = TestSurface::new(0.0, 800.0, 10_000.0);
        let probe = Probe { top: Some(400.0) };
        let options = ScrollOptions {
            duration_ms: 100.0,
            easing: Easing::custom(|_| 0.5),
            ..Default::default()
        };
        scroll_to(&mut surface, Some(&probe), options);

        surface.run_frames(&[0.0, 100.0]);
        // f(1) != 1 is not corrected: the animation ends mid-way.
        assert_eq!(surface.offset, 200.0);
        assert!(surface.queued.is_empty());
    }

    #[test]
    fn test_concurrent_animations_last_write_wins() {
        let mut surface = TestSurface::new(0.0, 800.0, 10_000.0);
        let first = Probe { top: Some(100.0) };
        let second = Probe { top: Some(200.0) };
        scroll_to(&mut surface, Some(&first), linear_options(100.0));
        scroll_to(&mut surface, Some(&second), linear_options(100.0));
        assert_eq!(surface.queued.len(), 2);

        surface.run_frames(&[0.0, 50.0, 100.0]);
        // Each frame steps both animations in queue order; the second
        // one's write lands last and wins the frame.
        assert_eq!(surface.offset, 200.0);
        assert_eq!(surface.writes, vec![0.0, 0.0, 50.0, 100.0, 100.0, 200.0]);
        assert!(surface.queued.is_empty());
    }

    #[test]
    fn test_first_frame_sets_origin() {
        let mut surface = TestSurface::new(0.0, 800.0, 10_000.0);
        let probe = Probe { top: Some(500.0) };
        scroll_to(&mut surface, Some(&probe), linear_options(500.0));

        // An arbitrary first timestamp establishes t=0.
        surface.run_frames(&[987_654.0]);
        assert_eq!(surface.writes, vec![0.0]);
        assert_eq!(surface.queued.len(), 1);
    }
}
