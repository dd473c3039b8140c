//! Application state and the scroll surface implementation
//!
//! [`Viewport`] is the host side of the animation contract: it implements
//! the surface capabilities the driver reads and writes through, and it
//! owns the frame queue the driver schedules into. [`App`] wires user
//! actions to `scroll_to` calls against the viewport.

use std::time::Instant;

use scrollkit_core::{
    scroll_to, AppConfig, Easing, EasingCurve, ElementGeometry, FrameScheduler, ScrollAnimation,
    ScrollSurface,
};

use crate::document::{Document, DocumentLayout};

/// Scrollable view over the laid-out document.
///
/// Offsets are fractional rows; rendering rounds them to cells. Writes
/// clamp to the valid scroll range, the way any real surface does.
#[derive(Debug, Default)]
pub struct Viewport {
    offset: f64,
    height: f64,
    content_height: f64,
    pending: Vec<ScrollAnimation>,
}

impl Viewport {
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// True while scroll animations are queued; the run loop uses this
    /// to switch to the animation tick rate.
    pub fn is_animating(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Nominal end offset of the most recently queued animation, if any.
    pub fn pending_target(&self) -> Option<f64> {
        self.pending.last().map(ScrollAnimation::target)
    }

    /// Update view and content dimensions, re-clamping the offset.
    pub fn resize(&mut self, height: f64, content_height: f64) {
        self.height = height;
        self.content_height = content_height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    fn max_offset(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }

    /// Step every queued animation once for the frame at `now_ms`,
    /// in queue order, and keep the ones that want another frame.
    pub fn pump(&mut self, now_ms: f64) {
        if self.pending.is_empty() {
            return;
        }
        let mut frames = std::mem::take(&mut self.pending);
        frames.retain_mut(|animation| animation.step(self, now_ms));
        // Animations queued during the steps run from the next frame on.
        frames.append(&mut self.pending);
        self.pending = frames;
    }
}

impl ScrollSurface for Viewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scrollable_height(&self) -> f64 {
        self.content_height
    }
}

impl FrameScheduler for Viewport {
    fn request_frame(&mut self, animation: ScrollAnimation) {
        self.pending.push(animation);
    }
}

/// A row in the laid-out document, positioned relative to the viewport.
struct RowAnchor {
    top: f64,
}

impl ElementGeometry for RowAnchor {
    fn top(&self) -> Option<f64> {
        Some(self.top)
    }
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub document: Document,
    pub layout: DocumentLayout,
    pub viewport: Viewport,
    /// Selected section in the outline panel
    pub selected_section: usize,
    /// Easing curve used for the next jump ('e' cycles it)
    pub easing: EasingCurve,
    pub status_message: Option<String>,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    started: Instant,
    layout_width: u16,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let easing = config.scroll.easing;
        Self {
            config,
            document: Document::sample(),
            layout: DocumentLayout::default(),
            viewport: Viewport::default(),
            selected_section: 0,
            easing,
            status_message: None,
            pending_key: None,
            should_quit: false,
            started: Instant::now(),
            layout_width: 0,
        }
    }

    /// Milliseconds since startup; the frame timestamp source.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Relayout for the document panel's text area and update the
    /// viewport dimensions. Called from the draw closure every frame so
    /// resizes are picked up for free.
    pub fn resize(&mut self, text_width: u16, view_height: u16) {
        if text_width != self.layout_width {
            self.layout = self.document.layout(text_width);
            self.layout_width = text_width;
            tracing::debug!(
                "document relayout: width {} -> {} rows",
                text_width,
                self.layout.rows.len()
            );
        }
        self.viewport.resize(view_height as f64, self.layout.height());
    }

    /// Advance queued scroll animations for this frame.
    pub fn pump_frames(&mut self) {
        let now = self.now_ms();
        self.viewport.pump(now);
    }

    pub fn move_up(&mut self) {
        self.selected_section = self.selected_section.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = self.document.sections.len().saturating_sub(1);
        self.selected_section = (self.selected_section + 1).min(last);
    }

    /// Glide to the heading of the selected section.
    pub fn jump_to_selected(&mut self) {
        let Some(row) = self
            .layout
            .anchors
            .get(self.selected_section)
            .map(|anchor| anchor.row)
        else {
            return;
        };
        self.jump_to_row(row);
    }

    pub fn jump_to_top(&mut self) {
        self.jump_to_row(0);
    }

    pub fn jump_to_bottom(&mut self) {
        let last = self.layout.rows.len().saturating_sub(1);
        self.jump_to_row(last);
    }

    fn jump_to_row(&mut self, row: usize) {
        // The driver expects geometry relative to the viewport.
        let anchor = RowAnchor {
            top: row as f64 - self.viewport.offset(),
        };
        let mut options = self.config.scroll.options();
        options.easing = Easing::Curve(self.easing);
        scroll_to(&mut self.viewport, Some(&anchor), options);
    }

    pub fn cycle_easing(&mut self) {
        let current = EasingCurve::ALL
            .iter()
            .position(|&c| c == self.easing)
            .unwrap_or(0);
        self.easing = EasingCurve::ALL[(current + 1) % EasingCurve::ALL.len()];
        self.set_status(format!("Easing: {}", self.easing));
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
