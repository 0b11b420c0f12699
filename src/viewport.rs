//! Responsive scaling of the page canvas.
//!
//! The canvas is drawn at `zoom` pixels per document unit and then shrunk
//! by a responsive `scale` so the paper plus its ruler fits the window.

use crate::constants::MAX_SCALE;
use crate::types::Page;
use std::time::{Duration, Instant};
use tracing::trace;

/// `min(windowWidth / (pageWidth * zoom + rulerHeight), 1)`.
///
/// Never upscales past native size; shrinks without a lower bound.
pub fn compute_scale(page_width: f64, ruler_height: f64, zoom: f64, window_width: f64) -> f64 {
    let paper_width = page_width * zoom + ruler_height;
    let scale = window_width / paper_width;
    if scale > MAX_SCALE { MAX_SCALE } else { scale }
}

/// Derived view state; recomputed, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub active_page: usize,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 0.0,
            active_page: 0,
        }
    }
}

impl ViewportState {
    /// The scale, if it describes a drawable canvas (`0 < scale <= 1`).
    pub fn renderable_scale(&self) -> Option<f64> {
        (self.scale.is_finite() && self.scale > 0.0 && self.scale <= MAX_SCALE).then_some(self.scale)
    }
}

/// Old and new scale after a recompute. Dependents resync their caches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleChange {
    pub previous: f64,
    pub current: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    state: ViewportState,
    window_width: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    pub fn set_window_width(&mut self, width: f64) {
        self.window_width = width;
    }

    pub fn set_active_page(&mut self, index: usize) {
        self.state.active_page = index;
    }

    /// Recompute the scale from the active page (or the first sized page
    /// when the active one has no size). Without any sized page the scale
    /// drops to zero, meaning "nothing to render".
    pub fn recompute(&mut self, pages: &[Page], ruler_height: f64, zoom: f64) -> ScaleChange {
        let page_width = pages
            .get(self.state.active_page)
            .and_then(|p| p.size)
            .or_else(|| pages.iter().find_map(|p| p.size))
            .map(|s| s.width);

        let previous = self.state.scale;
        let current = match page_width {
            Some(w) => compute_scale(w, ruler_height, zoom, self.window_width),
            None => 0.0,
        };
        self.state.scale = current;
        trace!(previous, current, window_width = self.window_width, "Scale recomputed");
        ScaleChange { previous, current }
    }
}

/// Trailing-edge debouncer for window resize events.
///
/// The clock is passed in by the caller so the quiet window is testable.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(Instant, f64)>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a resize; restarts the quiet window.
    pub fn schedule(&mut self, now: Instant, width: f64) {
        self.pending = Some((now, width));
    }

    /// The latest width once the quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let (at, width) = self.pending?;
        if now.saturating_duration_since(at) >= self.quiet {
            self.pending = None;
            Some(width)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
