//! Per-page snapping guides.
//!
//! Guides are placed by dragging out of the rulers and are stored as raw
//! screen positions in the ruler container (unscaled, ruler offset
//! included). They live only for the editing session.
//!
//! Three views of the same guide are exposed, and callers must not mix them:
//! - `raw_guides` / `display_positions`: container pixels, before and after
//!   responsive scaling
//! - `get_guides`: document units, for snap computation
//! - `guide_lines` / `snap_guides`: screen lines handed to the gesture layer

use crate::input::SnapGuides;
use crate::input::coords::{CoordinateConverter, to_doc, to_screen};
use tracing::{debug, trace};

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideAxis {
    /// A horizontal line at some y
    Horizontal,
    /// A vertical line at some x
    Vertical,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideSet {
    horizontal: Vec<f64>,
    vertical: Vec<f64>,
    display_horizontal: Vec<f64>,
    display_vertical: Vec<f64>,
}

impl GuideSet {
    fn raw(&self, axis: GuideAxis) -> &[f64] {
        match axis {
            GuideAxis::Horizontal => &self.horizontal,
            GuideAxis::Vertical => &self.vertical,
        }
    }

    fn raw_mut(&mut self, axis: GuideAxis) -> &mut Vec<f64> {
        match axis {
            GuideAxis::Horizontal => &mut self.horizontal,
            GuideAxis::Vertical => &mut self.vertical,
        }
    }

    fn display(&self, axis: GuideAxis) -> &[f64] {
        match axis {
            GuideAxis::Horizontal => &self.display_horizontal,
            GuideAxis::Vertical => &self.display_vertical,
        }
    }

    fn resync(&mut self, scale: f64) {
        let display = |g: &f64| CoordinateConverter::delta_screen_to_display(*g, scale);
        self.display_horizontal = self.horizontal.iter().map(display).collect();
        self.display_vertical = self.vertical.iter().map(display).collect();
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct GuideRegistry {
    pages: Vec<GuideSet>,
    zoom: f64,
    ruler_height: f64,
    scale: f64,
}

impl GuideRegistry {
    pub fn new(zoom: f64, ruler_height: f64) -> Self {
        Self {
            pages: Vec::new(),
            zoom,
            ruler_height,
            scale: 1.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Match the page list. New pages start without guides; guides of
    /// removed trailing pages are dropped.
    pub fn sync_pages(&mut self, count: usize) {
        if count != self.pages.len() {
            trace!(from = self.pages.len(), to = count, "Guide pages resized");
        }
        self.pages.resize_with(count, GuideSet::default);
    }

    /// Place a guide at a raw container position. Positions on the ruler
    /// itself (or non-finite ones) are rejected.
    pub fn add_guide(&mut self, page: usize, axis: GuideAxis, raw: f64) -> bool {
        if !raw.is_finite() || raw < self.ruler_height {
            return false;
        }
        let scale = self.scale;
        let Some(set) = self.pages.get_mut(page) else {
            return false;
        };
        let guides = set.raw_mut(axis);
        let at = guides.partition_point(|g| *g < raw);
        guides.insert(at, raw);
        set.resync(scale);
        debug!(page, ?axis, raw, "Guide added");
        true
    }

    /// Place a guide from a pointer position in scaled display pixels.
    pub fn add_guide_at_display(&mut self, page: usize, axis: GuideAxis, display: f64) -> bool {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return false;
        }
        let raw = CoordinateConverter::delta_display_to_screen(display, self.scale);
        self.add_guide(page, axis, raw)
    }

    /// Remove the guide at `index` in ascending order.
    pub fn remove_guide(&mut self, page: usize, axis: GuideAxis, index: usize) -> Option<f64> {
        let scale = self.scale;
        let set = self.pages.get_mut(page)?;
        let guides = set.raw_mut(axis);
        if index >= guides.len() {
            return None;
        }
        let removed = guides.remove(index);
        set.resync(scale);
        debug!(page, ?axis, removed, "Guide removed");
        Some(removed)
    }

    pub fn raw_guides(&self, page: usize, axis: GuideAxis) -> &[f64] {
        self.pages.get(page).map(|s| s.raw(axis)).unwrap_or(&[])
    }

    /// Guide positions in scaled display pixels, as drawn on the rulers.
    pub fn display_positions(&self, page: usize, axis: GuideAxis) -> &[f64] {
        self.pages.get(page).map(|s| s.display(axis)).unwrap_or(&[])
    }

    /// Guides in document units: `toDoc(raw, zoom, rulerHeight)`.
    pub fn get_guides(&self, page: usize, axis: GuideAxis) -> Vec<f64> {
        self.raw_guides(page, axis)
            .iter()
            .map(|g| to_doc(*g, self.zoom, self.ruler_height))
            .collect()
    }

    /// Guide lines in container pixels, rebuilt from document units.
    pub fn guide_lines(&self, page: usize, axis: GuideAxis) -> Vec<f64> {
        self.get_guides(page, axis)
            .into_iter()
            .map(|g| to_screen(g, self.zoom, self.ruler_height))
            .collect()
    }

    /// Snap lines for the gesture layer, in paper-relative pixels.
    pub fn snap_guides(&self, page: usize, threshold: f64, center: bool) -> SnapGuides {
        let paper = |axis: GuideAxis| -> Vec<f64> {
            self.get_guides(page, axis)
                .into_iter()
                .map(|g| to_screen(g, self.zoom, 0.0))
                .collect()
        };
        SnapGuides {
            vertical: paper(GuideAxis::Vertical),
            horizontal: paper(GuideAxis::Horizontal),
            threshold,
            center,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Resize in place: raw positions stay put, the display caches follow
    /// the new scale so guides remain visually anchored to the page.
    pub fn resize(&mut self, scale: f64) {
        self.scale = scale;
        for set in &mut self.pages {
            set.resync(scale);
        }
    }
}
