//! Guide snapping for live gesture rects.
//!
//! Lines are in the same paper-relative screen space as the element rects.
//! `vertical` holds x positions of vertical lines, `horizontal` holds y
//! positions of horizontal lines.

use crate::types::ScreenRect;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapGuides {
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
    pub threshold: f64,
    pub center: bool,
}

impl SnapGuides {
    /// Guides that never snap.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    /// Horizontal correction that brings the rect's left, right or center
    /// onto the closest vertical line, or `0.0` when none is in range.
    pub fn rect_offset_x(&self, rect: &ScreenRect) -> f64 {
        let candidates = self.candidates(rect.left, rect.center_x(), rect.right());
        nearest_offset(&self.vertical, &candidates, self.threshold).unwrap_or(0.0)
    }

    /// Vertical counterpart of [`Self::rect_offset_x`].
    pub fn rect_offset_y(&self, rect: &ScreenRect) -> f64 {
        let candidates = self.candidates(rect.top, rect.center_y(), rect.bottom());
        nearest_offset(&self.horizontal, &candidates, self.threshold).unwrap_or(0.0)
    }

    /// Snap a single moving x edge.
    pub fn edge_x(&self, x: f64) -> f64 {
        x + nearest_offset(&self.vertical, &[x], self.threshold).unwrap_or(0.0)
    }

    /// Snap a single moving y edge.
    pub fn edge_y(&self, y: f64) -> f64 {
        y + nearest_offset(&self.horizontal, &[y], self.threshold).unwrap_or(0.0)
    }

    fn candidates(&self, start: f64, center: f64, end: f64) -> Vec<f64> {
        if self.center {
            vec![start, center, end]
        } else {
            vec![start, end]
        }
    }
}

/// Smallest `line - candidate` whose magnitude is within `threshold`.
fn nearest_offset(lines: &[f64], candidates: &[f64], threshold: f64) -> Option<f64> {
    let mut best: Option<f64> = None;
    for &line in lines {
        for &candidate in candidates {
            let offset = line - candidate;
            if offset.abs() > threshold {
                continue;
            }
            if best.is_none_or(|b| offset.abs() < b.abs()) {
                best = Some(offset);
            }
        }
    }
    best
}
