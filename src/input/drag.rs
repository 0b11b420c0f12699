//! Drag operations - single and group element moves.
//!
//! Positions are clamped at the top-left page edge only; the right and
//! bottom bounds belong to the bounding box handed to the renderer.

use super::state::{DragEvent, DragGroupEvent, GestureKind, GestureSession};
use crate::types::ScreenRect;

#[inline]
fn clamp_origin(rect: ScreenRect) -> ScreenRect {
    ScreenRect::new(rect.left.max(0.0), rect.top.max(0.0), rect.width, rect.height)
}

impl GestureSession {
    /// Move one target to the proposed `left`/`top`.
    ///
    /// Returns false when the session is not a drag or the target is not
    /// part of it.
    pub fn apply_drag(&mut self, event: &DragEvent) -> bool {
        if self.kind != GestureKind::Drag {
            return false;
        }
        let snap = &self.snap;
        let Some(target) = self.targets.iter_mut().find(|t| t.element == event.target) else {
            return false;
        };

        let proposed = ScreenRect::new(event.left, event.top, target.live.width, target.live.height);
        let snapped = proposed.translate(snap.rect_offset_x(&proposed), snap.rect_offset_y(&proposed));
        target.live = clamp_origin(snapped);
        true
    }

    /// Translate every target's start rect by the same pointer offset.
    ///
    /// Snapping is computed on the union of all targets so the group keeps
    /// its internal layout; the edge clamp is then applied per element.
    pub fn apply_drag_group(&mut self, event: &DragGroupEvent) -> bool {
        if self.kind != GestureKind::Drag || self.targets.is_empty() {
            return false;
        }

        let bounds = self
            .targets
            .iter()
            .map(|t| t.start.translate(event.delta_x, event.delta_y))
            .reduce(|acc, r| acc.union(&r));
        let (snap_x, snap_y) = match bounds {
            Some(b) => (self.snap.rect_offset_x(&b), self.snap.rect_offset_y(&b)),
            None => (0.0, 0.0),
        };

        let dx = event.delta_x + snap_x;
        let dy = event.delta_y + snap_y;
        for target in &mut self.targets {
            target.live = clamp_origin(target.start.translate(dx, dy));
        }
        true
    }
}
