//! Resize operations - directional anchoring, aspect lock, edge snapping.
//!
//! Each update is computed against the target's previous live rect, so
//! updates must be applied in pointer-event order. The aspect-lock ratio is
//! the exception: it always comes from the start rect.

use super::direction::ResizeDirection;
use super::snap::SnapGuides;
use super::state::{GestureKind, GestureSession, ResizeEvent, ResizeGroupEvent, SessionTarget};
use crate::types::ScreenRect;

/// Constrain a proposed size to the ratio of the session's start rect.
fn lock_aspect(start: &ScreenRect, direction: ResizeDirection, width: f64, height: f64) -> (f64, f64) {
    let Some(ratio) = start.aspect_ratio().filter(|r| *r > 0.0 && r.is_finite()) else {
        return (width, height);
    };

    let follow_width = if direction.is_corner() {
        let dw = (width / start.width - 1.0).abs();
        let dh = (height / start.height - 1.0).abs();
        dw >= dh
    } else {
        direction.moves_horizontally()
    };

    if follow_width {
        (width, width / ratio)
    } else {
        (height * ratio, height)
    }
}

/// Pull the moving edges of the handle onto nearby guide lines.
fn snap_edges(
    snap: &SnapGuides,
    old: &ScreenRect,
    direction: ResizeDirection,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (dx, dy) = direction.vector();
    let width = match dx {
        1 => snap.edge_x(old.left + width) - old.left,
        -1 => old.right() - snap.edge_x(old.right() - width),
        _ => width,
    };
    let height = match dy {
        1 => snap.edge_y(old.top + height) - old.top,
        -1 => old.bottom() - snap.edge_y(old.bottom() - height),
        _ => height,
    };
    (width, height)
}

/// Compute the next live rect for one target.
fn resize_target(
    target: &SessionTarget,
    event: &ResizeEvent,
    aspect_locked: bool,
    snap: &SnapGuides,
) -> ScreenRect {
    let old = target.live;
    let (mut width, mut height) = (event.width, event.height);

    if aspect_locked {
        (width, height) = lock_aspect(&target.start, event.direction, width, height);
    } else if !snap.is_empty() {
        (width, height) = snap_edges(snap, &old, event.direction, width, height);
    }
    let width = width.max(0.0);
    let height = height.max(0.0);

    let shift = event.direction.anchor_shift();
    let (left, width) = if shift.left {
        anchor_origin(old.left, old.width, width)
    } else {
        (old.left, width)
    };
    let (top, height) = if shift.top {
        anchor_origin(old.top, old.height, height)
    } else {
        (old.top, height)
    };

    ScreenRect::new(left, top, width, height)
}

/// New origin and size for an axis whose far edge stays fixed. Growing past
/// the paper origin stops at 0 and gives up the overhang.
fn anchor_origin(old_origin: f64, old_size: f64, size: f64) -> (f64, f64) {
    let origin = old_origin + (old_size - size);
    if origin < 0.0 {
        (0.0, (origin + size).max(0.0))
    } else {
        (origin, size)
    }
}

impl GestureSession {
    /// Apply a proposed size to one target.
    pub fn apply_resize(&mut self, event: &ResizeEvent) -> bool {
        if self.kind != GestureKind::Resize {
            return false;
        }
        let aspect_locked = self.aspect_locked;
        let snap = &self.snap;
        let Some(target) = self.targets.iter_mut().find(|t| t.element == event.target) else {
            return false;
        };
        target.live = resize_target(target, event, aspect_locked, snap);
        true
    }

    /// Apply each per-target proposal independently. Returns true when at
    /// least one target was updated.
    pub fn apply_resize_group(&mut self, event: &ResizeGroupEvent) -> bool {
        let mut applied = false;
        for e in &event.events {
            applied |= self.apply_resize(e);
        }
        applied
    }
}
