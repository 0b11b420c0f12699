//! Selection bridge.
//!
//! Rectangle and click selection is detected by an external widget; this
//! module decides whether its result may replace the active-element set.
//! A pointer-down that starts on a gesture handle, or a trusted touch
//! already consumed by a gesture, must not also start a selection.

use crate::types::ElementRef;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

/// What the pointer landed on when the interaction began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas or paper
    Canvas,
    /// A selectable element
    Element(ElementRef),
    /// A drag or resize affordance of the gesture overlay
    GestureHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerOrigin {
    pub kind: PointerKind,
    /// Generated by the user agent rather than synthesized by script
    pub trusted: bool,
    pub target: PointerTarget,
}

impl PointerOrigin {
    pub fn mouse(target: PointerTarget) -> Self {
        Self {
            kind: PointerKind::Mouse,
            trusted: true,
            target,
        }
    }

    pub fn touch(target: PointerTarget, trusted: bool) -> Self {
        Self {
            kind: PointerKind::Touch,
            trusted,
            target,
        }
    }
}

/// Verdict for a selection drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectStart {
    Continue,
    Stop,
}

/// Ordered, duplicate-free set of selected elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveElements {
    elements: Vec<ElementRef>,
}

impl ActiveElements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set, keeping first-seen order.
    pub fn replace(&mut self, elements: impl IntoIterator<Item = ElementRef>) {
        self.elements.clear();
        for e in elements {
            if !self.elements.contains(&e) {
                self.elements.push(e);
            }
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Follow elements to their new references after the schema list
    /// changed. Elements mapped to `None` leave the set.
    pub fn remap(&mut self, remap: impl FnMut(ElementRef) -> Option<ElementRef>) {
        let remapped: Vec<ElementRef> = self.elements.iter().copied().filter_map(remap).collect();
        self.replace(remapped);
    }

    pub fn contains(&self, element: ElementRef) -> bool {
        self.elements.contains(&element)
    }

    pub fn as_slice(&self) -> &[ElementRef] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionBridge {
    suppressed: bool,
}

impl SelectionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the selection widget sees a pointer-down.
    ///
    /// Stops the selection when the pointer began on a gesture handle, when
    /// it is a trusted touch, or while a gesture is already running.
    pub fn on_drag_start(&mut self, origin: PointerOrigin, gesture_active: bool) -> SelectStart {
        let on_handle = origin.target == PointerTarget::GestureHandle;
        let consumed_touch = origin.kind == PointerKind::Touch && origin.trusted;
        self.suppressed = on_handle || consumed_touch || gesture_active;
        if self.suppressed {
            trace!(?origin, gesture_active, "Selection suppressed");
            SelectStart::Stop
        } else {
            SelectStart::Continue
        }
    }

    /// Forward a selection result unchanged into `active`. Returns false
    /// when the interaction was suppressed.
    pub fn on_select(&mut self, hits: Vec<ElementRef>, active: &mut ActiveElements) -> bool {
        if self.suppressed {
            return false;
        }
        trace!(count = hits.len(), "Selection forwarded");
        active.replace(hits);
        true
    }
}
