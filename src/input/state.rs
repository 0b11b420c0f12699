//! Gesture state machine - one explicit session instead of scattered flags.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active(Drag)      (drag handle pressed on the active elements)
//! Idle -> Active(Resize)    (resize handle pressed on the active elements)
//! Active -> Active          (every pointer move updates the live rects)
//! Active -> Idle            (pointer up commits, cancel discards)
//! ```

use super::direction::ResizeDirection;
use super::snap::SnapGuides;
use crate::types::{ElementRef, ScreenRect};

/// Modifier keys sampled when a gesture starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
}

impl ModifierState {
    pub fn shift() -> Self {
        Self { shift: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// One element participating in a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTarget {
    pub element: ElementRef,
    /// Rect when the gesture started
    pub start: ScreenRect,
    /// Rect after the latest pointer move
    pub live: ScreenRect,
}

impl SessionTarget {
    pub fn new(element: ElementRef, start: ScreenRect) -> Self {
        Self {
            element,
            start,
            live: start,
        }
    }
}

/// A running drag or resize.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub kind: GestureKind,
    pub targets: Vec<SessionTarget>,
    /// Handle pressed at resize start; `None` for drags
    pub direction: Option<ResizeDirection>,
    /// Shift was held at start; fixed for the whole session
    pub aspect_locked: bool,
    pub snap: SnapGuides,
}

impl GestureSession {
    pub fn drag(targets: Vec<SessionTarget>, snap: SnapGuides) -> Self {
        Self {
            kind: GestureKind::Drag,
            targets,
            direction: None,
            aspect_locked: false,
            snap,
        }
    }

    pub fn resize(
        targets: Vec<SessionTarget>,
        direction: ResizeDirection,
        modifiers: ModifierState,
        snap: SnapGuides,
    ) -> Self {
        Self {
            kind: GestureKind::Resize,
            targets,
            direction: Some(direction),
            aspect_locked: modifiers.shift,
            snap,
        }
    }

    pub fn is_group(&self) -> bool {
        self.targets.len() > 1
    }

    pub fn target(&self, element: ElementRef) -> Option<&SessionTarget> {
        self.targets.iter().find(|t| t.element == element)
    }

    pub fn live_rects(&self) -> Vec<(ElementRef, ScreenRect)> {
        self.targets.iter().map(|t| (t.element, t.live)).collect()
    }
}

// ============================================================================
// Pointer-move payloads
// ============================================================================

/// Proposed position for a single dragged element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub target: ElementRef,
    pub left: f64,
    pub top: f64,
}

/// Pointer offset since the start of a group drag, applied to every target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGroupEvent {
    pub delta_x: f64,
    pub delta_y: f64,
}

/// Proposed size for a single resized element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub target: ElementRef,
    pub width: f64,
    pub height: f64,
    pub direction: ResizeDirection,
}

/// Per-target proposed sizes for a group resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGroupEvent {
    pub events: Vec<ResizeEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureUpdate {
    Drag(DragEvent),
    DragGroup(DragGroupEvent),
    Resize(ResizeEvent),
    ResizeGroup(ResizeGroupEvent),
}

/// Final live rects of a completed gesture, in session target order.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedGesture {
    pub kind: GestureKind,
    pub rects: Vec<(ElementRef, ScreenRect)>,
}

// ============================================================================
// Controller state
// ============================================================================

#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Drag or resize in progress
    Active(GestureSession),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Active(s) if s.kind == GestureKind::Drag)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Active(s) if s.kind == GestureKind::Resize)
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut GestureSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Take the running session, leaving the state idle.
    pub fn take(&mut self) -> Option<GestureSession> {
        match std::mem::take(self) {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
