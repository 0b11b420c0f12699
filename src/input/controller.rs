//! Gesture controller - owns the single live session per pointer stream.

use super::direction::ResizeDirection;
use super::snap::SnapGuides;
use super::state::{
    FinishedGesture, GestureSession, GestureState, GestureUpdate, ModifierState, SessionTarget,
};
use crate::profile_scope;
use crate::types::{ElementRef, ScreenRect};
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.state.session()
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Start dragging `targets`.
    ///
    /// An unfinished previous gesture is ended first and returned so the
    /// caller can commit it.
    pub fn begin_drag(
        &mut self,
        targets: Vec<(ElementRef, ScreenRect)>,
        snap: SnapGuides,
    ) -> Option<FinishedGesture> {
        let previous = self.finish();
        if targets.is_empty() {
            return previous;
        }
        debug!(targets = targets.len(), "Drag started");
        self.state = GestureState::Active(GestureSession::drag(into_targets(targets), snap));
        previous
    }

    /// Start resizing `targets` from the `direction` handle.
    ///
    /// `modifiers` is sampled once here; later key changes do not affect the
    /// session.
    pub fn begin_resize(
        &mut self,
        targets: Vec<(ElementRef, ScreenRect)>,
        direction: ResizeDirection,
        modifiers: ModifierState,
        snap: SnapGuides,
    ) -> Option<FinishedGesture> {
        let previous = self.finish();
        if targets.is_empty() {
            return previous;
        }
        debug!(
            targets = targets.len(),
            ?direction,
            aspect_locked = modifiers.shift,
            "Resize started"
        );
        self.state = GestureState::Active(GestureSession::resize(
            into_targets(targets),
            direction,
            modifiers,
            snap,
        ));
        previous
    }

    /// Apply one pointer-move payload. Returns true when a live rect changed.
    pub fn update(&mut self, update: &GestureUpdate) -> bool {
        profile_scope!("gesture_update");

        let Some(session) = self.state.session_mut() else {
            trace!("Pointer move without an active gesture");
            return false;
        };
        match update {
            GestureUpdate::Drag(event) => session.apply_drag(event),
            GestureUpdate::DragGroup(event) => session.apply_drag_group(event),
            GestureUpdate::Resize(event) => session.apply_resize(event),
            GestureUpdate::ResizeGroup(event) => session.apply_resize_group(event),
        }
    }

    /// Replace the snap guides of the running session, e.g. after a rescale.
    pub fn set_snap_guides(&mut self, snap: SnapGuides) {
        if let Some(session) = self.state.session_mut() {
            session.snap = snap;
        }
    }

    /// Point every target at its element's new reference after the schema
    /// list changed. Targets mapped to `None` are dropped; a session left
    /// without targets is discarded silently.
    pub fn remap_targets(&mut self, mut remap: impl FnMut(ElementRef) -> Option<ElementRef>) {
        let Some(session) = self.state.session_mut() else {
            return;
        };
        session.targets.retain_mut(|t| match remap(t.element) {
            Some(element) => {
                t.element = element;
                true
            }
            None => false,
        });
        if session.targets.is_empty() {
            debug!("All gesture targets removed, discarding session");
            self.state.reset();
        }
    }

    /// Live rect of `element` in the running session.
    pub fn live_rect(&self, element: ElementRef) -> Option<ScreenRect> {
        self.session()?.target(element).map(|t| t.live)
    }

    /// End the gesture, returning its final live rects for commit.
    pub fn finish(&mut self) -> Option<FinishedGesture> {
        let session = self.state.take()?;
        if session.targets.is_empty() {
            return None;
        }
        debug!(kind = ?session.kind, targets = session.targets.len(), "Gesture finished");
        Some(FinishedGesture {
            kind: session.kind,
            rects: session.live_rects(),
        })
    }

    /// Abort the gesture without committing. The renderer falls back to the
    /// last committed document values.
    pub fn cancel(&mut self) {
        if self.state.take().is_some() {
            debug!("Gesture cancelled");
        }
    }
}

fn into_targets(targets: Vec<(ElementRef, ScreenRect)>) -> Vec<SessionTarget> {
    let mut out: Vec<SessionTarget> = Vec::with_capacity(targets.len());
    for (element, rect) in targets {
        if out.iter().all(|t| t.element != element) {
            out.push(SessionTarget::new(element, rect));
        }
    }
    out
}
