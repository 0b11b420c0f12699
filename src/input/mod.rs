//! Pointer gesture handling for the layout canvas.
//!
//! This module implements the drag and resize logic for single and grouped
//! selections, plus the unit conversions every gesture goes through.
//!
//! ## Architecture
//!
//! The gesture system uses an explicit state machine (`GestureState`) owned
//! by a `GestureController`. A session is created at pointer-down, updated
//! on every pointer move and either committed or discarded at the end.
//!
//! ## Modules
//!
//! - `coords` - Document unit / screen pixel conversion
//! - `direction` - The eight resize handles and their anchor rule
//! - `state` - Session state, modifier snapshot and pointer-move payloads
//! - `drag` - Single and group moves
//! - `resize` - Single and group resizes, aspect lock
//! - `snap` - Guide snapping of live rects
//! - `controller` - Session lifecycle

pub mod coords;
mod controller;
mod direction;
mod drag;
mod resize;
mod snap;
mod state;

pub use controller::GestureController;
pub use direction::{AnchorShift, ResizeDirection};
pub use snap::SnapGuides;
pub use state::{
    DragEvent, DragGroupEvent, FinishedGesture, GestureKind, GestureSession, GestureState,
    GestureUpdate, ModifierState, ResizeEvent, ResizeGroupEvent, SessionTarget,
};
