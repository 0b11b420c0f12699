//! Editor-wide constants.
//!
//! Centralizes magic numbers and layout values so the canvas geometry stays
//! consistent between the converter, the scaler and the guide rulers.

// ============================================================================
// Units
// ============================================================================

/// Screen pixels per document unit (millimetre) before responsive scaling.
pub const DEFAULT_ZOOM: f64 = 3.779_527_559_1;

/// Decimal places kept when converting screen values back to document units
pub const DECIMAL_PLACES: u32 = 2;

// ============================================================================
// Layout
// ============================================================================

/// Thickness of the horizontal and vertical guide rulers in pixels
pub const RULER_HEIGHT: f64 = 30.0;

/// Largest responsive scale; the canvas never upscales past native size
pub const MAX_SCALE: f64 = 1.0;

// ============================================================================
// Timing
// ============================================================================

/// Quiet window for window-resize handling in milliseconds
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

// ============================================================================
// Input Handling
// ============================================================================

/// Distance in screen pixels within which an edge snaps to a guide
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.0;

/// Budget for a single pointer-move handler before profiling warns
pub const POINTER_MOVE_BUDGET_MS: f64 = 4.0;
