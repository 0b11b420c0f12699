//! Coordinate conversion utilities for canvas interactions.
//!
//! Every conversion between document units and screen pixels goes through
//! this module so the rounding contract with the document model lives in one
//! place.

use crate::constants::DECIMAL_PLACES;

/// Round `value` to `places` decimal places (half away from zero).
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateContext {
    pub zoom: f64,
    pub offset: f64,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(zoom: f64, offset: f64) -> Self {
        Self { zoom, offset }
    }

    /// Context for element geometry, which is laid out inside the paper and
    /// carries no ruler offset.
    #[inline]
    pub fn paper(zoom: f64) -> Self {
        Self { zoom, offset: 0.0 }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a document value to screen pixels: `doc * zoom + offset`.
    #[inline]
    pub fn to_screen(doc: f64, ctx: &CoordinateContext) -> f64 {
        doc * ctx.zoom + ctx.offset
    }

    /// Convert a screen value back to document units, rounded to two
    /// decimals. The rounding is the precision contract with the document
    /// model; without it repeated edits drift.
    #[inline]
    pub fn to_doc(screen: f64, ctx: &CoordinateContext) -> f64 {
        round_to((screen - ctx.offset) / ctx.zoom, DECIMAL_PLACES)
    }

    /// Convert a display-space delta (after responsive scaling) back to
    /// unscaled screen pixels.
    #[inline]
    pub fn delta_display_to_screen(delta: f64, scale: f64) -> f64 {
        delta / scale
    }

    /// Convert an unscaled screen delta to display space.
    #[inline]
    pub fn delta_screen_to_display(delta: f64, scale: f64) -> f64 {
        delta * scale
    }
}

/// `doc * zoom + offset`
#[inline]
pub fn to_screen(doc: f64, zoom: f64, offset: f64) -> f64 {
    CoordinateConverter::to_screen(doc, &CoordinateContext::new(zoom, offset))
}

/// `round((screen - offset) / zoom, 2)`
#[inline]
pub fn to_doc(screen: f64, zoom: f64, offset: f64) -> f64 {
    CoordinateConverter::to_doc(screen, &CoordinateContext::new(zoom, offset))
}
