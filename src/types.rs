//! Core types for the layout canvas.
//!
//! These mirror the document model's page and schema records. The canvas
//! never persists them; it reads current values and proposes field updates.

use crate::input::coords::{CoordinateContext, CoordinateConverter};
use serde::{Deserialize, Serialize};

// ============================================================================
// Pages
// ============================================================================

/// Page dimensions in document units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Opaque reference to a page background image, owned by the document model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackgroundHandle(pub String);

/// One page of the document. A page without a size renders nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub size: Option<PageSize>,
    #[serde(rename = "image", default)]
    pub background: BackgroundHandle,
}

impl Page {
    pub fn new(size: PageSize, background: impl Into<String>) -> Self {
        Self {
            size: Some(size),
            background: BackgroundHandle(background.into()),
        }
    }

    /// A page whose size is not known yet.
    pub fn without_size(background: impl Into<String>) -> Self {
        Self {
            size: None,
            background: BackgroundHandle(background.into()),
        }
    }
}

// ============================================================================
// Schemas (positioned elements)
// ============================================================================

/// Element kinds the designer can place on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Text,
    Image,
    Qrcode,
    Japanpost,
    Ean13,
    Ean8,
    Code39,
    Code128,
    Nw7,
    Itf14,
    Upca,
    Upce,
}

impl SchemaType {
    pub fn is_barcode(self) -> bool {
        !matches!(self, Self::Text | Self::Image)
    }
}

/// Top-left position in document units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A positioned element on a page.
///
/// Display fields are carried for the rendering collaborator and are never
/// touched by gestures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Schema {
    /// Create a schema with no display fields set.
    pub fn new(
        id: impl Into<String>,
        schema_type: SchemaType,
        position: (f64, f64),
        size: (f64, f64),
    ) -> Self {
        Self {
            id: id.into(),
            key: String::new(),
            schema_type,
            position: Position {
                x: position.0,
                y: position.1,
            },
            width: size.0,
            height: size.1,
            data: None,
            alignment: None,
            font_size: None,
            character_spacing: None,
            line_height: None,
            font_color: None,
            background_color: None,
        }
    }
}

// ============================================================================
// Element references and screen geometry
// ============================================================================

/// Opaque handle to an element on the active page.
///
/// Wraps the element's index in the page's schema list so the engine never
/// depends on a presentation-layer node type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(usize);

impl ElementRef {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Resolve against a page's schema list. `None` once the element is gone.
    pub fn resolve(self, schemas: &[Schema]) -> Option<&Schema> {
        schemas.get(self.0)
    }
}

/// An element rectangle in unscaled screen pixels, relative to the paper.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Screen rect of a schema at the given zoom.
    pub fn from_schema(schema: &Schema, zoom: f64) -> Self {
        let ctx = CoordinateContext::paper(zoom);
        Self {
            left: CoordinateConverter::to_screen(schema.position.x, &ctx),
            top: CoordinateConverter::to_screen(schema.position.y, &ctx),
            width: CoordinateConverter::to_screen(schema.width, &ctx),
            height: CoordinateConverter::to_screen(schema.height, &ctx),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Width over height, if the height is non-zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height != 0.0 && self.width.is_finite()).then(|| self.width / self.height)
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}
