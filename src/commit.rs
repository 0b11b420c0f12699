//! Commit emitter - turns a finished gesture into one batched schema change.
//!
//! Field order per element follows the document model's expectations:
//! drags emit `position.y`, `position.x`; resizes emit `width`, `height`,
//! `position.y`, `position.x`. Elements appear in session target order.

use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{FinishedGesture, GestureKind};
use crate::profile_scope;
use crate::types::{ScreenRect, Schema};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Schema field addressed by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldPath {
    #[serde(rename = "position.x")]
    PositionX,
    #[serde(rename = "position.y")]
    PositionY,
    #[serde(rename = "width")]
    Width,
    #[serde(rename = "height")]
    Height,
}

impl FieldPath {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PositionX => "position.x",
            Self::PositionY => "position.y",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One proposed field change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaUpdate {
    pub key: FieldPath,
    pub value: String,
    pub schema_id: String,
}

/// Receiver of batched schema changes; one call per completed gesture.
pub trait SchemaSink {
    fn change_schema(&mut self, updates: Vec<SchemaUpdate>);
}

impl<F> SchemaSink for F
where
    F: FnMut(Vec<SchemaUpdate>),
{
    fn change_schema(&mut self, updates: Vec<SchemaUpdate>) {
        self(updates)
    }
}

/// Format a document value the way the model stores it: shortest decimal,
/// no trailing zeros, no negative zero.
pub fn format_value(value: f64) -> String {
    format!("{}", value + 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitEmitter {
    ctx: CoordinateContext,
}

impl CommitEmitter {
    pub fn new(zoom: f64) -> Self {
        Self {
            ctx: CoordinateContext::paper(zoom),
        }
    }

    fn field(&self, key: FieldPath, screen: f64, schema_id: &str) -> SchemaUpdate {
        // committed geometry is never negative
        let doc = CoordinateConverter::to_doc(screen.max(0.0), &self.ctx);
        SchemaUpdate {
            key,
            value: format_value(doc),
            schema_id: schema_id.to_owned(),
        }
    }

    fn element_updates(&self, kind: GestureKind, rect: &ScreenRect, id: &str) -> Vec<SchemaUpdate> {
        let mut out = Vec::with_capacity(4);
        if kind == GestureKind::Resize {
            out.push(self.field(FieldPath::Width, rect.width, id));
            out.push(self.field(FieldPath::Height, rect.height, id));
        }
        out.push(self.field(FieldPath::PositionY, rect.top, id));
        out.push(self.field(FieldPath::PositionX, rect.left, id));
        out
    }

    /// Flatten every target's updates into one batch. Targets whose element
    /// no longer resolves in `schemas` are skipped.
    pub fn updates(&self, gesture: &FinishedGesture, schemas: &[Schema]) -> Vec<SchemaUpdate> {
        gesture
            .rects
            .iter()
            .filter_map(|(element, rect)| {
                let schema = element.resolve(schemas);
                if schema.is_none() {
                    warn!(index = element.index(), "Gesture target no longer exists");
                }
                schema.map(|s| self.element_updates(gesture.kind, rect, &s.id))
            })
            .flatten()
            .collect()
    }

    /// Hand the batch to `sink` in a single call. Nothing is emitted when
    /// no target survived. Returns the number of records sent.
    pub fn emit(&self, gesture: &FinishedGesture, schemas: &[Schema], sink: &mut impl SchemaSink) -> usize {
        profile_scope!("commit_emit");

        let updates = self.updates(gesture, schemas);
        if updates.is_empty() {
            debug!("No surviving gesture targets, nothing committed");
            return 0;
        }
        let count = updates.len();
        debug!(kind = ?gesture.kind, records = count, "Committing gesture");
        sink.change_schema(updates);
        count
    }
}
