//! Coordinate and gesture engine for a document-layout designer canvas.
//!
//! The canvas shows document pages at `zoom` pixels per document unit,
//! shrunk by a responsive scale to fit the window, with rulers along the
//! top and left edges. Elements on the active page can be selected, dragged
//! and resized (alone or as a group), snapping to per-page guides. Every
//! finished gesture is converted back to document units and handed to the
//! document model as one batched update.
//!
//! ## Modules
//!
//! - `input` - Unit conversion and the drag/resize gesture state machine
//! - `viewport` - Responsive scale and debounced window resize
//! - `guides` - Per-page guide registry
//! - `selection` - Selection bridge and the active-element set
//! - `commit` - Gesture results to batched schema updates
//! - `editor` - Mounted editor wiring everything together
//! - `config` / `error` - Editor configuration and its errors
//! - `logging` / `perf` - Tracing setup and hot-path timing

pub mod commit;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod guides;
pub mod input;
pub mod logging;
pub mod perf;
pub mod selection;
pub mod types;
pub mod viewport;

pub use commit::{CommitEmitter, FieldPath, SchemaSink, SchemaUpdate};
pub use config::EditorConfig;
pub use editor::{Editor, PageFrame, WindowEvent};
pub use error::{ConfigError, ConfigResult};
pub use guides::{GuideAxis, GuideRegistry};
pub use input::coords::{to_doc, to_screen};
pub use input::{GestureController, GestureUpdate, ModifierState, ResizeDirection};
pub use types::{ElementRef, Page, PageSize, ScreenRect, Schema, SchemaType};
pub use viewport::compute_scale;
