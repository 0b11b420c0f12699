//! The mounted editor surface.
//!
//! `Editor` wires the viewport scaler, guide registry, gesture controller,
//! selection bridge and commit emitter together. It owns the modifier
//! snapshot source (key listeners) and the debounced window-resize handling,
//! both of which exist only while the editor is mounted.

use crate::commit::{CommitEmitter, SchemaSink};
use crate::config::EditorConfig;
use crate::guides::GuideRegistry;
use crate::input::{
    FinishedGesture, GestureController, GestureUpdate, ModifierState, ResizeDirection, SnapGuides,
};
use crate::selection::{ActiveElements, PointerOrigin, SelectStart, SelectionBridge};
use crate::types::{ElementRef, Page, ScreenRect, Schema};
use crate::viewport::{ResizeDebouncer, Viewport, ViewportState};
use std::time::Instant;
use tracing::{debug, info};

/// Window-level input the editor listens to while mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// A key went down; `shift` is the shift state after the event
    KeyDown { shift: bool },
    /// A key went up; `shift` is the shift state after the event
    KeyUp { shift: bool },
    /// The window was resized to `width` pixels
    Resize { width: f64 },
}

/// Layout of one page slot on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub index: usize,
    /// Paper size in unscaled pixels
    pub paper_width: f64,
    pub paper_height: f64,
    /// Paper plus ruler, unscaled
    pub container_width: f64,
    pub container_height: f64,
    /// Outer slot size after responsive scaling
    pub display_width: f64,
    pub display_height: f64,
    /// Horizontal shift that centers the paper rather than paper + ruler
    pub offset_left: f64,
    /// Not the active page; drawn behind a translucent overlay
    pub dimmed: bool,
    pub shows_guides: bool,
    pub shows_gesture_overlay: bool,
}

/// Bounding box handed to the renderer's gesture overlay, in container
/// pixels. The gesture layer itself only clamps at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

pub struct Editor<S: SchemaSink> {
    config: EditorConfig,
    pages: Vec<Page>,
    schemas: Vec<Vec<Schema>>,
    viewport: Viewport,
    guides: GuideRegistry,
    gestures: GestureController,
    selection: SelectionBridge,
    active: ActiveElements,
    emitter: CommitEmitter,
    debouncer: ResizeDebouncer,
    modifiers: ModifierState,
    mounted: bool,
    focused: Option<String>,
    hovered: Option<String>,
    sink: S,
}

impl<S: SchemaSink> Editor<S> {
    pub fn new(config: EditorConfig, sink: S) -> Self {
        Self {
            viewport: Viewport::new(),
            guides: GuideRegistry::new(config.zoom, config.ruler_height),
            gestures: GestureController::new(),
            selection: SelectionBridge::new(),
            active: ActiveElements::new(),
            emitter: CommitEmitter::new(config.zoom),
            debouncer: ResizeDebouncer::new(config.resize_debounce()),
            modifiers: ModifierState::default(),
            mounted: false,
            focused: None,
            hovered: None,
            pages: Vec::new(),
            schemas: Vec::new(),
            config,
            sink,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Attach the window listeners and compute the initial scale.
    pub fn mount(&mut self, window_width: f64) {
        self.mounted = true;
        self.viewport.set_window_width(window_width);
        self.rescale();
        info!(window_width, scale = self.viewport.scale(), "Editor mounted");
    }

    /// Detach the window listeners. Pending resizes and any running gesture
    /// are dropped so nothing fires against stale state.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.debouncer.cancel();
        self.gestures.cancel();
        self.modifiers = ModifierState::default();
        info!("Editor unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replace the document's pages and per-page schemas wholesale.
    ///
    /// Selected elements and gesture targets follow their schema `id` to its
    /// new position in the list; elements whose id is gone are dropped.
    pub fn set_document(&mut self, pages: Vec<Page>, schemas: Vec<Vec<Schema>>) {
        let previous = std::mem::replace(&mut self.schemas, schemas);
        self.pages = pages;
        self.guides.sync_pages(self.pages.len());

        let page_count = self.pages.len();
        let active_page = self.active_page();
        if page_count > 0 && active_page >= page_count {
            self.set_page_cursor(page_count - 1);
        }

        let old = previous.get(self.active_page()).map(Vec::as_slice).unwrap_or(&[]);
        let current = self.page_schemas();
        let moved: Vec<Option<ElementRef>> = old
            .iter()
            .map(|s| current.iter().position(|c| c.id == s.id).map(ElementRef::new))
            .collect();
        let remap = |e: ElementRef| moved.get(e.index()).copied().flatten();
        self.active.remap(remap);
        self.gestures.remap_targets(remap);
        self.rescale();
    }

    /// Move the active page. Selection and any running gesture belong to
    /// the previous page and are dropped.
    pub fn set_page_cursor(&mut self, index: usize) {
        if index == self.active_page() {
            return;
        }
        debug!(from = self.active_page(), to = index, "Page cursor moved");
        self.viewport.set_active_page(index);
        self.active.clear();
        self.gestures.cancel();
        self.rescale();
    }

    /// Feed a window event. Returns false when the editor is not mounted.
    pub fn handle_window_event(&mut self, event: WindowEvent, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        match event {
            WindowEvent::KeyDown { shift } | WindowEvent::KeyUp { shift } => {
                self.modifiers.shift = shift;
            }
            WindowEvent::Resize { width } => self.debouncer.schedule(now, width),
        }
        true
    }

    /// Flush a debounced window resize. Returns true when the canvas was
    /// rescaled.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(width) = self.debouncer.poll(now) else {
            return false;
        };
        self.viewport.set_window_width(width);
        self.rescale();
        true
    }

    fn rescale(&mut self) {
        let change = self
            .viewport
            .recompute(&self.pages, self.config.ruler_height, self.config.zoom);
        if change.previous != change.current {
            info!(previous = change.previous, current = change.current, "Canvas rescaled");
        }
        self.guides.resize(change.current);
        let snap = self.snap_guides();
        self.gestures.set_snap_guides(snap);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    pub fn active_page(&self) -> usize {
        self.viewport.state().active_page
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Schemas of the active page.
    pub fn page_schemas(&self) -> &[Schema] {
        self.schemas
            .get(self.active_page())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn guides(&self) -> &GuideRegistry {
        &self.guides
    }

    /// Ruler interaction. Running gestures keep the snap lines they started
    /// with until the next rescale.
    pub fn guides_mut(&mut self) -> &mut GuideRegistry {
        &mut self.guides
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn active_elements(&self) -> &ActiveElements {
        &self.active
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // ========================================================================
    // Focus and hover (state for the renderer)
    // ========================================================================

    pub fn set_focused(&mut self, id: Option<String>) {
        self.focused = id;
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn hover_enter(&mut self, id: impl Into<String>) {
        self.hovered = Some(id.into());
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn on_selection_drag_start(&mut self, origin: PointerOrigin) -> SelectStart {
        let gesture_active = self.gestures.is_active();
        self.selection.on_drag_start(origin, gesture_active)
    }

    /// Forward hits from the selection widget. References that do not exist
    /// on the active page are dropped.
    pub fn on_select(&mut self, hits: Vec<ElementRef>) -> bool {
        let len = self.page_schemas().len();
        let hits = hits.into_iter().filter(|e| e.index() < len).collect();
        self.selection.on_select(hits, &mut self.active)
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    fn snap_guides(&self) -> SnapGuides {
        if self.config.snap_threshold <= 0.0 {
            return SnapGuides::none();
        }
        self.guides
            .snap_guides(self.active_page(), self.config.snap_threshold, self.config.snap_center)
    }

    fn active_targets(&self) -> Vec<(ElementRef, ScreenRect)> {
        let schemas = self.page_schemas();
        self.active
            .as_slice()
            .iter()
            .filter_map(|e| e.resolve(schemas).map(|s| (*e, ScreenRect::from_schema(s, self.config.zoom))))
            .collect()
    }

    fn commit(&mut self, gesture: Option<FinishedGesture>) -> usize {
        let Some(gesture) = gesture else {
            return 0;
        };
        let page = self.active_page();
        let schemas = self.schemas.get(page).map(Vec::as_slice).unwrap_or(&[]);
        self.emitter.emit(&gesture, schemas, &mut self.sink)
    }

    /// Start dragging the active elements. Returns false when there is
    /// nothing to drag or the canvas is not renderable.
    pub fn begin_drag(&mut self) -> bool {
        if self.viewport.state().renderable_scale().is_none() {
            return false;
        }
        let targets = self.active_targets();
        let snap = self.snap_guides();
        let previous = self.gestures.begin_drag(targets, snap);
        self.commit(previous);
        self.gestures.is_active()
    }

    /// Start resizing the active elements from `direction`, sampling the
    /// shift key now.
    pub fn begin_resize(&mut self, direction: ResizeDirection) -> bool {
        if self.viewport.state().renderable_scale().is_none() {
            return false;
        }
        let targets = self.active_targets();
        let snap = self.snap_guides();
        let modifiers = self.modifiers;
        let previous = self.gestures.begin_resize(targets, direction, modifiers, snap);
        self.commit(previous);
        self.gestures.is_active()
    }

    pub fn update_gesture(&mut self, update: &GestureUpdate) -> bool {
        self.gestures.update(update)
    }

    /// Pointer up: commit the gesture as one batch. Returns the number of
    /// update records emitted.
    pub fn end_gesture(&mut self) -> usize {
        let finished = self.gestures.finish();
        self.commit(finished)
    }

    pub fn cancel_gesture(&mut self) {
        self.gestures.cancel();
    }

    /// Where `element` should be drawn: its live rect during a gesture,
    /// otherwise its committed document geometry.
    pub fn element_rect(&self, element: ElementRef) -> Option<ScreenRect> {
        self.gestures.live_rect(element).or_else(|| {
            element
                .resolve(self.page_schemas())
                .map(|s| ScreenRect::from_schema(s, self.config.zoom))
        })
    }

    // ========================================================================
    // Canvas layout
    // ========================================================================

    /// Frame per page slot. Empty when the scale is not renderable; `None`
    /// for pages without a size.
    pub fn page_frames(&self) -> Vec<Option<PageFrame>> {
        let Some(scale) = self.viewport.state().renderable_scale() else {
            return Vec::new();
        };
        let zoom = self.config.zoom;
        let ruler = self.config.ruler_height;
        let active_page = self.active_page();

        self.pages
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let size = page.size?;
                let paper_width = size.width * zoom;
                let paper_height = size.height * zoom;
                let is_active = index == active_page;
                Some(PageFrame {
                    index,
                    paper_width,
                    paper_height,
                    container_width: paper_width + ruler,
                    container_height: paper_height + ruler,
                    display_width: paper_width * scale,
                    display_height: paper_height * scale,
                    offset_left: -(ruler * scale) / 2.0,
                    dimmed: !is_active,
                    shows_guides: is_active,
                    shows_gesture_overlay: is_active && !self.active.is_empty(),
                })
            })
            .collect()
    }

    /// Bounding box for the gesture overlay on the active page.
    pub fn overlay_bounds(&self) -> Option<OverlayBounds> {
        let size = self.pages.get(self.active_page())?.size?;
        let ruler = self.config.ruler_height;
        Some(OverlayBounds {
            left: 0.0,
            top: 0.0,
            right: size.width * self.config.zoom + ruler,
            bottom: size.height * self.config.zoom + ruler,
        })
    }
}
