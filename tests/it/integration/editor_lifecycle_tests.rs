//! Mounting, window resize, document changes and page layout.

use crate::helpers::{editor_with_selection, page, refs, text, TestEditorBuilder};
use layout_canvas::input::DragEvent;
use layout_canvas::{ElementRef, GestureUpdate, GuideAxis, Page, WindowEvent};
use std::time::{Duration, Instant};

#[test]
fn test_debounced_resize_rescales_guides() {
    let mut editor = TestEditorBuilder::new().with_page(page(), vec![]).build();
    assert_eq!(editor.scale(), 1.0);
    assert!(editor.guides_mut().add_guide(0, GuideAxis::Vertical, 130.0));

    let t0 = Instant::now();
    assert!(editor.handle_window_event(WindowEvent::Resize { width: 115.0 }, t0));
    assert!(!editor.tick(t0 + Duration::from_millis(50)));
    assert_eq!(editor.scale(), 1.0);

    assert!(editor.tick(t0 + Duration::from_millis(100)));
    assert_eq!(editor.scale(), 0.5);
    assert_eq!(editor.guides().display_positions(0, GuideAxis::Vertical), &[65.0]);
    assert_eq!(editor.guides().get_guides(0, GuideAxis::Vertical), vec![50.0]);
}

#[test]
fn test_resize_burst_uses_last_width() {
    let mut editor = TestEditorBuilder::new().with_page(page(), vec![]).build();

    let t0 = Instant::now();
    editor.handle_window_event(WindowEvent::Resize { width: 500.0 }, t0);
    let t1 = t0 + Duration::from_millis(80);
    editor.handle_window_event(WindowEvent::Resize { width: 115.0 }, t1);

    assert!(!editor.tick(t0 + Duration::from_millis(150)));
    assert!(editor.tick(t1 + Duration::from_millis(100)));
    assert_eq!(editor.scale(), 0.5);
    assert!(!editor.tick(t1 + Duration::from_millis(500)));
}

#[test]
fn test_unmount_tears_down_listeners_and_gesture() {
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);
    let t0 = Instant::now();
    editor.handle_window_event(WindowEvent::Resize { width: 115.0 }, t0);
    editor.handle_window_event(WindowEvent::KeyDown { shift: true }, t0);
    editor.begin_drag();

    editor.unmount();

    assert!(!editor.is_mounted());
    assert!(!editor.gestures().is_active());
    assert!(!editor.modifiers().shift);
    assert!(!editor.handle_window_event(WindowEvent::Resize { width: 50.0 }, t0));
    assert!(!editor.tick(t0 + Duration::from_secs(1)));
    assert_eq!(editor.scale(), 1.0);
    assert_eq!(editor.end_gesture(), 0);
    assert!(editor.sink().calls.is_empty());
}

#[test]
fn test_removed_element_mid_gesture_commits_nothing() {
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);
    editor.begin_drag();
    editor.update_gesture(&GestureUpdate::Drag(DragEvent {
        target: ElementRef::new(0),
        left: 60.0,
        top: 60.0,
    }));

    editor.set_document(vec![page()], vec![vec![]]);

    assert!(editor.active_elements().is_empty());
    assert_eq!(editor.end_gesture(), 0);
    assert!(editor.sink().calls.is_empty());
}

#[test]
fn test_page_frames_layout() {
    let editor = TestEditorBuilder::new()
        .with_page(page(), vec![])
        .with_page(Page::without_size("blank.png"), vec![])
        .with_window_width(115.0)
        .build();

    let frames = editor.page_frames();
    assert_eq!(frames.len(), 2);
    assert!(frames[1].is_none());

    let frame = frames[0].unwrap();
    assert_eq!((frame.paper_width, frame.paper_height), (200.0, 300.0));
    assert_eq!((frame.container_width, frame.container_height), (230.0, 330.0));
    assert_eq!((frame.display_width, frame.display_height), (100.0, 150.0));
    assert_eq!(frame.offset_left, -7.5);
    assert!(!frame.dimmed);
    assert!(frame.shows_guides);
    assert!(!frame.shows_gesture_overlay);
}

#[test]
fn test_page_cursor_dims_other_pages() {
    let mut editor = TestEditorBuilder::new()
        .with_page(page(), vec![text("a", (0.0, 0.0), (5.0, 5.0))])
        .with_page(page(), vec![text("b", (0.0, 0.0), (5.0, 5.0))])
        .build();
    editor.on_select(refs(&[0]));

    editor.set_page_cursor(1);

    assert!(editor.active_elements().is_empty());
    let frames = editor.page_frames();
    assert!(frames[0].unwrap().dimmed);
    assert!(!frames[1].unwrap().dimmed);
    assert_eq!(editor.page_schemas()[0].id, "b");
}

#[test]
fn test_unrenderable_canvas_draws_nothing() {
    let mut editor = TestEditorBuilder::new()
        .with_page(page(), vec![text("a", (0.0, 0.0), (5.0, 5.0))])
        .with_window_width(0.0)
        .build();
    editor.on_select(refs(&[0]));

    assert_eq!(editor.viewport().renderable_scale(), None);
    assert!(editor.page_frames().is_empty());
    assert!(!editor.begin_drag());
}

#[test]
fn test_document_without_sized_pages() {
    let editor = TestEditorBuilder::new()
        .with_page(Page::without_size("blank.png"), vec![])
        .build();

    assert_eq!(editor.scale(), 0.0);
    assert!(editor.page_frames().is_empty());
    assert!(editor.overlay_bounds().is_none());
}
