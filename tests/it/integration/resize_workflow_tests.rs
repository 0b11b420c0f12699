//! Resize gestures: anchoring, aspect lock and group batches.

use crate::helpers::{editor_with_selection, text, RecordingSink};
use layout_canvas::input::{ResizeEvent, ResizeGroupEvent};
use layout_canvas::{Editor, ElementRef, GestureUpdate, ResizeDirection, WindowEvent};
use std::time::Instant;

fn resize(target: usize, width: f64, height: f64, direction: ResizeDirection) -> GestureUpdate {
    GestureUpdate::Resize(ResizeEvent {
        target: ElementRef::new(target),
        width,
        height,
        direction,
    })
}

fn committed(editor: &Editor<RecordingSink>) -> Vec<String> {
    editor.sink().triples(0).into_iter().map(|(_, value, _)| value).collect()
}

#[test]
fn test_north_west_handle_anchors_bottom_right() {
    let direction = ResizeDirection::from_vector(-1, -1).unwrap();
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);

    assert!(editor.begin_resize(direction));
    editor.update_gesture(&resize(0, 50.0, 20.0, direction));

    let live = editor.element_rect(ElementRef::new(0)).unwrap();
    assert_eq!((live.left, live.top), (10.0, 10.0));
    assert_eq!((live.right(), live.bottom()), (60.0, 30.0));

    assert_eq!(editor.end_gesture(), 4);
    assert_eq!(committed(&editor), vec!["25", "10", "5", "5"]);
}

#[test]
fn test_south_east_handle_keeps_origin() {
    let direction = ResizeDirection::from_vector(1, 1).unwrap();
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);

    editor.begin_resize(direction);
    editor.update_gesture(&resize(0, 50.0, 20.0, direction));
    editor.end_gesture();

    assert_eq!(committed(&editor), vec!["25", "10", "10", "10"]);
}

#[test]
fn test_consecutive_updates_chain_from_live_rect() {
    let direction = ResizeDirection::West;
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);

    editor.begin_resize(direction);
    editor.update_gesture(&resize(0, 50.0, 10.0, direction));
    editor.update_gesture(&resize(0, 30.0, 10.0, direction));
    editor.end_gesture();

    // right edge stays at 60 throughout
    assert_eq!(committed(&editor), vec!["15", "5", "10", "15"]);
}

#[test]
fn test_aspect_lock_sampled_at_start() {
    let now = Instant::now();
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 10.0))]);

    editor.handle_window_event(WindowEvent::KeyDown { shift: true }, now);
    assert!(editor.begin_resize(ResizeDirection::East));
    // releasing shift mid-gesture does not unlock
    editor.handle_window_event(WindowEvent::KeyUp { shift: false }, now);
    assert!(!editor.modifiers().shift);

    editor.update_gesture(&resize(0, 60.0, 20.0, ResizeDirection::East));
    editor.update_gesture(&resize(0, 80.0, 5.0, ResizeDirection::East));
    let live = editor.element_rect(ElementRef::new(0)).unwrap();
    assert_eq!(live.width / live.height, 2.0);

    editor.end_gesture();
    assert_eq!(committed(&editor), vec!["40", "20", "10", "10"]);
}

#[test]
fn test_unlocked_resize_is_free() {
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 10.0))]);

    editor.begin_resize(ResizeDirection::East);
    // shift pressed after the start has no effect
    editor.handle_window_event(WindowEvent::KeyDown { shift: true }, Instant::now());
    editor.update_gesture(&resize(0, 80.0, 5.0, ResizeDirection::East));
    editor.end_gesture();

    assert_eq!(committed(&editor), vec!["40", "2.5", "10", "10"]);
}

#[test]
fn test_locked_corner_follows_dominant_axis() {
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 10.0))]);

    editor.handle_window_event(WindowEvent::KeyDown { shift: true }, Instant::now());
    editor.begin_resize(ResizeDirection::SouthEast);
    editor.update_gesture(&resize(0, 44.0, 30.0, ResizeDirection::SouthEast));

    let live = editor.element_rect(ElementRef::new(0)).unwrap();
    assert_eq!((live.width, live.height), (60.0, 30.0));
}

#[test]
fn test_group_resize_is_one_batch() {
    let mut editor = editor_with_selection(vec![
        text("a", (10.0, 10.0), (10.0, 10.0)),
        text("b", (40.0, 10.0), (10.0, 10.0)),
    ]);

    assert!(editor.begin_resize(ResizeDirection::SouthEast));
    let events = vec![
        ResizeEvent {
            target: ElementRef::new(0),
            width: 30.0,
            height: 30.0,
            direction: ResizeDirection::SouthEast,
        },
        ResizeEvent {
            target: ElementRef::new(1),
            width: 40.0,
            height: 20.0,
            direction: ResizeDirection::SouthEast,
        },
    ];
    editor.update_gesture(&GestureUpdate::ResizeGroup(ResizeGroupEvent { events }));
    assert_eq!(editor.end_gesture(), 8);

    assert_eq!(editor.sink().calls.len(), 1);
    assert_eq!(
        committed(&editor),
        vec!["15", "15", "10", "10", "20", "10", "10", "40"]
    );
}

#[test]
fn test_new_gesture_commits_unfinished_one() {
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);

    editor.begin_drag();
    editor.update_gesture(&GestureUpdate::Drag(layout_canvas::input::DragEvent {
        target: ElementRef::new(0),
        left: 40.0,
        top: 40.0,
    }));
    assert!(editor.begin_resize(ResizeDirection::East));

    assert_eq!(editor.sink().calls.len(), 1);
    assert_eq!(committed(&editor), vec!["20", "20"]);
    assert!(editor.gestures().state().is_resizing());
}

#[test]
fn test_anchor_rule_reference_cases() {
    // screen rect {100, 100, 50, 50} at zoom 2
    let start = || editor_with_selection(vec![text("a", (50.0, 50.0), (25.0, 25.0))]);

    let mut top_left = start();
    top_left.begin_resize(ResizeDirection::NorthWest);
    top_left.update_gesture(&resize(0, 30.0, 30.0, ResizeDirection::NorthWest));
    top_left.end_gesture();
    assert_eq!(committed(&top_left), vec!["15", "15", "60", "60"]);

    let mut bottom_right = start();
    bottom_right.begin_resize(ResizeDirection::SouthEast);
    bottom_right.update_gesture(&resize(0, 80.0, 80.0, ResizeDirection::SouthEast));
    bottom_right.end_gesture();
    assert_eq!(committed(&bottom_right), vec!["40", "40", "50", "50"]);
}

#[test]
fn test_west_resize_past_page_edge_keeps_right_edge() {
    // right edge at x = 30 document units
    let mut editor = editor_with_selection(vec![text("a", (10.0, 10.0), (20.0, 5.0))]);

    editor.begin_resize(ResizeDirection::West);
    editor.update_gesture(&resize(0, 100.0, 10.0, ResizeDirection::West));
    editor.end_gesture();

    let values = committed(&editor);
    assert_eq!(values, vec!["30", "5", "10", "0"]);
    let width: f64 = values[0].parse().unwrap();
    let x: f64 = values[3].parse().unwrap();
    assert_eq!(x + width, 30.0);
}
