//! Snapshot tests using the insta crate.
//!
//! The batches handed to the document model are the wire contract of the
//! editor, so their exact shape is pinned here.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{editor_with_selection, text};
use layout_canvas::input::{DragGroupEvent, ResizeEvent};
use layout_canvas::{ElementRef, GestureUpdate, ResizeDirection};

#[test]
fn snapshot_group_drag_batch() {
    let mut editor = editor_with_selection(vec![
        text("title", (10.0, 10.0), (40.0, 8.0)),
        text("subtitle", (10.0, 20.0), (40.0, 6.0)),
    ]);
    assert!(editor.begin_drag());
    editor.update_gesture(&GestureUpdate::DragGroup(DragGroupEvent {
        delta_x: 5.0,
        delta_y: -4.0,
    }));
    editor.end_gesture();

    insta::assert_json_snapshot!(editor.sink().calls, @r#"
    [
      [
        {
          "key": "position.y",
          "value": "8",
          "schemaId": "title"
        },
        {
          "key": "position.x",
          "value": "12.5",
          "schemaId": "title"
        },
        {
          "key": "position.y",
          "value": "18",
          "schemaId": "subtitle"
        },
        {
          "key": "position.x",
          "value": "12.5",
          "schemaId": "subtitle"
        }
      ]
    ]
    "#);
}

#[test]
fn snapshot_resize_batch() {
    let mut editor = editor_with_selection(vec![text("logo", (20.0, 30.0), (15.0, 15.0))]);
    assert!(editor.begin_resize(ResizeDirection::NorthWest));
    editor.update_gesture(&GestureUpdate::Resize(ResizeEvent {
        target: ElementRef::new(0),
        width: 41.0,
        height: 36.0,
        direction: ResizeDirection::NorthWest,
    }));
    editor.end_gesture();

    insta::assert_json_snapshot!(editor.sink().calls[0], @r#"
    [
      {
        "key": "width",
        "value": "20.5",
        "schemaId": "logo"
      },
      {
        "key": "height",
        "value": "18",
        "schemaId": "logo"
      },
      {
        "key": "position.y",
        "value": "27",
        "schemaId": "logo"
      },
      {
        "key": "position.x",
        "value": "14.5",
        "schemaId": "logo"
      }
    ]
    "#);
}
