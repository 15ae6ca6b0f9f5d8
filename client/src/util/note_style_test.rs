use super::*;
use stickyboard::consts::DEFAULT_NOTE_COLOR;
use stickyboard::doc::NoteId;
use stickyboard::geometry::{Point, Size};

fn note() -> Note {
    Note {
        id: NoteId::new("n1"),
        content: "Buy milk".to_owned(),
        color: DEFAULT_NOTE_COLOR,
        position: Point::new(490.0, 250.0),
        size: Size::new(300.0, 300.0),
        is_new: false,
        rotation: 0.5,
    }
}

// =============================================================
// Note cards
// =============================================================

#[test]
fn transform_combines_position_and_tilt() {
    assert_eq!(note_transform(&note()), "translate(490px, 250px) rotate(0.5deg)");
}

#[test]
fn transform_keeps_negative_tilt_and_fractional_position() {
    let mut n = note();
    n.position = Point::new(12.5, 0.0);
    n.rotation = -0.25;
    assert_eq!(note_transform(&n), "translate(12.5px, 0px) rotate(-0.25deg)");
}

#[test]
fn style_carries_size_and_color() {
    let style = note_style(&note(), false);
    assert!(style.contains("width: 300px; height: 300px;"));
    assert!(style.contains("background-color: rgb(255, 242, 198);"));
    assert!(!style.contains("z-index"));
}

#[test]
fn dragging_style_raises_and_disables_transition() {
    let style = note_style(&note(), true);
    assert!(style.contains("z-index: 1000;"));
    assert!(style.contains("transition: none;"));
}

#[test]
fn class_marks_new_and_dragging() {
    let mut n = note();
    assert_eq!(note_class(&n, false), "note");
    n.is_new = true;
    assert_eq!(note_class(&n, false), "note note--new");
    assert_eq!(note_class(&n, true), "note note--new note--dragging");
}

// =============================================================
// Grab zones and swatches
// =============================================================

#[test]
fn every_handle_uses_its_cursor() {
    for handle in ResizeHandle::ALL {
        let style = handle_style(handle);
        assert!(style.contains(&format!("cursor: {};", handle.cursor())), "{handle}: {style}");
    }
}

#[test]
fn corner_zone_sits_on_the_corner() {
    let style = handle_style(ResizeHandle::TopLeft);
    assert!(style.contains("top: -4px; left: -4px; width: 16px; height: 16px;"));
}

#[test]
fn edge_zone_leaves_room_for_corners() {
    let style = handle_style(ResizeHandle::Right);
    assert!(style.contains("right: -4px; top: 16px; bottom: 16px; width: 8px;"));
}

#[test]
fn selected_swatch_is_ringed() {
    let color = Rgb::new(217, 236, 255);
    assert!(swatch_style(color, true).contains("border: 2px solid #333;"));
    assert!(swatch_style(color, false).contains("border: 2px solid transparent;"));
    assert!(swatch_style(color, false).starts_with("background-color: rgb(217, 236, 255);"));
}
