//! Inline style and class strings for note cards, grab zones, and swatches.
//!
//! DESIGN
//! ======
//! Notes are absolutely positioned inside the board and placed with a CSS
//! transform, so every geometric change is one style string swap. The
//! builders are pure so they can be tested without a DOM.

#[cfg(test)]
#[path = "note_style_test.rs"]
mod note_style_test;

use std::fmt::Write;

use stickyboard::doc::{Note, Rgb};
use stickyboard::geometry::ResizeHandle;

/// Thickness of the edge grab zones, in pixels.
pub const HANDLE_EDGE_PX: f64 = 8.0;

/// Side of the square corner grab zones, in pixels.
pub const HANDLE_CORNER_PX: f64 = 16.0;

/// Stacking order lifted onto the note under the pointer.
pub const DRAGGING_Z_INDEX: u32 = 1000;

/// `translate(..) rotate(..)` for a note's position and tilt.
pub fn note_transform(note: &Note) -> String {
    format!(
        "translate({}px, {}px) rotate({}deg)",
        note.position.x, note.position.y, note.rotation
    )
}

/// Full inline style for a note card.
///
/// While dragging, the card is raised above its siblings and its transition
/// is disabled so it tracks the pointer without easing.
pub fn note_style(note: &Note, dragging: bool) -> String {
    let mut style = format!(
        "position: absolute; left: 0; top: 0; width: {}px; height: {}px; background-color: {}; transform: {};",
        note.size.width,
        note.size.height,
        note.color.to_css(),
        note_transform(note)
    );
    if dragging {
        let _ = write!(style, " z-index: {DRAGGING_Z_INDEX}; transition: none;");
    }
    style
}

/// Class list for a note card.
pub fn note_class(note: &Note, dragging: bool) -> String {
    let mut class = String::from("note");
    if note.is_new {
        class.push_str(" note--new");
    }
    if dragging {
        class.push_str(" note--dragging");
    }
    class
}

/// Inline style placing one grab zone on the card's border.
pub fn handle_style(handle: ResizeHandle) -> String {
    let edge = HANDLE_EDGE_PX;
    let corner = HANDLE_CORNER_PX;
    let half = edge / 2.0;
    let placement = match handle {
        ResizeHandle::Top => format!("top: -{half}px; left: {corner}px; right: {corner}px; height: {edge}px;"),
        ResizeHandle::Bottom => format!("bottom: -{half}px; left: {corner}px; right: {corner}px; height: {edge}px;"),
        ResizeHandle::Left => format!("left: -{half}px; top: {corner}px; bottom: {corner}px; width: {edge}px;"),
        ResizeHandle::Right => format!("right: -{half}px; top: {corner}px; bottom: {corner}px; width: {edge}px;"),
        ResizeHandle::TopLeft => format!("top: -{half}px; left: -{half}px; width: {corner}px; height: {corner}px;"),
        ResizeHandle::TopRight => format!("top: -{half}px; right: -{half}px; width: {corner}px; height: {corner}px;"),
        ResizeHandle::BottomLeft => {
            format!("bottom: -{half}px; left: -{half}px; width: {corner}px; height: {corner}px;")
        }
        ResizeHandle::BottomRight => {
            format!("bottom: -{half}px; right: -{half}px; width: {corner}px; height: {corner}px;")
        }
    };
    format!("position: absolute; {placement} cursor: {};", handle.cursor())
}

/// Inline style for one palette swatch; the current color gets a dark ring.
pub fn swatch_style(color: Rgb, selected: bool) -> String {
    let border = if selected { "#333" } else { "transparent" };
    format!("background-color: {}; border: 2px solid {border};", color.to_css())
}
