//! Board UI components.

pub mod color_palette;
pub mod new_note_bar;
pub mod note_card;
pub mod sticky_board;
