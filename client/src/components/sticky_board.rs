//! Board surface: new-note bar, the notes, and the empty-state hint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board fills the window and receives pointer moves for whichever note
//! is latched by a drag. It re-renders the cards from the [`BoardView`]
//! snapshot whenever the engine reports a change.
//!
//! [`BoardView`]: crate::state::board::BoardView

use leptos::prelude::*;

use crate::components::new_note_bar::NewNoteBar;
use crate::components::note_card::NoteCard;
use crate::state::handle::BoardHandle;
use crate::util::browser::client_point;

/// Shown while the board has no notes.
pub const EMPTY_BOARD_MESSAGE: &str = "No notes yet. Create one to get started!";

/// The whole sticky-notes board.
#[component]
pub fn StickyBoard() -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    let cards = move || {
        let view = board.view.get();
        view.notes
            .iter()
            .map(|note| {
                view! {
                    <NoteCard
                        note=note.clone()
                        editing=view.is_editing(&note.id)
                        palette_open=view.palette_open(&note.id)
                        dragging=view.is_dragging(&note.id)
                    />
                }
            })
            .collect_view()
    };

    let empty = move || {
        board
            .view
            .with(|view| view.notes.is_empty())
            .then(|| view! { <p class="board__empty">{EMPTY_BOARD_MESSAGE}</p> })
    };

    view! {
        <div
            class="board"
            style="position: relative; width: 100vw; height: 100vh; overflow: hidden;"
            on:pointermove=move |ev| {
                board.dispatch(|engine| engine.on_pointer_move(client_point(&ev)));
            }
        >
            <NewNoteBar/>
            {empty}
            <div class="board__notes">{cards}</div>
        </div>
    }
}
