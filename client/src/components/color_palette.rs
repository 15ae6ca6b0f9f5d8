//! Swatch row for recoloring a note.

use leptos::prelude::*;
use stickyboard::consts::NOTE_PALETTE;
use stickyboard::doc::{NoteId, Rgb};

use crate::state::handle::BoardHandle;
use crate::util::note_style::swatch_style;

/// Palette shown under a note while its palette is open. Picking a swatch
/// recolors the note and leaves the palette open.
#[component]
pub fn ColorPalette(id: NoteId, current: Rgb) -> impl IntoView {
    let board = expect_context::<BoardHandle>();

    let swatches = NOTE_PALETTE
        .into_iter()
        .map(|color| {
            let id = id.clone();
            view! {
                <button
                    class="color-palette__swatch"
                    title=color.to_css()
                    style=swatch_style(color, color == current)
                    on:pointerdown=move |ev| ev.stop_propagation()
                    on:click=move |_| {
                        board.dispatch(|engine| engine.pick_color(&id, color));
                    }
                ></button>
            }
        })
        .collect_view();

    view! { <div class="color-palette">{swatches}</div> }
}
