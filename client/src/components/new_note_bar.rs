//! Text input and button for creating notes.

use leptos::prelude::*;

use crate::state::handle::BoardHandle;

/// Input bar at the top of the board. Enter or the button submits; blank
/// input is ignored and kept, anything else becomes a note and clears the field.
#[component]
pub fn NewNoteBar() -> impl IntoView {
    let board = expect_context::<BoardHandle>();
    let draft = RwSignal::new(String::new());

    let submit = move || {
        let text = draft.get_untracked();
        if board.dispatch(|engine| engine.add_note(&text)) {
            draft.set(String::new());
        }
    };

    view! {
        <div class="new-note-bar">
            <input
                class="new-note-bar__input"
                type="text"
                placeholder="Write a note..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <button class="btn btn--primary" on:click=move |_| submit()>
                "Add Note"
            </button>
        </div>
    }
}
