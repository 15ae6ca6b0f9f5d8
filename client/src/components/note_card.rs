//! A single draggable, resizable sticky note.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pointer-down on the card body starts a move; pointer-down on one of the
//! eight border grab zones starts a resize from that handle. Moves and
//! releases are picked up by the board and the window, so the card only
//! reports where a drag begins.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use stickyboard::doc::Note;
use stickyboard::geometry::ResizeHandle;
use stickyboard::input::PointerTarget;

use crate::components::color_palette::ColorPalette;
use crate::state::handle::BoardHandle;
use crate::util::browser::client_point;
use crate::util::note_style::{handle_style, note_class, note_style};

/// Note card rendered from a snapshot of one note.
#[component]
pub fn NoteCard(note: Note, editing: bool, palette_open: bool, dragging: bool) -> impl IntoView {
    let board = expect_context::<BoardHandle>();
    let id = note.id.clone();

    let on_body_down = {
        let id = id.clone();
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            board.dispatch(|engine| engine.on_pointer_down(&id, PointerTarget::Body, client_point(&ev)));
        }
    };

    let handles = ResizeHandle::ALL
        .into_iter()
        .map(|handle| {
            let id = id.clone();
            view! {
                <div
                    class="note__handle"
                    data-handle=handle.name()
                    style=handle_style(handle)
                    on:pointerdown=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        board.dispatch(|engine| {
                            engine.on_pointer_down(&id, PointerTarget::Handle(handle), client_point(&ev))
                        });
                    }
                ></div>
            }
        })
        .collect_view();

    let body = if editing {
        let id = id.clone();
        let draft = board.view.with_untracked(|view| view.edit_draft.clone());
        view! {
            <textarea
                class="note__editor"
                prop:value=draft
                autofocus=true
                on:pointerdown=move |ev| ev.stop_propagation()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    board.view.update_untracked(|view| view.edit_draft = text);
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        board.dispatch(|engine| engine.cancel_edit());
                    }
                }
                on:blur=move |ev| {
                    // Escape already left edit mode; the blur from unmounting must not save.
                    if board.view.with_untracked(|view| view.is_editing(&id)) {
                        let text = event_target_value(&ev);
                        board.dispatch(|engine| engine.commit_edit(&id, &text));
                    }
                }
            ></textarea>
        }
        .into_any()
    } else {
        view! { <p class="note__content">{note.content.clone()}</p> }.into_any()
    };

    let on_edit = {
        let id = id.clone();
        move |_| {
            board.dispatch(|engine| engine.begin_edit(&id));
        }
    };
    let on_palette = {
        let id = id.clone();
        move |_| {
            board.dispatch(|engine| engine.toggle_palette(&id));
        }
    };
    let on_delete = {
        let id = id.clone();
        move |_| {
            board.dispatch(|engine| engine.delete_note(&id));
        }
    };

    let palette = palette_open.then(|| view! { <ColorPalette id=id.clone() current=note.color/> });

    view! {
        <div
            class=note_class(&note, dragging)
            style=note_style(&note, dragging)
            data-note-id=id.to_string()
            on:pointerdown=on_body_down
            on:pointerup=move |_| {
                board.dispatch(|engine| engine.on_pointer_up());
            }
        >
            <div class="note__toolbar">
                <button class="note__button" title="Edit" on:click=on_edit>"✎"</button>
                <button class="note__button" title="Color" on:click=on_palette>"🎨"</button>
                <button class="note__button note__button--delete" title="Delete" on:click=on_delete>"×"</button>
            </div>
            {body}
            {palette}
            {handles}
        </div>
    }
}
