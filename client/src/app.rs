//! Root application component and window-level listeners.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use stickyboard::config::BoardConfig;

use crate::components::sticky_board::StickyBoard;
use crate::state::handle::BoardHandle;
use crate::util::browser::window_viewport;

/// Root application component.
///
/// Loads the board from `localStorage`, provides the [`BoardHandle`]
/// context, and ends drags on any pointer release in the window.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = window_viewport().map_or_else(BoardConfig::default, BoardConfig::for_viewport);
    let board = BoardHandle::open(config);
    provide_context(board);

    // The app lives as long as the page, so these listeners are never removed.
    #[cfg(feature = "csr")]
    {
        // Releases outside any note still end the drag.
        let _ = window_event_listener(leptos::ev::pointerup, move |_| {
            board.dispatch(|engine| engine.on_pointer_up());
        });
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(viewport) = window_viewport() {
                board.set_viewport(viewport);
            }
        });
    }

    view! {
        <Title text="Sticky Notes"/>
        <StickyBoard/>
    }
}
