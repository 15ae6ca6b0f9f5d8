//! Shared handle to the engine and its render snapshot.
//!
//! DESIGN
//! ======
//! Components never touch the engine directly. They pass a command to
//! [`BoardHandle::dispatch`], which runs it against the engine, folds the
//! resulting actions into the [`BoardView`] signal, and starts any settle
//! timers. The handle is `Copy`, so every event closure can capture it.
//!
//! The engine owns a `web_sys::Storage`, which is not `Send`; it lives in a
//! local-storage arena slot rather than a signal.

use leptos::prelude::*;
use stickyboard::config::BoardConfig;
use stickyboard::engine::{Action, Engine};
use stickyboard::geometry::Size;

use crate::state::board::{BoardView, SettleTimer};
use crate::util::local_storage::LocalStorageBlobStore;

/// The engine as wired up in the browser.
pub type BoardEngine = Engine<LocalStorageBlobStore>;

/// Engine plus reactive snapshot, provided through context.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    engine: StoredValue<BoardEngine, LocalStorage>,
    /// What the components render from.
    pub view: RwSignal<BoardView>,
}

impl BoardHandle {
    /// Load the board from `localStorage`.
    pub fn open(config: BoardConfig) -> Self {
        let engine = Engine::open(LocalStorageBlobStore::open(), config);
        let view = RwSignal::new(BoardView::snapshot(&engine));
        Self { engine: StoredValue::new_local(engine), view }
    }

    /// Run one engine command and reflect its effects.
    ///
    /// Returns `false` when the command was a no-op.
    pub fn dispatch(self, command: impl FnOnce(&mut BoardEngine) -> Vec<Action>) -> bool {
        let outcome = self.engine.try_update_value(|engine| {
            let actions = command(engine);
            if actions.is_empty() {
                return None;
            }
            Some(self.view.try_update(|view| view.apply(engine, actions)).unwrap_or_default())
        });
        let Some(timers) = outcome.flatten() else {
            return false;
        };
        self.schedule(timers);
        true
    }

    /// Track the window size for placement and move clamping.
    pub fn set_viewport(self, viewport: Size) {
        self.engine.update_value(|engine| engine.set_viewport(viewport));
    }

    fn schedule(self, timers: Vec<SettleTimer>) {
        #[cfg(feature = "csr")]
        for SettleTimer { id, after_ms } in timers {
            gloo_timers::callback::Timeout::new(after_ms, move || {
                self.dispatch(|engine| engine.settle(&id));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = timers;
        }
    }
}
