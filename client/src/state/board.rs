//! Render snapshot of the board.
//!
//! DESIGN
//! ======
//! The engine is not reactive. After every command the host folds the
//! returned [`Action`]s into a [`BoardView`] held in an `RwSignal`, and the
//! components render from that snapshot only. Timers requested by the engine
//! are handed back to the caller, which owns the browser clock.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use stickyboard::doc::{Note, NoteId};
use stickyboard::engine::{Action, Engine};
use stickyboard::persist::BlobStore;

/// A settle timer the host must start: call `Engine::settle(id)` after `after_ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettleTimer {
    pub id: NoteId,
    pub after_ms: u32,
}

/// Everything the view needs to draw the board.
#[derive(Clone, Debug, Default)]
pub struct BoardView {
    /// Notes in creation order.
    pub notes: Vec<Note>,
    /// Note whose text is being edited.
    pub editing: Option<NoteId>,
    /// Note whose color palette is open.
    pub palette: Option<NoteId>,
    /// Note currently under a move or resize drag.
    pub dragging: Option<NoteId>,
    /// Text in the open editor. Seeded from the note when editing starts and
    /// kept across re-renders until the edit ends.
    pub edit_draft: String,
}

impl BoardView {
    /// Snapshot the engine as it stands.
    pub fn snapshot<S: BlobStore>(engine: &Engine<S>) -> Self {
        let mut view = Self::default();
        view.refresh(engine);
        view
    }

    /// Fold engine actions into the snapshot and return the timers to start.
    pub fn apply<S: BlobStore>(&mut self, engine: &Engine<S>, actions: Vec<Action>) -> Vec<SettleTimer> {
        let mut timers = Vec::new();
        let mut stale = false;
        for action in actions {
            match action {
                Action::RenderNeeded => stale = true,
                Action::ScheduleSettle { id, after_ms } => timers.push(SettleTimer { id, after_ms }),
                Action::DragStarted { id } => self.dragging = Some(id),
                Action::DragEnded { id } => {
                    if self.dragging.as_ref() == Some(&id) {
                        self.dragging = None;
                    }
                }
            }
        }
        if stale {
            self.refresh(engine);
        }
        timers
    }

    pub fn is_editing(&self, id: &NoteId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    pub fn palette_open(&self, id: &NoteId) -> bool {
        self.palette.as_ref() == Some(id)
    }

    pub fn is_dragging(&self, id: &NoteId) -> bool {
        self.dragging.as_ref() == Some(id)
    }

    fn refresh<S: BlobStore>(&mut self, engine: &Engine<S>) {
        let editing = engine.interaction().editing().cloned();
        if editing != self.editing {
            self.edit_draft = editing
                .as_ref()
                .and_then(|id| engine.note(id))
                .map(|note| note.content.clone())
                .unwrap_or_default();
        }
        self.notes = engine.notes().to_vec();
        self.editing = editing;
        self.palette = engine.interaction().palette().cloned();
    }
}
