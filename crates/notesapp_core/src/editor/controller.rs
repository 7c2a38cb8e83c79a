//! Editor controller: the thin shell around [`reduce`].
//!
//! # Responsibility
//! - Own the draft for one screen visit.
//! - Run reducer commands against the store, navigator and notifier.
//!
//! # Invariants
//! - A visit loads each route id at most once; loading a different id
//!   discards the previous draft.
//! - Once the visit navigates back, every further event is ignored; a
//!   double-tapped save or delete reaches the store once.
//! - A failed store write keeps the draft and the screen.

use super::date_picker::DatePickerOutcome;
use super::event::{EditorCommand, EditorEvent};
use super::reducer::reduce;
use super::state::EditorState;
use super::view::EditorSnapshot;
use crate::format::now_millis;
use crate::navigation::Navigator;
use crate::repo::note_repo::NoteStore;
use log::{debug, error, info};

/// Sink for short-lived user-visible notices.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Owns one editor visit.
pub struct EditorController<S: NoteStore, N: Navigator, M: Notifier> {
    state: EditorState,
    store: S,
    navigator: N,
    notifier: M,
    loaded_id: Option<i64>,
    finished: bool,
    clock: fn() -> i64,
}

impl<S: NoteStore, N: Navigator, M: Notifier> EditorController<S, N, M> {
    /// Starts a visit with an empty draft.
    pub fn new(store: S, navigator: N, notifier: M) -> Self {
        Self::with_state(EditorState::default(), store, navigator, notifier)
    }

    /// Resumes a visit from a previously captured draft.
    pub fn with_state(state: EditorState, store: S, navigator: N, notifier: M) -> Self {
        let loaded_id = state.note_id;
        Self {
            state,
            store,
            navigator,
            notifier,
            loaded_id,
            finished: false,
            clock: now_millis,
        }
    }

    /// Replaces the clock used for the due-date fallback.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::from(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn notifier(&self) -> &M {
        &self.notifier
    }

    /// Whether the visit has navigated back.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    /// Folds one event into the draft and runs the resulting commands.
    pub fn dispatch(&mut self, event: EditorEvent) {
        if self.finished {
            debug!("event=editor_dispatch module=editor status=ignored reason=finished");
            return;
        }
        if let EditorEvent::LoadById(id) = event {
            if self.loaded_id == Some(id) {
                debug!("event=editor_load module=editor status=skipped note_id={id}");
                return;
            }
            // A new route id starts from an empty draft; a not-found load
            // must not inherit the previous note.
            self.loaded_id = Some(id);
            self.state = EditorState::default();
        }

        let commands = self.apply(event);
        self.execute(commands);
    }

    /// Applies the close of the date picker modal.
    pub fn apply_date_picker(&mut self, outcome: DatePickerOutcome) {
        for event in outcome.into_events() {
            self.dispatch(event);
        }
    }

    fn apply(&mut self, event: EditorEvent) -> Vec<EditorCommand> {
        let (next, commands) = reduce(std::mem::take(&mut self.state), event, (self.clock)());
        self.state = next;
        commands
    }

    fn execute(&mut self, commands: Vec<EditorCommand>) {
        for command in commands {
            match command {
                EditorCommand::Fetch(id) => {
                    let loaded = match self.store.fetch_by_id(id) {
                        Ok(note) => {
                            info!(
                                "event=editor_load module=editor status={} note_id={id}",
                                if note.is_some() { "found" } else { "not_found" }
                            );
                            note
                        }
                        Err(err) => {
                            error!(
                                "event=editor_load module=editor status=error note_id={id} error={err}"
                            );
                            None
                        }
                    };
                    let follow_up = self.apply(EditorEvent::Loaded(loaded));
                    self.execute(follow_up);
                }
                EditorCommand::Upsert(note) => match self.store.upsert(&note) {
                    Ok(id) => info!("event=editor_save module=editor status=ok note_id={id}"),
                    Err(err) => {
                        error!("event=editor_save module=editor status=error error={err}");
                        self.notifier.notify(&format!("Failed to save note: {err}"));
                        return;
                    }
                },
                EditorCommand::Delete(id) => match self.store.delete(id) {
                    Ok(()) => info!("event=editor_delete module=editor status=ok note_id={id}"),
                    Err(err) => {
                        error!(
                            "event=editor_delete module=editor status=error note_id={id} error={err}"
                        );
                        self.notifier
                            .notify(&format!("Failed to delete note: {err}"));
                        return;
                    }
                },
                EditorCommand::NavigateBack => {
                    self.finished = true;
                    self.navigator.navigate_back();
                }
                EditorCommand::ShowMessage(message) => {
                    debug!("event=editor_notice module=editor status=shown");
                    self.notifier.notify(&message);
                }
            }
        }
    }
}
