//! Core domain logic for the notes app.
//! This crate is the single source of truth for note invariants and for the
//! editor screen's state machine.

pub mod config;
pub mod db;
pub mod editor;
pub mod format;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod repo;

pub use config::AppConfig;
pub use editor::{
    reduce, DatePickerOutcome, DatePickerState, EditorCommand, EditorController, EditorEvent,
    EditorMode, EditorSnapshot, EditorState, Notifier, REQUIRED_FIELDS_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{is_new_note_sentinel, NoteId, NoteRecord, NoteValidationError};
pub use navigation::{BackStack, Navigator, Screen};
pub use repo::note_repo::{
    NoteListQuery, NoteStore, RepoError, RepoResult, SqliteNoteRepository,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
