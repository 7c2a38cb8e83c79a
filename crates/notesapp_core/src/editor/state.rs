//! Editor draft state.

use crate::model::note::{NoteId, NoteRecord};

/// Whether the editor is creating a note or editing a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    NewNote,
    EditingExisting,
}

/// Transient draft of the note being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Set once a stored note has been loaded.
    pub note_id: Option<NoteId>,
    pub title: String,
    pub description: String,
    /// Epoch milliseconds, `None` until the user picks a date.
    pub due_date: Option<i64>,
    pub is_date_picker_open: bool,
}

impl EditorState {
    pub fn mode(&self) -> EditorMode {
        match self.note_id {
            Some(_) => EditorMode::EditingExisting,
            None => EditorMode::NewNote,
        }
    }

    pub fn can_delete(&self) -> bool {
        self.mode() == EditorMode::EditingExisting
    }

    /// Save gate: every field must be set on the draft itself.
    ///
    /// `due_date` is checked before any fallback is applied, so a note cannot
    /// be saved until a date has been picked.
    pub fn passes_gate(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && self.due_date.is_some()
    }

    /// Builds the record that a save would persist.
    ///
    /// A missing due date falls back to `now_ms` here only; the draft keeps
    /// `None`.
    pub fn to_candidate(&self, now_ms: i64) -> NoteRecord {
        NoteRecord {
            id: self.note_id,
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.unwrap_or(now_ms),
        }
    }

    /// Replaces the draft fields with a stored record.
    pub(crate) fn populate_from(&mut self, note: NoteRecord) {
        self.note_id = note.id;
        self.title = note.title;
        self.description = note.description;
        self.due_date = Some(note.due_date);
    }
}
