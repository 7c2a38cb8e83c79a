//! Editor events (inputs) and commands (side effects requested by the reducer).

use crate::model::note::{NoteId, NoteRecord};

/// Discrete inputs folded into the editor draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Screen entry with the route id; non-positive ids mean a new note.
    LoadById(i64),
    /// Result of a fetch issued for `LoadById`.
    Loaded(Option<NoteRecord>),
    TitleChanged(String),
    DescriptionChanged(String),
    /// Date picker confirmation; `None` when nothing was selected.
    DateChanged(Option<i64>),
    OpenDatePicker,
    CloseDatePicker,
    Save,
    Delete,
    /// Top bar back action.
    Back,
}

/// Side effects executed by the controller shell, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Fetch(NoteId),
    Upsert(NoteRecord),
    Delete(NoteId),
    NavigateBack,
    ShowMessage(String),
}
