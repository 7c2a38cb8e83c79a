//! Single-date picker modal.
//!
//! The picker never touches the draft directly; its outcome is translated
//! into editor events.

use super::event::EditorEvent;

/// How the picker was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerOutcome {
    /// Confirm button; carries the selection, which may be empty.
    Confirmed(Option<i64>),
    Dismissed,
}

impl DatePickerOutcome {
    /// Events the editor receives for this outcome.
    ///
    /// A confirmation applies the date and then closes the picker.
    pub fn into_events(self) -> Vec<EditorEvent> {
        match self {
            Self::Confirmed(selected) => vec![
                EditorEvent::DateChanged(selected),
                EditorEvent::CloseDatePicker,
            ],
            Self::Dismissed => vec![EditorEvent::CloseDatePicker],
        }
    }
}

/// Selection held by an open picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerState {
    selected_ms: Option<i64>,
}

impl DatePickerState {
    /// Opens the picker preselecting `initial_selected_ms`.
    pub fn new(initial_selected_ms: Option<i64>) -> Self {
        Self {
            selected_ms: initial_selected_ms,
        }
    }

    pub fn selected_ms(&self) -> Option<i64> {
        self.selected_ms
    }

    pub fn select(&mut self, selected_ms: Option<i64>) {
        self.selected_ms = selected_ms;
    }

    pub fn confirm(&self) -> DatePickerOutcome {
        DatePickerOutcome::Confirmed(self.selected_ms)
    }

    pub fn dismiss(&self) -> DatePickerOutcome {
        DatePickerOutcome::Dismissed
    }
}
