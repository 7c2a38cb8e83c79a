//! Pure editor reducer: `(state, event) -> (state, commands)`.
//!
//! # Invariants
//! - The reducer performs no I/O; every effect is returned as a command.
//! - `Save` emits `Upsert` only when the draft passes the gate.
//! - `Delete` emits nothing unless a stored note is being edited.

use super::event::{EditorCommand, EditorEvent};
use super::state::EditorState;
use crate::model::note::is_new_note_sentinel;

/// Message shown when a save is attempted with a missing field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Applies one event to the draft.
///
/// `now_ms` is only used as the due-date fallback of a save candidate.
pub fn reduce(
    mut state: EditorState,
    event: EditorEvent,
    now_ms: i64,
) -> (EditorState, Vec<EditorCommand>) {
    let commands = match event {
        EditorEvent::LoadById(id) if is_new_note_sentinel(id) => Vec::new(),
        EditorEvent::LoadById(id) => vec![EditorCommand::Fetch(id)],
        EditorEvent::Loaded(Some(note)) => {
            state.populate_from(note);
            Vec::new()
        }
        EditorEvent::Loaded(None) => Vec::new(),
        EditorEvent::TitleChanged(title) => {
            state.title = title;
            Vec::new()
        }
        EditorEvent::DescriptionChanged(description) => {
            state.description = description;
            Vec::new()
        }
        EditorEvent::DateChanged(due_date) => {
            state.due_date = due_date;
            Vec::new()
        }
        EditorEvent::OpenDatePicker => {
            state.is_date_picker_open = true;
            Vec::new()
        }
        EditorEvent::CloseDatePicker => {
            state.is_date_picker_open = false;
            Vec::new()
        }
        EditorEvent::Save => {
            let candidate = state.to_candidate(now_ms);
            if state.passes_gate() {
                vec![EditorCommand::Upsert(candidate), EditorCommand::NavigateBack]
            } else {
                vec![EditorCommand::ShowMessage(
                    REQUIRED_FIELDS_MESSAGE.to_string(),
                )]
            }
        }
        EditorEvent::Delete => match state.note_id {
            Some(id) => vec![EditorCommand::Delete(id), EditorCommand::NavigateBack],
            None => Vec::new(),
        },
        EditorEvent::Back => vec![EditorCommand::NavigateBack],
    };

    (state, commands)
}

#[cfg(test)]
mod tests {
    use super::{reduce, REQUIRED_FIELDS_MESSAGE};
    use crate::editor::event::{EditorCommand, EditorEvent};
    use crate::editor::state::EditorState;
    use crate::model::note::NoteRecord;

    const NOW: i64 = 1_650_000_000_000;

    fn fold(events: Vec<EditorEvent>) -> (EditorState, Vec<EditorCommand>) {
        let mut state = EditorState::default();
        let mut all = Vec::new();
        for event in events {
            let (next, commands) = reduce(state, event, NOW);
            state = next;
            all.extend(commands);
        }
        (state, all)
    }

    #[test]
    fn field_edits_are_last_write_wins() {
        let (state, commands) = fold(vec![
            EditorEvent::TitleChanged("a".to_string()),
            EditorEvent::DescriptionChanged("first".to_string()),
            EditorEvent::DateChanged(Some(10)),
            EditorEvent::TitleChanged("ab".to_string()),
            EditorEvent::DateChanged(None),
            EditorEvent::DescriptionChanged("second".to_string()),
            EditorEvent::DateChanged(Some(20)),
        ]);
        assert!(commands.is_empty());
        assert_eq!(state.title, "ab");
        assert_eq!(state.description, "second");
        assert_eq!(state.due_date, Some(20));
    }

    #[test]
    fn save_without_due_date_only_shows_message() {
        let (state, commands) = fold(vec![
            EditorEvent::TitleChanged("Buy milk".to_string()),
            EditorEvent::DescriptionChanged("2 liters".to_string()),
            EditorEvent::Save,
        ]);
        assert_eq!(
            commands,
            vec![EditorCommand::ShowMessage(REQUIRED_FIELDS_MESSAGE.to_string())]
        );
        assert_eq!(state.due_date, None);
    }

    #[test]
    fn save_with_empty_title_is_blocked() {
        let (_, commands) = fold(vec![
            EditorEvent::DescriptionChanged("d".to_string()),
            EditorEvent::DateChanged(Some(1)),
            EditorEvent::Save,
        ]);
        assert_eq!(
            commands,
            vec![EditorCommand::ShowMessage(REQUIRED_FIELDS_MESSAGE.to_string())]
        );
    }

    #[test]
    fn save_uses_draft_due_date_not_fallback() {
        let (_, commands) = fold(vec![
            EditorEvent::TitleChanged("Buy milk".to_string()),
            EditorEvent::DescriptionChanged("2 liters".to_string()),
            EditorEvent::OpenDatePicker,
            EditorEvent::DateChanged(Some(1_700_000_000_000)),
            EditorEvent::CloseDatePicker,
            EditorEvent::Save,
        ]);
        assert_eq!(
            commands,
            vec![
                EditorCommand::Upsert(NoteRecord::new("Buy milk", "2 liters", 1_700_000_000_000)),
                EditorCommand::NavigateBack,
            ]
        );
    }

    #[test]
    fn load_sentinel_skips_fetch() {
        let (state, commands) = fold(vec![EditorEvent::LoadById(0), EditorEvent::LoadById(-1)]);
        assert!(commands.is_empty());
        assert_eq!(state, EditorState::default());
    }

    #[test]
    fn load_requests_fetch_and_populates_on_result() {
        let (state, commands) = fold(vec![
            EditorEvent::LoadById(5),
            EditorEvent::Loaded(Some(NoteRecord::new("X", "Y", 100).with_id(5))),
        ]);
        assert_eq!(commands, vec![EditorCommand::Fetch(5)]);
        assert_eq!(state.note_id, Some(5));
        assert_eq!(state.title, "X");
        assert_eq!(state.description, "Y");
        assert_eq!(state.due_date, Some(100));
    }

    #[test]
    fn loaded_none_keeps_defaults() {
        let (state, _) = fold(vec![EditorEvent::LoadById(9), EditorEvent::Loaded(None)]);
        assert_eq!(state, EditorState::default());
    }

    #[test]
    fn delete_requires_note_id() {
        let (_, commands) = fold(vec![EditorEvent::Delete]);
        assert!(commands.is_empty());

        let (_, commands) = fold(vec![
            EditorEvent::Loaded(Some(NoteRecord::new("X", "Y", 100).with_id(5))),
            EditorEvent::Delete,
        ]);
        assert_eq!(
            commands,
            vec![EditorCommand::Delete(5), EditorCommand::NavigateBack]
        );
    }

    #[test]
    fn date_picker_flag_toggles() {
        let (state, _) = fold(vec![EditorEvent::OpenDatePicker]);
        assert!(state.is_date_picker_open);
        let (state, _) = reduce(state, EditorEvent::CloseDatePicker, NOW);
        assert!(!state.is_date_picker_open);
    }

    #[test]
    fn back_only_navigates() {
        let (state, commands) = fold(vec![
            EditorEvent::TitleChanged("draft".to_string()),
            EditorEvent::Back,
        ]);
        assert_eq!(commands, vec![EditorCommand::NavigateBack]);
        assert_eq!(state.title, "draft");
    }
}
