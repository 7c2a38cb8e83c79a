//! Render model of the editor screen.

use super::state::EditorState;
use crate::format::due_date_label;
use crate::model::note::NoteId;

/// Everything a view needs to draw the editor; derived from state only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub note_id: Option<NoteId>,
    pub title: String,
    pub description: String,
    pub due_date: Option<i64>,
    pub due_date_label: String,
    pub is_date_picker_open: bool,
    /// Delete action in the top bar.
    pub can_delete: bool,
    /// Back action in the top bar.
    pub show_back: bool,
}

impl From<&EditorState> for EditorSnapshot {
    fn from(state: &EditorState) -> Self {
        let editing_existing = state.can_delete();
        Self {
            note_id: state.note_id,
            title: state.title.clone(),
            description: state.description.clone(),
            due_date: state.due_date,
            due_date_label: due_date_label(state.due_date),
            is_date_picker_open: state.is_date_picker_open,
            can_delete: editing_existing,
            show_back: editing_existing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EditorSnapshot;
    use crate::editor::state::EditorState;

    #[test]
    fn top_bar_actions_follow_mode() {
        let fresh = EditorSnapshot::from(&EditorState::default());
        assert!(!fresh.can_delete);
        assert!(!fresh.show_back);
        assert_eq!(fresh.due_date_label, "No due date");

        let existing = EditorSnapshot::from(&EditorState {
            note_id: Some(1),
            due_date: Some(0),
            ..EditorState::default()
        });
        assert!(existing.can_delete);
        assert!(existing.show_back);
        assert_eq!(existing.due_date_label, "01 Jan 1970");
    }
}
