//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Drive one notes editor session per process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every editor call returns the full render state; Dart keeps no draft.
//! - After a call reports `navigate_back`, the session restarts empty.

use log::error;
use notesapp_core::db::open_db;
use notesapp_core::format::{due_date_label, now_millis};
use notesapp_core::repo::note_repo::normalize_note_limit;
use notesapp_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, DatePickerState, EditorController, EditorEvent, EditorSnapshot, EditorState,
    Navigator, NoteListQuery, NoteRecord, NoteStore, SqliteNoteRepository,
};
use rusqlite::Connection;
use std::sync::{Mutex, OnceLock, PoisonError};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static EDITOR_SESSION: Mutex<EditorSession> = Mutex::new(EditorSession::new());

/// Draft plus the picker selection of the open date dialog.
struct EditorSession {
    state: EditorState,
    picker: Option<DatePickerState>,
}

impl EditorSession {
    const fn new() -> Self {
        Self {
            state: EditorState {
                note_id: None,
                title: String::new(),
                description: String::new(),
                due_date: None,
                is_date_picker_open: false,
            },
            picker: None,
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the notes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub note_id: i64,
    pub title: String,
    pub description: String,
    /// Epoch milliseconds.
    pub due_date: i64,
    pub due_date_label: String,
}

/// Notes list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    pub items: Vec<NoteListItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    pub applied_limit: u32,
}

/// Render state of the editor after one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorResponse {
    /// Whether the storage-backed call could run at all.
    pub ok: bool,
    pub note_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub due_date: Option<i64>,
    pub due_date_label: String,
    pub is_date_picker_open: bool,
    /// Selection of the open date dialog.
    pub date_picker_selected_ms: Option<i64>,
    pub can_delete: bool,
    pub show_back: bool,
    /// Short-lived notice to show, e.g. the required-fields toast.
    pub message: Option<String>,
    /// The screen should be popped.
    pub navigate_back: bool,
}

/// Lists stored notes ordered by due date.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; errors are reported in `message` with no items.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(limit: Option<u32>) -> NotesListResponse {
    let applied_limit = normalize_note_limit(limit);
    let query = NoteListQuery {
        limit: Some(applied_limit),
        offset: 0,
    };
    let listed = open_store_conn().and_then(|conn| {
        let repo = SqliteNoteRepository::try_new(&conn)
            .map_err(|err| format!("notes repo init failed: {err}"))?;
        repo.list(&query).map_err(|err| err.to_string())
    });

    match listed {
        Ok(notes) => {
            let items = notes
                .into_iter()
                .filter_map(to_note_list_item)
                .collect::<Vec<_>>();
            NotesListResponse {
                message: format!("Found {} note(s).", items.len()),
                items,
                applied_limit,
            }
        }
        Err(err) => NotesListResponse {
            items: Vec::new(),
            message: format!("notes_list failed: {err}"),
            applied_limit,
        },
    }
}

/// Enters the editor for the route id; non-positive ids start a new note.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_open(id: i64) -> EditorResponse {
    with_editor_session(SessionStart::Fresh, |_| vec![EditorEvent::LoadById(id)])
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_set_title(title: String) -> EditorResponse {
    with_editor_session(SessionStart::Resume, |_| vec![EditorEvent::TitleChanged(title)])
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_set_description(description: String) -> EditorResponse {
    with_editor_session(SessionStart::Resume, |_| {
        vec![EditorEvent::DescriptionChanged(description)]
    })
}

/// Opens the date dialog preselecting the draft's date, or today.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_open_date_picker() -> EditorResponse {
    with_editor_session(SessionStart::Resume, |session| {
        let initial = session.state.due_date.unwrap_or_else(now_millis);
        session.picker = Some(DatePickerState::new(Some(initial)));
        vec![EditorEvent::OpenDatePicker]
    })
}

/// Moves the dialog selection; `None` clears it. No-op when the dialog is closed.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_select_date(selected_ms: Option<i64>) -> EditorResponse {
    with_editor_session(SessionStart::Resume, |session| {
        if let Some(picker) = session.picker.as_mut() {
            picker.select(selected_ms);
        }
        Vec::new()
    })
}

/// Confirms the dialog with its current selection.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_confirm_date() -> EditorResponse {
    with_editor_session(SessionStart::Resume, |session| {
        take_picker(session).confirm().into_events()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_dismiss_date_picker() -> EditorResponse {
    with_editor_session(SessionStart::Resume, |session| {
        take_picker(session).dismiss().into_events()
    })
}

/// Saves the draft when title, description and due date are all set.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_save() -> EditorResponse {
    with_editor_session(SessionStart::Resume, |_| vec![EditorEvent::Save])
}

/// Deletes the loaded note; no-op in new-note mode.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_delete() -> EditorResponse {
    with_editor_session(SessionStart::Resume, |_| vec![EditorEvent::Delete])
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_back() -> EditorResponse {
    with_editor_session(SessionStart::Resume, |_| vec![EditorEvent::Back])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionStart {
    Fresh,
    Resume,
}

#[derive(Debug, Default)]
struct BackRequest {
    requested: bool,
}

impl Navigator for BackRequest {
    fn navigate_back(&mut self) -> bool {
        self.requested = true;
        true
    }
}

fn with_editor_session(
    start: SessionStart,
    plan: impl FnOnce(&mut EditorSession) -> Vec<EditorEvent>,
) -> EditorResponse {
    let mut session = EDITOR_SESSION
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if start == SessionStart::Fresh {
        *session = EditorSession::new();
    }

    let conn = match open_store_conn() {
        Ok(conn) => conn,
        Err(err) => return EditorResponse::failure(&session, err),
    };
    let repo = match SqliteNoteRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            return EditorResponse::failure(&session, format!("notes repo init failed: {err}"))
        }
    };

    let events = plan(&mut *session);
    let mut editor = EditorController::with_state(
        std::mem::take(&mut session.state),
        &repo,
        BackRequest::default(),
        Vec::new(),
    );
    for event in events {
        editor.dispatch(event);
    }

    let navigate_back = editor.navigator().requested;
    let message = editor.notifier().last().cloned();
    session.state = editor.into_state();
    if navigate_back {
        *session = EditorSession::new();
    } else if !session.state.is_date_picker_open {
        session.picker = None;
    }
    EditorResponse::from_session(&session, true, message, navigate_back)
}

fn take_picker(session: &mut EditorSession) -> DatePickerState {
    session
        .picker
        .take()
        .unwrap_or_else(|| DatePickerState::new(session.state.due_date))
}

impl EditorResponse {
    fn from_session(
        session: &EditorSession,
        ok: bool,
        message: Option<String>,
        navigate_back: bool,
    ) -> Self {
        let snapshot = EditorSnapshot::from(&session.state);
        Self {
            ok,
            note_id: snapshot.note_id,
            title: snapshot.title,
            description: snapshot.description,
            due_date: snapshot.due_date,
            due_date_label: snapshot.due_date_label,
            is_date_picker_open: snapshot.is_date_picker_open,
            date_picker_selected_ms: session
                .picker
                .as_ref()
                .and_then(DatePickerState::selected_ms),
            can_delete: snapshot.can_delete,
            show_back: snapshot.show_back,
            message,
            navigate_back,
        }
    }

    fn failure(session: &EditorSession, message: String) -> Self {
        error!("event=ffi_editor module=ffi status=error error={message}");
        Self::from_session(session, false, Some(message), false)
    }
}

fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

fn open_store_conn() -> Result<Connection, String> {
    open_db(&config().db_path).map_err(|err| format!("notes DB open failed: {err}"))
}

fn to_note_list_item(note: NoteRecord) -> Option<NoteListItem> {
    Some(NoteListItem {
        note_id: note.id?,
        due_date_label: due_date_label(Some(note.due_date)),
        title: note.title,
        description: note.description,
        due_date: note.due_date,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, editor_back, editor_confirm_date, editor_delete, editor_dismiss_date_picker,
        editor_open, editor_open_date_picker, editor_save, editor_select_date,
        editor_set_description, editor_set_title, init_logging, notes_list, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn notes_list_clamps_limit() {
        let response = notes_list(Some(10_000));
        assert_eq!(response.applied_limit, 200);
    }

    // The editor session is process-global, so the whole visit lifecycle
    // lives in one test.
    #[test]
    fn editor_session_creates_reopens_and_deletes_note() {
        let title = unique_token("ffi-editor");

        let opened = editor_open(0);
        assert!(opened.ok, "{:?}", opened.message);
        assert_eq!(opened.note_id, None);
        assert!(!opened.can_delete);

        editor_set_title(title.clone());
        let drafted = editor_set_description("2 liters".to_string());
        assert_eq!(drafted.title, title);

        let blocked = editor_save();
        assert_eq!(blocked.message.as_deref(), Some("All fields are required"));
        assert!(!blocked.navigate_back);
        assert_eq!(blocked.title, title);

        let picking = editor_open_date_picker();
        assert!(picking.is_date_picker_open);
        assert!(picking.date_picker_selected_ms.is_some());
        assert_eq!(picking.due_date, None);

        let selected = editor_select_date(Some(1_700_000_000_000));
        assert_eq!(selected.date_picker_selected_ms, Some(1_700_000_000_000));
        assert_eq!(selected.due_date, None);

        let dated = editor_confirm_date();
        assert!(!dated.is_date_picker_open);
        assert_eq!(dated.date_picker_selected_ms, None);
        assert_eq!(dated.due_date, Some(1_700_000_000_000));
        assert_eq!(dated.due_date_label, "14 Nov 2023");

        let saved = editor_save();
        assert!(saved.navigate_back);
        assert_eq!(saved.message, None);

        let listed = notes_list(Some(200));
        let item = listed
            .items
            .iter()
            .find(|item| item.title == title)
            .expect("saved note should be listed");

        let reopened = editor_open(item.note_id);
        assert_eq!(reopened.note_id, Some(item.note_id));
        assert_eq!(reopened.description, "2 liters");
        assert!(reopened.can_delete);
        assert!(reopened.show_back);

        editor_open_date_picker();
        editor_select_date(None);
        let dismissed = editor_dismiss_date_picker();
        assert!(!dismissed.is_date_picker_open);
        assert_eq!(dismissed.due_date, Some(1_700_000_000_000));

        let deleted = editor_delete();
        assert!(deleted.navigate_back);
        assert!(!notes_list(Some(200))
            .items
            .iter()
            .any(|item| item.title == title));

        let fresh = editor_back();
        assert!(fresh.navigate_back);
        assert_eq!(fresh.title, "");
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
