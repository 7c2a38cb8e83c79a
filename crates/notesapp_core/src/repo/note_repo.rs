//! Note store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide fetch/upsert/delete/list APIs over the `notes` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `NoteRecord::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - `upsert` with an id replaces that row or recreates it under the same id.

use crate::db::DbError;
use crate::model::note::{NoteId, NoteRecord, NoteValidationError};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    notes_id,
    title,
    description,
    due_date
FROM notes";

const NOTES_DEFAULT_LIMIT: u32 = 50;
const NOTES_LIMIT_MAX: u32 = 200;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for the notes list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    /// Maximum rows to return. Defaults to 50 and clamps to 200.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Store contract consumed by the notes editor.
pub trait NoteStore {
    /// Gets one note by id. A missing row is `Ok(None)`.
    fn fetch_by_id(&self, id: NoteId) -> RepoResult<Option<NoteRecord>>;
    /// Inserts a new note or replaces the row with the same id.
    ///
    /// Returns the id of the written row.
    fn upsert(&self, note: &NoteRecord) -> RepoResult<NoteId>;
    /// Deletes one note by id.
    fn delete(&self, id: NoteId) -> RepoResult<()>;
    /// Lists notes ordered by `due_date ASC, notes_id ASC`.
    fn list(&self, query: &NoteListQuery) -> RepoResult<Vec<NoteRecord>>;
}

impl<T: NoteStore + ?Sized> NoteStore for &T {
    fn fetch_by_id(&self, id: NoteId) -> RepoResult<Option<NoteRecord>> {
        (**self).fetch_by_id(id)
    }

    fn upsert(&self, note: &NoteRecord) -> RepoResult<NoteId> {
        (**self).upsert(note)
    }

    fn delete(&self, id: NoteId) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn list(&self, query: &NoteListQuery) -> RepoResult<Vec<NoteRecord>> {
        (**self).list(query)
    }
}

/// SQLite-backed note store.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// Fails when the `notes` table is missing, i.e. when the connection was
    /// not opened through [`crate::db::open_db`].
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let ready: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'notes'
            );",
            [],
            |row| row.get(0),
        )?;
        if ready != 1 {
            return Err(RepoError::InvalidData(
                "notes table missing; open the database through db::open_db".to_string(),
            ));
        }
        Ok(Self { conn })
    }
}

impl NoteStore for SqliteNoteRepository<'_> {
    fn fetch_by_id(&self, id: NoteId) -> RepoResult<Option<NoteRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE notes_id = ?1;"))?;
        let raw = stmt.query_row([id], read_raw_row).optional()?;
        raw.map(parse_note_row).transpose()
    }

    fn upsert(&self, note: &NoteRecord) -> RepoResult<NoteId> {
        note.validate()?;

        let id = match note.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO notes (notes_id, title, description, due_date)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(notes_id) DO UPDATE SET
                        title = excluded.title,
                        description = excluded.description,
                        due_date = excluded.due_date,
                        updated_at = (strftime('%s', 'now') * 1000);",
                    params![id, note.title.as_str(), note.description.as_str(), note.due_date],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO notes (title, description, due_date) VALUES (?1, ?2, ?3);",
                    params![note.title.as_str(), note.description.as_str(), note.due_date],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        debug!("event=note_upsert module=repo status=ok note_id={id}");
        Ok(id)
    }

    fn delete(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE notes_id = ?1;", [id])?;
        if changed == 0 {
            warn!("event=note_delete module=repo status=not_found note_id={id}");
            return Err(RepoError::NotFound(id));
        }

        debug!("event=note_delete module=repo status=ok note_id={id}");
        Ok(())
    }

    fn list(&self, query: &NoteListQuery) -> RepoResult<Vec<NoteRecord>> {
        let limit = normalize_note_limit(query.limit);
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL}
             ORDER BY due_date ASC, notes_id ASC
             LIMIT ?1 OFFSET ?2;"
        ))?;
        let mut rows = stmt.query(params![i64::from(limit), i64::from(query.offset)])?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(read_raw_row(row)?)?);
        }

        Ok(notes)
    }
}

/// Clamps the requested list size into the supported range.
pub fn normalize_note_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => NOTES_DEFAULT_LIMIT,
        Some(value) => value.min(NOTES_LIMIT_MAX),
    }
}

struct RawNoteRow {
    id: i64,
    title: String,
    description: String,
    due_date: i64,
}

fn read_raw_row(row: &Row<'_>) -> rusqlite::Result<RawNoteRow> {
    Ok(RawNoteRow {
        id: row.get("notes_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        due_date: row.get("due_date")?,
    })
}

fn parse_note_row(raw: RawNoteRow) -> RepoResult<NoteRecord> {
    let note = NoteRecord {
        id: Some(raw.id),
        title: raw.title,
        description: raw.description,
        due_date: raw.due_date,
    };
    note.validate().map_err(|err| {
        RepoError::InvalidData(format!("row notes_id={} failed validation: {err}", raw.id))
    })?;
    Ok(note)
}
