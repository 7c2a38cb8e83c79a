//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note entity and its write-time validation.
//!
//! # Invariants
//! - `title` and `description` must be non-empty before persistence.
//! - `id`, when set, is a positive storage identifier.
//! - `due_date` is Unix epoch milliseconds.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage identifier of a persisted note.
pub type NoteId = i64;

/// Persisted note entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Storage-assigned id. `None` until the note has been created.
    pub id: Option<NoteId>,
    pub title: String,
    pub description: String,
    /// Unix epoch milliseconds.
    pub due_date: i64,
}

/// Validation failures for note writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyDescription,
    InvalidId(NoteId),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyDescription => write!(f, "note description must not be empty"),
            Self::InvalidId(id) => write!(f, "note id must be positive, got {id}"),
        }
    }
}

impl Error for NoteValidationError {}

impl NoteRecord {
    /// Creates a not-yet-persisted note.
    pub fn new(title: impl Into<String>, description: impl Into<String>, due_date: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            due_date,
        }
    }

    /// Returns a copy bound to the given storage id.
    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    /// Validates write-time invariants.
    ///
    /// Emptiness is checked literally; whitespace-only text is accepted,
    /// matching the editor's save gate.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if let Some(id) = self.id {
            if id <= 0 {
                return Err(NoteValidationError::InvalidId(id));
            }
        }
        if self.title.is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if self.description.is_empty() {
            return Err(NoteValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Returns whether an incoming screen id means "no existing note".
///
/// The notes route carries a plain integer; non-positive values open the
/// editor in new-note mode without touching storage.
pub fn is_new_note_sentinel(id: i64) -> bool {
    id <= 0
}
