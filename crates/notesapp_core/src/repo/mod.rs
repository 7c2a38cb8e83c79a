//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the note store contract consumed by the editor.
//! - Isolate SQLite query details from editor orchestration.
//!
//! # Invariants
//! - Repository writes enforce `NoteRecord::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod note_repo;
