//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by editor, storage and FFI.
//!
//! # Invariants
//! - A persisted note always carries a non-empty title and description.
//! - Identifiers are assigned by storage; `None` means "not yet created".

pub mod note;
