//! Notes editor screen logic.
//!
//! # Responsibility
//! - Model the in-memory draft of one note being edited.
//! - Fold user and system events into that draft through a pure reducer.
//! - Execute the resulting commands against storage, navigation and the
//!   user-facing notifier.
//!
//! # Invariants
//! - Draft state is owned by exactly one controller per screen visit.
//! - Only the controller mutates state; views render snapshots.
//! - Nothing is persisted unless title, description and due date are set.

pub mod controller;
pub mod date_picker;
pub mod event;
pub mod reducer;
pub mod state;
pub mod view;

pub use controller::{EditorController, Notifier};
pub use date_picker::{DatePickerOutcome, DatePickerState};
pub use event::{EditorCommand, EditorEvent};
pub use reducer::{reduce, REQUIRED_FIELDS_MESSAGE};
pub use state::{EditorMode, EditorState};
pub use view::EditorSnapshot;
