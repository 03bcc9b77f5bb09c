//! In-editor side of the split: host contracts, an in-memory document,
//! undo journal, the split command, and its menu registration.
#![forbid(unsafe_code)]

pub mod command;
pub mod document;
pub mod error;
pub mod host;
pub mod plugin;
pub mod undo;

pub use command::{
    EMPTY_SELECTION_MESSAGE, EMPTY_SELECTION_TITLE, SPLIT_UNDO_LABEL, SplitFailure, SplitOutcome,
    SplitReport, split_selection,
};
pub use document::{Document, Node, Notice};
pub use error::{CommandError, EditError, SkipReason};
pub use host::{ElementId, GroupId, SceneHost};
pub use plugin::{Action, FILTER_MENU, MenuBar, Plugin, SPLIT_ACTION_ID};
pub use undo::UndoJournal;
