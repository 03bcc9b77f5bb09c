use cubesplit_split::{ConfigError, SplitError};
use thiserror::Error;

use crate::host::{ElementId, GroupId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("no element with id {0}")]
    UnknownElement(ElementId),
    #[error("no group with id {0}")]
    UnknownGroup(GroupId),
    #[error("an edit is already open")]
    EditAlreadyOpen,
    #[error("no edit is open")]
    NoOpenEdit,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("no cubes selected")]
    EmptySelection,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Why one cube of a batch was left in place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkipReason {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("{count} pieces exceeds the limit of {limit}")]
    TooManyPieces { count: u64, limit: u64 },
    #[error("host rejected the edit: {0}")]
    Host(#[from] EditError),
}
