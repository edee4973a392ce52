// ---------------------------------------------------------------------------
// CommandError: non-fatal conditions reported by history and replay requests
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::Entity;

use crate::replay::ReplayDirection;

/// Conditions a history or replay request can report.
///
/// None of these are fatal: the request is dropped, state is left unchanged,
/// and the processing system logs the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Undo or redo was requested while the corresponding log is empty.
    EmptyHistory(HistoryLog),
    /// A replay start was requested while another replay is running.
    ReplayAlreadyActive(ReplayDirection),
    /// The command's target entity has no movable transform.
    MissingTarget(Entity),
}

/// Which of the two history logs an [`CommandError::EmptyHistory`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLog {
    Applied,
    Redo,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::EmptyHistory(HistoryLog::Applied) => {
                write!(f, "Can't undo because we are back where we started")
            }
            CommandError::EmptyHistory(HistoryLog::Redo) => {
                write!(f, "Can't redo because we are at the end")
            }
            CommandError::ReplayAlreadyActive(direction) => {
                write!(f, "Ignoring {} request: a replay is already running", direction.label())
            }
            CommandError::MissingTarget(entity) => {
                write!(f, "Command target {entity} has no movable transform")
            }
        }
    }
}

impl std::error::Error for CommandError {}
