//! Dispatch, undo and redo: the history manager's three operations.
//!
//! Each operation moves commands between the two logs and drives the target
//! transform. The logs are updated even when the target can't be resolved so
//! that they stay in step with what the player asked for.

use bevy::prelude::*;

use super::log::CommandHistory;
use crate::command::{MoveCommand, MoverQuery};
use crate::error::{CommandError, HistoryLog};
use crate::replay::ReplayAnchors;

/// Execute a new command, record it, and clear the redo log.
///
/// Also snapshots the mover's position as the reversed-play anchor.
pub fn dispatch_command(
    command: MoveCommand,
    history: &mut CommandHistory,
    anchors: &mut ReplayAnchors,
    movers: &mut MoverQuery<'_, '_>,
    step: f32,
) -> Result<(), CommandError> {
    let result = command.execute(movers, step);
    if let Some(evicted) = history.push(command) {
        fold_into_start(evicted, anchors, movers, step);
    }

    let tracked = command.target().or(anchors.mover);
    if let Some(transform) = tracked.and_then(|e| movers.get(e).ok()) {
        anchors.reversed_start = transform.translation;
    }
    result
}

/// Undo the most recent command and move it onto the redo log.
pub fn undo_last(
    history: &mut CommandHistory,
    movers: &mut MoverQuery<'_, '_>,
    step: f32,
) -> Result<MoveCommand, CommandError> {
    let command = history
        .pop_undo()
        .ok_or(CommandError::EmptyHistory(HistoryLog::Applied))?;
    history.push_redo(command);
    command.undo(movers, step)?;
    Ok(command)
}

/// Re-execute the most recently undone command and move it back onto the
/// applied log.
pub fn redo_next(
    history: &mut CommandHistory,
    anchors: &mut ReplayAnchors,
    movers: &mut MoverQuery<'_, '_>,
    step: f32,
) -> Result<MoveCommand, CommandError> {
    let command = history
        .pop_redo()
        .ok_or(CommandError::EmptyHistory(HistoryLog::Redo))?;
    if let Some(evicted) = history.push_undo_no_clear(command) {
        fold_into_start(evicted, anchors, movers, step);
    }
    command.execute(movers, step)?;
    Ok(command)
}

/// An evicted command no longer replays from the start anchor, so the anchor
/// has to absorb its motion.
pub(crate) fn fold_into_start(
    evicted: MoveCommand,
    anchors: &mut ReplayAnchors,
    movers: &MoverQuery<'_, '_>,
    step: f32,
) {
    let rotation = evicted
        .target()
        .or(anchors.mover)
        .and_then(|e| movers.get(e).ok())
        .map(|t| t.rotation)
        .unwrap_or(Quat::IDENTITY);
    anchors.fold_evicted(evicted, rotation, step);
}
