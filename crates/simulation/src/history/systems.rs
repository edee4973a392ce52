//! Request events and the systems that process them.

use bevy::prelude::*;

use super::log::CommandHistory;
use super::ops::{dispatch_command, fold_into_start, redo_next, undo_last};
use crate::command::{MoveCommand, MoverQuery};
use crate::error::CommandError;
use crate::params::DemoParams;
use crate::replay::{ReplayAnchors, ReplayPlayer};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Execute a command and record it in the history.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteCommand(pub MoveCommand);

/// Marker event: undo the most recent command.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UndoRequested;

/// Marker event: redo the most recently undone command.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RedoRequested;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Drains `ExecuteCommand` events into the history. Dropped while replaying.
pub fn process_dispatch(
    mut events: EventReader<ExecuteCommand>,
    player: Res<ReplayPlayer>,
    params: Res<DemoParams>,
    mut history: ResMut<CommandHistory>,
    mut anchors: ResMut<ReplayAnchors>,
    mut movers: MoverQuery,
) {
    if player.is_replaying() {
        for ExecuteCommand(command) in events.read() {
            debug!("Replay in progress, ignoring {}", command.label());
        }
        return;
    }
    for &ExecuteCommand(command) in events.read() {
        if let Err(err) = dispatch_command(
            command,
            &mut history,
            &mut anchors,
            &mut movers,
            params.move_step,
        ) {
            warn!("{err}");
        }
    }
}

/// Processes undo requests. Dropped while replaying.
pub fn process_undo(
    mut events: EventReader<UndoRequested>,
    player: Res<ReplayPlayer>,
    params: Res<DemoParams>,
    mut history: ResMut<CommandHistory>,
    mut movers: MoverQuery,
) {
    if player.is_replaying() {
        events.clear();
        return;
    }
    for _ in events.read() {
        match undo_last(&mut history, &mut movers, params.move_step) {
            Ok(command) => debug!("Undid {}", command.label()),
            Err(err @ CommandError::EmptyHistory(_)) => info!("{err}"),
            Err(err) => warn!("{err}"),
        }
    }
}

/// Processes redo requests. Dropped while replaying.
pub fn process_redo(
    mut events: EventReader<RedoRequested>,
    player: Res<ReplayPlayer>,
    params: Res<DemoParams>,
    mut history: ResMut<CommandHistory>,
    mut anchors: ResMut<ReplayAnchors>,
    mut movers: MoverQuery,
) {
    if player.is_replaying() {
        events.clear();
        return;
    }
    for _ in events.read() {
        match redo_next(&mut history, &mut anchors, &mut movers, params.move_step) {
            Ok(command) => debug!("Redid {}", command.label()),
            Err(err @ CommandError::EmptyHistory(_)) => info!("{err}"),
            Err(err) => warn!("{err}"),
        }
    }
}

/// Applies a changed `DemoParams::max_history` to the history.
pub fn sync_history_limit(
    params: Res<DemoParams>,
    mut history: ResMut<CommandHistory>,
    mut anchors: ResMut<ReplayAnchors>,
    movers: MoverQuery,
) {
    if !params.is_changed() || history.max_len() == params.max_history {
        return;
    }
    for evicted in history.set_max_len(params.max_history) {
        fold_into_start(evicted, &mut anchors, &movers, params.move_step);
    }
}
