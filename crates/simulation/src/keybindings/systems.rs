use bevy::prelude::*;

use super::actions::{CommandSlot, InputAction};
use super::bindings::{InputBindings, RebindState};
use super::command_table::{CommandBindings, SwapBindingsRequested};
use crate::history::{ExecuteCommand, RedoRequested, UndoRequested};
use crate::replay::{ReplayDirection, ReplayPlayer, ReplayRequested, StopReplayRequested};

/// Turns key presses into command and replay requests.
///
/// At most one of move/undo/redo fires per frame, checked in that order.
/// Swap and the two replay keys are checked independently. While a replay is
/// active only the stop key is read, even with a rebind pending.
#[allow(clippy::too_many_arguments)]
pub fn keyboard_commands(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<InputBindings>,
    table: Res<CommandBindings>,
    rebind: Res<RebindState>,
    player: Res<ReplayPlayer>,
    mut execute: EventWriter<ExecuteCommand>,
    mut undo: EventWriter<UndoRequested>,
    mut redo: EventWriter<RedoRequested>,
    mut swap: EventWriter<SwapBindingsRequested>,
    mut replay: EventWriter<ReplayRequested>,
    mut stop: EventWriter<StopReplayRequested>,
) {
    let Some(keys) = keys else {
        return;
    };
    if player.is_replaying() {
        if bindings.just_pressed(InputAction::StopReplay, &keys) {
            stop.send(StopReplayRequested);
        }
        return;
    }
    if rebind.awaiting.is_some() {
        return;
    }

    let pressed_slot = CommandSlot::ALL
        .into_iter()
        .find(|slot| bindings.just_pressed(slot.action(), &keys));

    if let Some(slot) = pressed_slot {
        execute.send(ExecuteCommand(table.get(slot)));
    } else if bindings.just_pressed(InputAction::Undo, &keys) {
        undo.send(UndoRequested);
    } else if bindings.just_pressed(InputAction::Redo, &keys) {
        redo.send(RedoRequested);
    }

    if bindings.just_pressed(InputAction::SwapBindings, &keys) {
        let (a, b) = bindings.swap_pair;
        swap.send(SwapBindingsRequested { a, b });
    }
    if bindings.just_pressed(InputAction::Replay, &keys) {
        replay.send(ReplayRequested(ReplayDirection::Forward));
    }
    if bindings.just_pressed(InputAction::ReversedPlay, &keys) {
        replay.send(ReplayRequested(ReplayDirection::Reversed));
    }
}
