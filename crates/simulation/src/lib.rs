use bevy::prelude::*;

pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod keybindings;
pub mod movable;
pub mod params;
pub mod replay;
pub mod simulation_sets;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use history::{
    process_dispatch, process_redo, process_undo, sync_history_limit, CommandHistory,
    ExecuteCommand, RedoRequested, UndoRequested,
};
use keybindings::{
    bind_new_movers, capture_rebind_input, keyboard_commands, process_swap, CommandBindings,
    InputBindings, RebindState, SwapBindingsRequested,
};
use params::DemoParams;
use replay::{
    advance_replay, start_replay, stop_replay, ReplayAnchors, ReplayPlayer, ReplayRequested,
    ReplayStepped, StopReplayRequested,
};
use simulation_sets::SimulationUpdateSet;

/// Headless core of the demo: command history, bindings and replay.
///
/// Works without a window. Keyboard systems no-op when
/// `ButtonInput<KeyCode>` is absent, so tests drive everything through the
/// request events instead.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoParams>()
            .init_resource::<CommandHistory>()
            .init_resource::<ReplayAnchors>()
            .init_resource::<ReplayPlayer>()
            .init_resource::<CommandBindings>()
            .init_resource::<InputBindings>()
            .init_resource::<RebindState>();

        app.add_event::<ExecuteCommand>()
            .add_event::<UndoRequested>()
            .add_event::<RedoRequested>()
            .add_event::<SwapBindingsRequested>()
            .add_event::<ReplayRequested>()
            .add_event::<StopReplayRequested>()
            .add_event::<ReplayStepped>();

        app.configure_sets(
            Update,
            (
                SimulationUpdateSet::Input,
                SimulationUpdateSet::Commands,
                SimulationUpdateSet::Replay,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (bind_new_movers, keyboard_commands, capture_rebind_input)
                .chain()
                .in_set(SimulationUpdateSet::Input),
        )
        .add_systems(
            Update,
            (
                sync_history_limit,
                process_dispatch,
                process_undo,
                process_redo,
                process_swap,
            )
                .chain()
                .in_set(SimulationUpdateSet::Commands),
        )
        .add_systems(
            Update,
            (stop_replay, advance_replay, start_replay)
                .chain()
                .in_set(SimulationUpdateSet::Replay),
        );
    }
}
