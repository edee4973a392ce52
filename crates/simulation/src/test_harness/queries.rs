//! Request and query methods for `TestScene`.

use bevy::prelude::*;

use crate::command::MoveCommand;
use crate::history::{CommandHistory, ExecuteCommand, RedoRequested, UndoRequested};
use crate::keybindings::{
    CommandBindings, CommandSlot, InputBindings, RebindState, SwapBindingsRequested,
};
use crate::params::DemoParams;
use crate::replay::{
    ReplayAnchors, ReplayDirection, ReplayPlayer, ReplayRequested, ReplayStep,
    StopReplayRequested,
};

use super::{StepLog, TestScene};

/// Upper bound on frames a replay may take before a test gives up.
const MAX_REPLAY_FRAMES: u32 = 10_000;

impl TestScene {
    // -----------------------------------------------------------------------
    // Requests (each sends one event and runs one frame)
    // -----------------------------------------------------------------------

    pub fn send<E: Event>(&mut self, event: E) -> &mut Self {
        self.app.world_mut().send_event(event);
        self.app.update();
        self
    }

    /// Execute whatever command `slot` is currently bound to.
    pub fn dispatch(&mut self, slot: CommandSlot) -> &mut Self {
        let command = self.bindings().get(slot);
        self.send(ExecuteCommand(command))
    }

    pub fn dispatch_all(&mut self, slots: &[CommandSlot]) -> &mut Self {
        for &slot in slots {
            self.dispatch(slot);
        }
        self
    }

    pub fn execute(&mut self, command: MoveCommand) -> &mut Self {
        self.send(ExecuteCommand(command))
    }

    pub fn undo(&mut self) -> &mut Self {
        self.send(UndoRequested)
    }

    pub fn redo(&mut self) -> &mut Self {
        self.send(RedoRequested)
    }

    pub fn swap(&mut self, a: CommandSlot, b: CommandSlot) -> &mut Self {
        self.send(SwapBindingsRequested { a, b })
    }

    pub fn start_replay(&mut self, direction: ReplayDirection) -> &mut Self {
        self.send(ReplayRequested(direction))
    }

    pub fn stop_replay(&mut self) -> &mut Self {
        self.send(StopReplayRequested)
    }

    /// Tick frames until replay mode clears.
    ///
    /// Panics if the replay is still running after `MAX_REPLAY_FRAMES`.
    pub fn run_replay_to_end(&mut self) -> &mut Self {
        for _ in 0..MAX_REPLAY_FRAMES {
            if !self.is_replaying() {
                return self;
            }
            self.app.update();
        }
        panic!("replay did not finish within {MAX_REPLAY_FRAMES} frames");
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    /// Press `key` for exactly one frame.
    pub fn press(&mut self, key: KeyCode) -> &mut Self {
        self.press_with(&[], key)
    }

    /// Hold `modifiers`, press `key` for one frame, then release everything.
    pub fn press_with(&mut self, modifiers: &[KeyCode], key: KeyCode) -> &mut Self {
        {
            let mut keys = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            for &modifier in modifiers {
                keys.press(modifier);
            }
            keys.press(key);
        }
        self.app.update();
        {
            let mut keys = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release_all();
            keys.clear();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn mover(&self) -> Entity {
        self.mover
    }

    /// Current translation of the mover.
    pub fn position(&self) -> Vec3 {
        self.app
            .world()
            .get::<Transform>(self.mover)
            .map(|t| t.translation)
            .unwrap_or_else(|| panic!("mover {} has no Transform", self.mover))
    }

    /// Teleport the mover without going through a command.
    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        if let Some(mut transform) = self.app.world_mut().get_mut::<Transform>(self.mover) {
            transform.translation = position;
        }
        self
    }

    pub fn history(&self) -> &CommandHistory {
        self.app.world().resource::<CommandHistory>()
    }

    pub fn bindings(&self) -> &CommandBindings {
        self.app.world().resource::<CommandBindings>()
    }

    pub fn input_bindings(&self) -> &InputBindings {
        self.app.world().resource::<InputBindings>()
    }

    pub fn input_bindings_mut(&mut self) -> Mut<'_, InputBindings> {
        self.app.world_mut().resource_mut::<InputBindings>()
    }

    pub fn rebind_state_mut(&mut self) -> Mut<'_, RebindState> {
        self.app.world_mut().resource_mut::<RebindState>()
    }

    pub fn params_mut(&mut self) -> Mut<'_, DemoParams> {
        self.app.world_mut().resource_mut::<DemoParams>()
    }

    pub fn anchors(&self) -> &ReplayAnchors {
        self.app.world().resource::<ReplayAnchors>()
    }

    pub fn player(&self) -> &ReplayPlayer {
        self.app.world().resource::<ReplayPlayer>()
    }

    pub fn is_replaying(&self) -> bool {
        self.player().is_replaying()
    }

    /// Replay steps applied so far, in order.
    pub fn steps(&self) -> Vec<ReplayStep> {
        self.app
            .world()
            .resource::<StepLog>()
            .0
            .iter()
            .map(|stepped| stepped.0)
            .collect()
    }

    pub fn clear_steps(&mut self) -> &mut Self {
        self.app.world_mut().resource_mut::<StepLog>().0.clear();
        self
    }
}
