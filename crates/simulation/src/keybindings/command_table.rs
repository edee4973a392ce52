//! The command binding table: which command each of the four slots holds.

use bevy::prelude::*;

use super::actions::CommandSlot;
use crate::command::MoveCommand;
use crate::movable::MoveObject;
use crate::replay::{ReplayAnchors, ReplayPlayer};

/// Slot → command table. Every slot always holds a command; before a mover
/// exists that command is `DoNothing`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandBindings {
    slots: [MoveCommand; 4],
}

impl CommandBindings {
    /// The default layout: W forward, A left, S back, D right.
    pub fn bound_to(target: Entity) -> Self {
        let mut bindings = Self::default();
        bindings.set(CommandSlot::W, MoveCommand::MoveForward(target));
        bindings.set(CommandSlot::A, MoveCommand::TurnLeft(target));
        bindings.set(CommandSlot::S, MoveCommand::MoveBack(target));
        bindings.set(CommandSlot::D, MoveCommand::TurnRight(target));
        bindings
    }

    pub fn get(&self, slot: CommandSlot) -> MoveCommand {
        self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: CommandSlot, command: MoveCommand) {
        self.slots[slot.index()] = command;
    }

    /// Exchange the commands held by two slots. Swapping a slot with itself
    /// is a no-op.
    pub fn swap(&mut self, a: CommandSlot, b: CommandSlot) {
        self.slots.swap(a.index(), b.index());
    }

    pub fn iter(&self) -> impl Iterator<Item = (CommandSlot, MoveCommand)> + '_ {
        CommandSlot::ALL.iter().map(|&slot| (slot, self.get(slot)))
    }
}

/// Request to exchange the commands bound to two slots.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapBindingsRequested {
    pub a: CommandSlot,
    pub b: CommandSlot,
}

/// Applies swap requests. Dropped while replaying.
pub fn process_swap(
    mut events: EventReader<SwapBindingsRequested>,
    player: Res<ReplayPlayer>,
    mut bindings: ResMut<CommandBindings>,
) {
    if player.is_replaying() {
        events.clear();
        return;
    }
    for &SwapBindingsRequested { a, b } in events.read() {
        bindings.swap(a, b);
        info!(
            "Swapped {}/{}: {} is now {}, {} is now {}",
            a.label(),
            b.label(),
            a.label(),
            bindings.get(a).label(),
            b.label(),
            bindings.get(b).label()
        );
    }
}

/// Binds the default commands to a newly spawned mover and anchors both
/// replay start positions at its spawn point.
pub fn bind_new_movers(
    movers: Query<(Entity, &Transform), Added<MoveObject>>,
    mut bindings: ResMut<CommandBindings>,
    mut anchors: ResMut<ReplayAnchors>,
) {
    for (entity, transform) in &movers {
        if let Some(previous) = anchors.mover {
            warn!("Replacing mover {previous} with {entity}");
        }
        *bindings = CommandBindings::bound_to(entity);
        anchors.track(entity, transform.translation);
        info!("Bound W/A/S/D commands to {entity}");
    }
}
