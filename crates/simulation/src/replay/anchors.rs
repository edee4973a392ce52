//! Positions a replay restores before it starts.

use bevy::prelude::*;

use crate::command::MoveCommand;

/// Start positions for the two replay directions.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ReplayAnchors {
    /// The entity the anchors track. Set when the mover first appears.
    pub mover: Option<Entity>,
    /// Where the mover was when the session began (forward replay start).
    pub start: Vec3,
    /// Where the mover was right after the latest dispatch (reversed play start).
    pub reversed_start: Vec3,
}

impl ReplayAnchors {
    /// Anchor both positions at a freshly spawned mover.
    pub fn track(&mut self, mover: Entity, position: Vec3) {
        self.mover = Some(mover);
        self.start = position;
        self.reversed_start = position;
    }

    /// Advance the start anchor by a command evicted from the applied log.
    pub fn fold_evicted(&mut self, command: MoveCommand, rotation: Quat, step: f32) {
        let mut anchor = Transform::from_translation(self.start).with_rotation(rotation);
        command.execute_on(&mut anchor, step);
        self.start = anchor.translation;
    }
}
