//! Move commands: one motion plus its fixed inverse, bound to a target entity.

use bevy::prelude::*;

use crate::error::CommandError;
use crate::movable::{Motion, MoveObject, Movable};

/// Query over every transform a command may drive.
pub type MoverQuery<'w, 's> = Query<'w, 's, &'static mut Transform, With<MoveObject>>;

/// A single undoable command.
///
/// Each motion variant carries its own inverse. `TurnLeft` undoes with a
/// right step and `TurnRight` with a left step because that is how those two
/// variants are defined, not because undo negates the motion generically.
///
/// `DoNothing` is the null object: a binding slot always holds something
/// executable, even before a target exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveCommand {
    MoveForward(Entity),
    MoveBack(Entity),
    TurnLeft(Entity),
    TurnRight(Entity),
    #[default]
    DoNothing,
}

impl MoveCommand {
    pub fn target(self) -> Option<Entity> {
        match self {
            MoveCommand::MoveForward(e)
            | MoveCommand::MoveBack(e)
            | MoveCommand::TurnLeft(e)
            | MoveCommand::TurnRight(e) => Some(e),
            MoveCommand::DoNothing => None,
        }
    }

    /// Motion performed by `execute`.
    pub fn motion(self) -> Option<Motion> {
        match self {
            MoveCommand::MoveForward(_) => Some(Motion::Forward),
            MoveCommand::MoveBack(_) => Some(Motion::Back),
            MoveCommand::TurnLeft(_) => Some(Motion::Left),
            MoveCommand::TurnRight(_) => Some(Motion::Right),
            MoveCommand::DoNothing => None,
        }
    }

    /// Motion performed by `undo`.
    pub fn inverse_motion(self) -> Option<Motion> {
        match self {
            MoveCommand::MoveForward(_) => Some(Motion::Back),
            MoveCommand::MoveBack(_) => Some(Motion::Forward),
            MoveCommand::TurnLeft(_) => Some(Motion::Right),
            MoveCommand::TurnRight(_) => Some(Motion::Left),
            MoveCommand::DoNothing => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self.motion() {
            Some(motion) => motion.label(),
            None => "Do Nothing",
        }
    }

    /// Apply the command's motion to an already-resolved movable.
    pub fn execute_on(self, movable: &mut impl Movable, step: f32) {
        if let Some(motion) = self.motion() {
            movable.apply_motion(motion, step);
        }
    }

    /// Apply the command's inverse motion to an already-resolved movable.
    pub fn undo_on(self, movable: &mut impl Movable, step: f32) {
        if let Some(motion) = self.inverse_motion() {
            movable.apply_motion(motion, step);
        }
    }

    /// Resolve the target in `movers` and execute.
    pub fn execute(self, movers: &mut MoverQuery<'_, '_>, step: f32) -> Result<(), CommandError> {
        self.run(movers, self.motion(), step)
    }

    /// Resolve the target in `movers` and undo.
    pub fn undo(self, movers: &mut MoverQuery<'_, '_>, step: f32) -> Result<(), CommandError> {
        self.run(movers, self.inverse_motion(), step)
    }

    fn run(
        self,
        movers: &mut MoverQuery<'_, '_>,
        motion: Option<Motion>,
        step: f32,
    ) -> Result<(), CommandError> {
        let (Some(target), Some(motion)) = (self.target(), motion) else {
            return Ok(());
        };
        let mut transform = movers
            .get_mut(target)
            .map_err(|_| CommandError::MissingTarget(target))?;
        transform.apply_motion(motion, step);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Entity {
        Entity::from_raw(7)
    }

    fn all_motion_commands() -> [MoveCommand; 4] {
        let e = target();
        [
            MoveCommand::MoveForward(e),
            MoveCommand::MoveBack(e),
            MoveCommand::TurnLeft(e),
            MoveCommand::TurnRight(e),
        ]
    }

    #[test]
    fn test_undo_is_exact_inverse() {
        for cmd in all_motion_commands() {
            let mut t = Transform::from_xyz(1.0, 2.0, 3.0);
            cmd.execute_on(&mut t, 1.0);
            assert_ne!(t.translation, Vec3::new(1.0, 2.0, 3.0), "{cmd:?} should move");
            cmd.undo_on(&mut t, 1.0);
            assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0), "{cmd:?} undo should restore");
        }
    }

    #[test]
    fn test_fixed_inverse_pairing() {
        let e = target();
        assert_eq!(MoveCommand::MoveForward(e).inverse_motion(), Some(Motion::Back));
        assert_eq!(MoveCommand::MoveBack(e).inverse_motion(), Some(Motion::Forward));
        assert_eq!(MoveCommand::TurnLeft(e).inverse_motion(), Some(Motion::Right));
        assert_eq!(MoveCommand::TurnRight(e).inverse_motion(), Some(Motion::Left));
    }

    #[test]
    fn test_do_nothing_is_inert() {
        let cmd = MoveCommand::default();
        assert_eq!(cmd, MoveCommand::DoNothing);
        assert_eq!(cmd.target(), None);
        let mut t = Transform::from_xyz(4.0, 0.0, 4.0);
        cmd.execute_on(&mut t, 1.0);
        cmd.undo_on(&mut t, 1.0);
        assert_eq!(t.translation, Vec3::new(4.0, 0.0, 4.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoveCommand::TurnLeft(target()).label(), "Turn Left");
        assert_eq!(MoveCommand::DoNothing.label(), "Do Nothing");
    }

    #[test]
    fn test_commands_hold_their_target() {
        for cmd in all_motion_commands() {
            assert_eq!(cmd.target(), Some(target()));
        }
    }
}
