//! Assertion helpers for `TestScene` integration tests.

use bevy::prelude::*;

use crate::command::MoveCommand;

use super::TestScene;

const POSITION_EPSILON: f32 = 1e-4;

impl TestScene {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the mover is at `expected` (within a small epsilon).
    pub fn assert_position(&self, expected: Vec3) {
        let actual = self.position();
        assert!(
            actual.abs_diff_eq(expected, POSITION_EPSILON),
            "Expected mover at {expected}, found {actual}"
        );
    }

    pub fn assert_applied(&self, expected: &[MoveCommand]) {
        assert_eq!(
            self.history().applied(),
            expected,
            "Applied log mismatch"
        );
    }

    pub fn assert_redo_log(&self, expected: &[MoveCommand]) {
        assert_eq!(self.history().redo_log(), expected, "Redo log mismatch");
    }

    pub fn assert_not_replaying(&self) {
        assert!(
            !self.is_replaying(),
            "Expected replay mode to be off, but {:?} is running",
            self.player().direction()
        );
    }
}
