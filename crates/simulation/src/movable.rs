//! The movable game object and its four atomic motions.
//!
//! Motions step in fixed increments instead of `speed * delta` so that undo
//! lands exactly where the object was before; a variable frame delta would
//! make the inverse step a different length.

use bevy::prelude::*;

/// Marker for the entity driven by the command bindings.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MoveObject;

/// One atomic motion, expressed in the object's local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Forward,
    Back,
    Left,
    Right,
}

impl Motion {
    pub fn label(self) -> &'static str {
        match self {
            Motion::Forward => "Move Forward",
            Motion::Back => "Move Back",
            Motion::Left => "Turn Left",
            Motion::Right => "Turn Right",
        }
    }
}

/// Anything that can perform the four atomic motions.
pub trait Movable {
    fn move_forward(&mut self, step: f32);
    fn move_back(&mut self, step: f32);
    fn turn_left(&mut self, step: f32);
    fn turn_right(&mut self, step: f32);

    fn apply_motion(&mut self, motion: Motion, step: f32) {
        match motion {
            Motion::Forward => self.move_forward(step),
            Motion::Back => self.move_back(step),
            Motion::Left => self.turn_left(step),
            Motion::Right => self.turn_right(step),
        }
    }
}

/// Translation along the transform's local axes, like an engine-side
/// `translate(direction * step)` in self space.
impl Movable for Transform {
    fn move_forward(&mut self, step: f32) {
        let dir = self.forward();
        self.translation += *dir * step;
    }

    fn move_back(&mut self, step: f32) {
        let dir = self.back();
        self.translation += *dir * step;
    }

    fn turn_left(&mut self, step: f32) {
        let dir = self.left();
        self.translation += *dir * step;
    }

    fn turn_right(&mut self, step: f32) {
        let dir = self.right();
        self.translation += *dir * step;
    }
}
