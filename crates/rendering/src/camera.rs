//! Camera that trails the mover at a fixed offset.
//!
//! The focus follows the mover with frame-rate independent exponential
//! interpolation:
//!
//!   `focus += (target - focus) * (1 - exp(-speed * dt))`

use bevy::prelude::*;

use simulation::movable::MoveObject;

use crate::scene::MOVER_SPAWN;

/// Follow parameters and the current smoothed focus point.
#[derive(Resource)]
pub struct FollowCamera {
    /// Camera position relative to the focus point.
    pub offset: Vec3,
    /// Smoothing speed (higher = snappier).
    pub speed: f32,
    /// Ground point the camera currently looks at.
    pub focus: Vec3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 8.0, 10.0),
            speed: 4.0,
            focus: MOVER_SPAWN,
        }
    }
}

/// Exponential interpolation factor for a given speed and delta time, in `[0, 1]`.
#[inline]
fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

pub fn setup_camera(mut commands: Commands, follow: Res<FollowCamera>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(follow.focus + follow.offset).looking_at(follow.focus, Vec3::Y),
    ));
}

/// System: ease the camera toward the mover.
pub fn follow_mover(
    time: Res<Time>,
    mut follow: ResMut<FollowCamera>,
    movers: Query<&Transform, (With<MoveObject>, Without<Camera3d>)>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let Some(target) = movers.iter().next().map(|t| t.translation) else {
        return;
    };

    let delta = target - follow.focus;
    if delta.length_squared() < 1e-6 {
        return;
    }
    let factor = exp_lerp_factor(follow.speed, dt);
    follow.focus += delta * factor;

    for mut transform in &mut cameras {
        *transform = Transform::from_translation(follow.focus + follow.offset)
            .looking_at(follow.focus, Vec3::Y);
    }
}
