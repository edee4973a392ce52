use bevy::prelude::*;

pub mod camera;
pub mod replay_tint;
pub mod scene;

use camera::FollowCamera;
use simulation::simulation_sets::SimulationUpdateSet;

/// Scene, camera and visual feedback for the mover.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowCamera>()
            .add_systems(
                Startup,
                (
                    setup_lighting,
                    scene::spawn_ground,
                    scene::spawn_mover,
                    camera::setup_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (replay_tint::tint_mover, camera::follow_mover)
                    .after(SimulationUpdateSet::Replay),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4, // 45 degrees down
            std::f32::consts::FRAC_PI_6,  // slight rotation
            0.0,
        )),
    ));
}
