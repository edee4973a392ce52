//! Ground plane and the movable cube.

use bevy::prelude::*;

use simulation::movable::MoveObject;

use crate::replay_tint::MoverMaterials;

/// Where the cube starts. Half its height above the ground.
pub const MOVER_SPAWN: Vec3 = Vec3::new(0.0, 0.5, 0.0);

const GROUND_SIZE: f32 = 40.0;
const GROUND_COLOR: Color = Color::srgb(0.30, 0.42, 0.28);
const MOVER_COLOR: Color = Color::srgb(0.85, 0.35, 0.20);
const REPLAY_COLOR: Color = Color::srgb(0.25, 0.55, 0.95);

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));
}

/// Spawns the cube the command bindings drive. `SimulationPlugin` picks it
/// up through `Added<MoveObject>` and binds W/A/S/D to it.
pub fn spawn_mover(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let handles = MoverMaterials {
        normal: materials.add(StandardMaterial {
            base_color: MOVER_COLOR,
            ..default()
        }),
        replaying: materials.add(StandardMaterial {
            base_color: REPLAY_COLOR,
            emissive: LinearRgba::rgb(0.05, 0.12, 0.3),
            ..default()
        }),
    };

    commands.spawn((
        MoveObject,
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(handles.normal.clone()),
        Transform::from_translation(MOVER_SPAWN),
    ));
    commands.insert_resource(handles);
}
