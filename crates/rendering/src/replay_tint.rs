//! Recolours the cube while replay mode is active.

use bevy::prelude::*;

use simulation::movable::MoveObject;
use simulation::replay::ReplayPlayer;

/// Material handles for the two cube states.
#[derive(Resource)]
pub struct MoverMaterials {
    pub normal: Handle<StandardMaterial>,
    pub replaying: Handle<StandardMaterial>,
}

impl MoverMaterials {
    pub fn for_state(&self, replaying: bool) -> &Handle<StandardMaterial> {
        if replaying {
            &self.replaying
        } else {
            &self.normal
        }
    }
}

/// System: swap the cube's material when replay mode toggles.
pub fn tint_mover(
    player: Res<ReplayPlayer>,
    materials: Option<Res<MoverMaterials>>,
    mut movers: Query<&mut MeshMaterial3d<StandardMaterial>, With<MoveObject>>,
) {
    let Some(materials) = materials else {
        return;
    };
    if !player.is_changed() && !materials.is_added() {
        return;
    }
    let wanted = materials.for_state(player.is_replaying());
    for mut material in &mut movers {
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}
