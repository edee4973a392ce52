use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod command_panel;
pub mod keybindings_panel;
pub mod replay_bar;
pub mod theme;

use simulation::simulation_sets::SimulationUpdateSet;

/// egui HUD: command table, history, replay controls and key rebinding.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<keybindings_panel::KeybindingsPanelVisible>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (
                    replay_bar::replay_bar_ui,
                    command_panel::command_panel_ui,
                    keybindings_panel::keybindings_panel_ui,
                )
                    .chain()
                    .before(SimulationUpdateSet::Input),
            );
    }
}
