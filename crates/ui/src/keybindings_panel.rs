//! Keybindings window: click an action, press a key, and it is rebound.
//!
//! The four command buttons also show the command their slot holds.
//! Conflicting bindings are highlighted. "Reset to Defaults" restores the
//! default physical keys but leaves the W/A/S/D command table alone.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::keybindings::{CommandBindings, InputAction, InputBindings, RebindState};
use simulation::replay::ReplayPlayer;

const CONFLICT: egui::Color32 = egui::Color32::from_rgb(255, 180, 50);
const AWAITING: egui::Color32 = egui::Color32::from_rgb(100, 200, 255);

/// Whether the keybindings window is visible.
#[derive(Resource, Default)]
pub struct KeybindingsPanelVisible(pub bool);

pub fn keybindings_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<KeybindingsPanelVisible>,
    mut bindings: ResMut<InputBindings>,
    mut rebind_state: ResMut<RebindState>,
    table: Res<CommandBindings>,
    player: Res<ReplayPlayer>,
) {
    if !visible.0 {
        return;
    }

    let conflicts = bindings.find_conflicts();
    let conflict_actions: Vec<InputAction> =
        conflicts.iter().flat_map(|(a, b)| [*a, *b]).collect();

    let mut open = true;
    egui::Window::new("Keybindings")
        .open(&mut open)
        .resizable(false)
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;

            if !conflicts.is_empty() {
                ui.colored_label(
                    CONFLICT,
                    format!("Warning: {} conflict(s) detected", conflicts.len()),
                );
                ui.add_space(4.0);
            }

            if rebind_state.awaiting.is_some() {
                let prompt = if player.is_replaying() {
                    "Waiting for the replay to finish..."
                } else {
                    "Press a key to assign..."
                };
                ui.colored_label(AWAITING, prompt);
                ui.add_space(4.0);
            }

            for &action in InputAction::ALL {
                let binding = bindings.get(action);
                let is_awaiting = rebind_state.awaiting == Some(action);
                let has_conflict = conflict_actions.contains(&action);

                ui.horizontal(|ui| {
                    let label_color = if has_conflict {
                        CONFLICT
                    } else {
                        egui::Color32::from_gray(220)
                    };
                    ui.colored_label(label_color, action.label());
                    if let Some(slot) = action.slot() {
                        ui.weak(format!("({})", table.get(slot).label()));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (text, color) = if is_awaiting {
                            ("[ ... ]".to_string(), AWAITING)
                        } else if has_conflict {
                            (binding.display_label(), CONFLICT)
                        } else {
                            (binding.display_label(), egui::Color32::from_gray(180))
                        };
                        let button =
                            egui::Button::new(egui::RichText::new(text).color(color).monospace())
                                .min_size(egui::vec2(100.0, 0.0));

                        if ui.add(button).clicked() {
                            rebind_state.awaiting = if is_awaiting { None } else { Some(action) };
                        }
                    });
                });
            }

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset to Defaults").clicked() {
                    *bindings = InputBindings::default();
                    rebind_state.awaiting = None;
                }
                if rebind_state.awaiting.is_some() && ui.button("Cancel Rebind").clicked() {
                    rebind_state.awaiting = None;
                }
            });
        });

    if !open {
        visible.0 = false;
        rebind_state.awaiting = None;
    }
}
