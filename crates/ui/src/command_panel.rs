//! Side panel: W/A/S/D command table, history logs and request buttons.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::command::MoveCommand;
use simulation::history::{CommandHistory, ExecuteCommand, RedoRequested, UndoRequested};
use simulation::keybindings::{
    CommandBindings, CommandSlot, InputAction, InputBindings, SwapBindingsRequested,
};
use simulation::replay::{ReplayDirection, ReplayPlayer, ReplayRequested};

use crate::keybindings_panel::KeybindingsPanelVisible;

/// How many entries of each log the panel lists.
const LOG_PREVIEW_LEN: usize = 12;

const MUTED: egui::Color32 = egui::Color32::from_gray(150);

/// Writers for every request the panel's buttons can send.
#[derive(SystemParam)]
pub struct PanelRequests<'w> {
    pub execute: EventWriter<'w, ExecuteCommand>,
    pub undo: EventWriter<'w, UndoRequested>,
    pub redo: EventWriter<'w, RedoRequested>,
    pub swap: EventWriter<'w, SwapBindingsRequested>,
    pub replay: EventWriter<'w, ReplayRequested>,
}

pub fn command_panel_ui(
    mut contexts: EguiContexts,
    table: Res<CommandBindings>,
    bindings: Res<InputBindings>,
    history: Res<CommandHistory>,
    player: Res<ReplayPlayer>,
    mut keybindings_visible: ResMut<KeybindingsPanelVisible>,
    mut requests: PanelRequests,
) {
    let live = !player.is_replaying();
    let ctx = contexts.ctx_mut();

    egui::SidePanel::left("command_panel")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Rebind Keys");
            ui.separator();

            // -- Command table --
            egui::Grid::new("command_table")
                .num_columns(3)
                .spacing([12.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for (slot, command) in table.iter() {
                        let key = bindings.get(slot.action()).display_label();
                        let button = egui::Button::new(egui::RichText::new(slot.label()).monospace());
                        if ui.add_enabled(live, button).clicked() {
                            requests.execute.send(ExecuteCommand(command));
                        }
                        ui.label(egui::RichText::new(key).color(MUTED).monospace());
                        ui.label(command.label());
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                let undo = format!("Undo ({})", bindings.get(InputAction::Undo).display_label());
                if ui.add_enabled(live && history.can_undo(), egui::Button::new(undo)).clicked() {
                    requests.undo.send(UndoRequested);
                }
                let redo = format!("Redo ({})", bindings.get(InputAction::Redo).display_label());
                if ui.add_enabled(live && history.can_redo(), egui::Button::new(redo)).clicked() {
                    requests.redo.send(RedoRequested);
                }
                let (a, b) = bindings.swap_pair;
                let swap = format!("Swap {} / {}", a.label(), b.label());
                if ui.add_enabled(live, egui::Button::new(swap)).clicked() {
                    requests.swap.send(SwapBindingsRequested { a, b });
                }
            });
            ui.horizontal_wrapped(|ui| {
                if ui.add_enabled(live, egui::Button::new("Replay")).clicked() {
                    requests.replay.send(ReplayRequested(ReplayDirection::Forward));
                }
                if ui.add_enabled(live, egui::Button::new("Reversed Play")).clicked() {
                    requests.replay.send(ReplayRequested(ReplayDirection::Reversed));
                }
            });

            // -- History --
            ui.add_space(8.0);
            ui.separator();
            ui.label(format!(
                "Applied: {} / {}   Redo: {}",
                history.applied().len(),
                history.max_len(),
                history.redo_log().len()
            ));
            ui.columns(2, |columns| {
                log_preview(&mut columns[0], "Applied", &table, history.applied().iter().rev());
                log_preview(&mut columns[1], "Redo", &table, history.redo_log().iter().rev());
            });

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Keybindings...").clicked() {
                keybindings_visible.0 = !keybindings_visible.0;
            }
            let conflicts = bindings.find_conflicts().len();
            if conflicts > 0 {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 180, 50),
                    format!("{conflicts} key conflict(s)"),
                );
            }
            ui.small(format!(
                "{} stops a running replay.",
                bindings.get(InputAction::StopReplay).display_label()
            ));
        });
}

/// Most recent entries first, one per line, tagged with the slot that
/// currently holds the same command.
fn log_preview<'a>(
    ui: &mut egui::Ui,
    title: &str,
    table: &CommandBindings,
    commands: impl ExactSizeIterator<Item = &'a MoveCommand>,
) {
    ui.strong(title);
    let total = commands.len();
    if total == 0 {
        ui.colored_label(MUTED, "(empty)");
        return;
    }
    for command in commands.take(LOG_PREVIEW_LEN) {
        let text = match slot_for(table, *command) {
            Some(slot) => format!("{} [{}]", command.label(), slot.label()),
            None => command.label().to_string(),
        };
        ui.small(text);
    }
    if total > LOG_PREVIEW_LEN {
        ui.colored_label(MUTED, format!("... {} more", total - LOG_PREVIEW_LEN));
    }
}

/// The slot currently bound to `command`, if any.
pub fn slot_for(table: &CommandBindings, command: MoveCommand) -> Option<CommandSlot> {
    table
        .iter()
        .find(|&(_, bound)| bound == command)
        .map(|(slot, _)| slot)
}
