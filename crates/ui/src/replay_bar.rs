//! Top bar shown while a replay is running.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::params::DemoParams;
use simulation::replay::{ReplayDirection, ReplayPlayer, StopReplayRequested};

/// Accent used for replay state, matching the cube tint.
pub(crate) const REPLAY_ACCENT: egui::Color32 = egui::Color32::from_rgb(64, 140, 242);

pub fn replay_bar_ui(
    mut contexts: EguiContexts,
    player: Res<ReplayPlayer>,
    params: Res<DemoParams>,
    mut stop: EventWriter<StopReplayRequested>,
) {
    let (Some(direction), Some((done, total))) = (player.direction(), player.progress()) else {
        return;
    };

    let ctx = contexts.ctx_mut();
    egui::TopBottomPanel::top("replay_bar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let title = match direction {
                ReplayDirection::Forward => "Replay",
                ReplayDirection::Reversed => "Reversed Play",
            };
            ui.colored_label(REPLAY_ACCENT, egui::RichText::new(title).strong());
            ui.separator();

            let progress = if total == 0 {
                1.0
            } else {
                done as f32 / total as f32
            };
            ui.add(
                egui::ProgressBar::new(progress)
                    .desired_width(180.0)
                    .text(format!("{done} / {total}")),
            );

            if direction == ReplayDirection::Forward && params.replay_speed != 1.0 {
                ui.label(format!("@ {:.1}x", params.replay_speed));
            }

            if ui.button("Stop").clicked() {
                stop.send(StopReplayRequested);
            }
        });
        ui.small("Input is ignored until the replay finishes.");
    });
}
