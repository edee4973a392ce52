use bevy_egui::{egui, EguiContexts};

/// Dark panel theme with rounded widgets and a blue accent matching the
/// replay tint.
pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(30, 33, 42);
    let inactive = egui::Color32::from_rgb(48, 52, 64);
    let hover = egui::Color32::from_rgb(66, 76, 96);
    let accent = egui::Color32::from_rgb(64, 140, 242);

    for (widget, fill) in [
        (&mut style.visuals.widgets.inactive, inactive),
        (&mut style.visuals.widgets.hovered, hover),
        (&mut style.visuals.widgets.active, accent),
    ] {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.corner_radius = egui::CornerRadius::same(5);
    }
    style.visuals.widgets.noninteractive.bg_fill = panel;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}
