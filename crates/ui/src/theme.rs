use bevy_egui::{egui, EguiContexts};

/// Dark translucent overlay with a light-blue accent matching the floor highlight.
pub fn apply_overlay_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(28, 30, 38, 230);
    let inactive = egui::Color32::from_rgb(52, 56, 68);
    let hover = egui::Color32::from_rgb(74, 86, 104);
    let accent = egui::Color32::from_rgb(173, 216, 230);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.active.weak_bg_fill = accent;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    // Selected floor button
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::BLACK);

    let rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = rounding;
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}
