//! Palette and style for the planner window.

use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xE8, 0xC4, 0xB8);
pub const CARD: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xFF, 0xFF);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x52, 0x7A, 0x78);
pub const HEADING: egui::Color32 = egui::Color32::from_rgb(0x2D, 0x36, 0x48);
pub const LABEL: egui::Color32 = egui::Color32::from_rgb(0x4A, 0x55, 0x68);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(0x71, 0x80, 0x96);
pub const INPUT_FILL: egui::Color32 = egui::Color32::from_rgb(0xF7, 0xFA, 0xFC);
pub const INPUT_STROKE: egui::Color32 = egui::Color32::from_rgb(0xE2, 0xE8, 0xF0);
pub const INVALID: egui::Color32 = egui::Color32::from_rgb(0xC5, 0x30, 0x30);
pub const TOAST_ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(0x6F, 0x35, 0x35);
pub const TOAST_ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(0xAF, 0x60, 0x60);
pub const TOAST_INFO_FILL: egui::Color32 = egui::Color32::from_rgb(0x3C, 0x5A, 0x58);
pub const TOAST_INFO_STROKE: egui::Color32 = ACCENT;

pub const CARD_RADIUS: u8 = 16;

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = CARD;
    visuals.extreme_bg_color = INPUT_FILL;
    visuals.override_text_color = Some(HEADING);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.window_corner_radius = egui::CornerRadius::same(CARD_RADIUS);

    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, INPUT_STROKE);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.6));
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.5, ACCENT);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(10);
    }
    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(16.0, 10.0);
    style.spacing.interact_size = egui::vec2(40.0, 32.0);
    ctx.set_style(style);
}
