//! Dark purple theme lifted from the portfolio's visual identity.

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct PortfolioPalette {
    pub app_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_border: egui::Color32,
    pub nav_background: egui::Color32,
    pub accent: egui::Color32,
    pub accent_strong: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_muted: egui::Color32,
    pub success: egui::Color32,
    pub failure: egui::Color32,
}

pub fn palette() -> PortfolioPalette {
    PortfolioPalette {
        app_background: egui::Color32::from_rgb(19, 17, 28),
        card_background: egui::Color32::from_rgb(26, 22, 37),
        card_border: egui::Color32::from_rgb(45, 43, 61),
        nav_background: egui::Color32::from_rgb(15, 13, 22),
        accent: egui::Color32::from_rgb(157, 140, 255),
        accent_strong: egui::Color32::from_rgb(123, 110, 219),
        text_primary: egui::Color32::from_rgb(226, 225, 230),
        text_muted: egui::Color32::from_rgb(158, 156, 169),
        success: egui::Color32::from_rgb(74, 222, 128),
        failure: egui::Color32::from_rgb(248, 113, 113),
    }
}

pub fn apply(ctx: &egui::Context) {
    let palette = palette();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = palette.app_background;
    style.visuals.window_fill = palette.card_background;
    style.visuals.override_text_color = Some(palette.text_primary);
    style.visuals.selection.bg_fill = palette.accent_strong;
    style.visuals.widgets.inactive.bg_fill = palette.card_background;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_border);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.accent);
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, palette.accent_strong);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}
