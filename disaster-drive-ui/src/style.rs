use egui::{Button, Color32, FontFamily, FontId, RichText, TextStyle};

pub const PRIMARY_BLUE: Color32 = Color32::from_rgb(52, 152, 219);
pub const LIGHT_BLUE: Color32 = Color32::from_rgb(236, 245, 255);
pub const DARK_GREY: Color32 = Color32::from_rgb(44, 62, 80);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(46, 204, 113);
pub const WARNING_ORANGE: Color32 = Color32::from_rgb(230, 126, 34);
pub const SUB_TEXT: Color32 = Color32::from_rgb(127, 140, 141);

pub const TITLE_SIZE: f32 = 24.0;
pub const HEADER_SIZE: f32 = 18.0;

/// Light theme with the window's blue panel fill.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = LIGHT_BLUE;
    visuals.extreme_bg_color = Color32::WHITE;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    });
}

pub fn filled_button(label: &str, fill: Color32) -> Button<'static> {
    Button::new(RichText::new(label.to_owned()).color(Color32::WHITE))
        .fill(fill)
        .min_size(egui::vec2(150.0, 35.0))
}

pub fn header(text: &str) -> RichText {
    RichText::new(text.to_owned())
        .size(HEADER_SIZE)
        .strong()
        .color(DARK_GREY)
}
