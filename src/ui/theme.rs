//! Theme and styling for the Redraft UI.

use egui::{Color32, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary accent color (buttons, links)
    pub primary: Color32,
    /// Darker primary for hover states
    pub primary_hover: Color32,
    /// Success color
    pub success: Color32,
    /// Error color
    pub error: Color32,

    /// Window background behind the card
    pub bg_page: Color32,
    /// Card background
    pub bg_card: Color32,
    /// Text field background
    pub bg_field: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme matching the classic paper-on-gray mail form look
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(25, 118, 210),       // Blue
            primary_hover: Color32::from_rgb(17, 82, 147),  // Darker blue
            success: Color32::from_rgb(22, 163, 74),        // Green
            error: Color32::from_rgb(220, 38, 38),          // Red

            bg_page: Color32::from_rgb(224, 224, 224),  // Gray
            bg_card: Color32::from_rgb(255, 255, 255),  // White
            bg_field: Color32::from_rgb(249, 250, 252), // Off-white

            text_primary: Color32::from_rgb(46, 59, 85),    // Dark slate
            text_secondary: Color32::from_rgb(55, 65, 81),  // Gray
            text_muted: Color32::from_rgb(107, 114, 128),   // Medium gray

            button_rounding: Rounding::same(16.0),
            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_page;
        visuals.window_fill = self.bg_card;
        visuals.extreme_bg_color = self.bg_field;

        visuals.widgets.noninteractive.bg_fill = self.bg_card;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_field;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.primary_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.bg_card);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.bg_card);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.hyperlink_color = self.primary;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_page);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);
        ctx.set_style(style);
    }
}
