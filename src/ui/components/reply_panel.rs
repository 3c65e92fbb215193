//! Reply panel component
//!
//! Read-only view of the generated reply with the copy control.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// Output panel showing the generated reply
pub struct ReplyPanel<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> ReplyPanel<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Generated Reply")
                .size(13.0)
                .color(self.theme.text_muted),
        );

        // Read-only: bind the text edit to a &str so typing is rejected
        let mut reply: &str = &self.state.reply_text;
        let output = egui::TextEdit::multiline(&mut reply)
            .hint_text("AI-generated email reply will appear here...")
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(12.0, 8.0));
        ui.add(output);

        ui.add_space(self.theme.spacing_sm);

        let can_copy = self.state.can_copy();
        let button = egui::Button::new(
            RichText::new("Copy to Clipboard")
                .strong()
                .color(self.theme.primary),
        )
        .min_size(Vec2::new(150.0, 32.0))
        .rounding(self.theme.button_rounding)
        .fill(self.theme.bg_card)
        .stroke(egui::Stroke::new(1.0, self.theme.primary));

        let response = ui.add_enabled(can_copy, button);
        if response.clicked() {
            self.state.copy_reply(ui.ctx());
        }

        if let Some(elapsed_ms) = self.state.last_elapsed_ms {
            ui.add_space(self.theme.spacing_sm);
            ui.label(
                RichText::new(format!("Generated in {} ms", elapsed_ms))
                    .size(11.0)
                    .family(egui::FontFamily::Monospace)
                    .color(self.theme.text_muted),
            );
        }
    }
}
