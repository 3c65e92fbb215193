//! Compose form component
//!
//! The editable half of the card: original email input, tone picker, and the
//! generate/clear controls.

use crate::reply::Tone;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// Input form for the email body and tone selection
pub struct ComposeForm<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> ComposeForm<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Original Email Content")
                .size(13.0)
                .color(self.theme.text_muted),
        );

        let input = egui::TextEdit::multiline(&mut self.state.email_content)
            .hint_text("Paste the email you received here...")
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(12.0, 8.0));
        ui.add(input);

        ui.add_space(self.theme.spacing_sm);

        self.show_tone_picker(ui);

        ui.add_space(self.theme.spacing);

        ui.horizontal(|ui| {
            self.show_generate_button(ui);
            ui.add_space(self.theme.spacing_sm);
            self.show_clear_button(ui);
        });
    }

    fn show_tone_picker(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Tone (Optional)")
                .size(13.0)
                .color(self.theme.text_muted),
        );

        let selected_label = self
            .state
            .tone
            .map(|tone| tone.label())
            .unwrap_or("None")
            .to_string();

        egui::ComboBox::from_id_salt("tone_select")
            .selected_text(selected_label)
            .width(220.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.state.tone, None, "None");
                for tone in Tone::ALL {
                    ui.selectable_value(&mut self.state.tone, Some(tone), tone.label());
                }
            });
    }

    fn show_generate_button(&mut self, ui: &mut egui::Ui) {
        let is_generating = self.state.is_generating;

        let label = if is_generating {
            "Generating..."
        } else {
            "Generate Reply"
        };
        let button = egui::Button::new(
            RichText::new(label).strong().color(egui::Color32::WHITE),
        )
        .min_size(Vec2::new(150.0, 36.0))
        .rounding(self.theme.button_rounding)
        .fill(self.theme.primary);

        let response = ui.add_enabled(!is_generating, button);

        if is_generating {
            ui.add(egui::Spinner::new().size(20.0).color(self.theme.primary));
        }

        if response.clicked() {
            self.state.generate();
        }

        response.on_hover_text("Send the email to the reply generator");
    }

    fn show_clear_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(RichText::new("Clear").color(self.theme.text_secondary))
            .min_size(Vec2::new(90.0, 36.0))
            .rounding(self.theme.button_rounding)
            .fill(self.theme.bg_field)
            .stroke(egui::Stroke::new(1.0, self.theme.text_muted));

        if ui.add(button).clicked() {
            self.state.clear();
        }
    }
}
