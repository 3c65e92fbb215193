//! Modal notice dialog
//!
//! Blocking alert used for the empty-input validation message and the
//! clipboard copy confirmation.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Align2, RichText, Vec2};

/// Centered modal with a single OK button
pub struct NoticeDialog<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let Some(notice) = self.state.notice.clone() else {
            return;
        };

        let mut dismissed = false;

        egui::Window::new("notice")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_card)
                    .rounding(self.theme.card_rounding)
                    .inner_margin(self.theme.spacing_lg)
                    .stroke(egui::Stroke::new(1.0, self.theme.text_muted)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&notice)
                            .size(15.0)
                            .color(self.theme.text_primary),
                    );
                    ui.add_space(self.theme.spacing);

                    let ok = egui::Button::new(
                        RichText::new("OK").strong().color(egui::Color32::WHITE),
                    )
                    .min_size(Vec2::new(80.0, 30.0))
                    .rounding(self.theme.button_rounding)
                    .fill(self.theme.primary);

                    if ui.add(ok).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.state.dismiss_notice();
        }
    }
}
