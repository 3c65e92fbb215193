//! Main application struct and eframe integration
//!
//! This module contains the main RedraftApp that implements eframe::App.

use crate::generation::{GenerationConfig, GenerationPipeline};
use crate::ui::components::{ComposeForm, NoticeDialog, ReplyPanel};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use tracing::error;

/// Main Redraft application
pub struct RedraftApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl RedraftApp {
    /// Create a new Redraft application and start its generation worker
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(cc, GenerationConfig::default())
    }

    /// Create the application against a specific endpoint configuration
    pub fn with_config(cc: &eframe::CreationContext<'_>, config: GenerationConfig) -> Self {
        let theme = Theme::light();
        theme.apply(&cc.egui_ctx);

        let mut state = AppState::new();

        let pipeline = GenerationPipeline::new(config);
        let command_tx = pipeline.command_sender();
        let event_rx = pipeline.event_receiver();
        if let Err(e) = pipeline.start_worker() {
            error!("Failed to start generation worker: {}", e);
        } else {
            state.connect_pipeline(command_tx, event_rx);
        }

        Self { state, theme }
    }

    /// Show the top header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_card)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("✉ Redraft")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new("Email Reply Assistant")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
    }

    /// Show the main form card
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_page)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Frame::none()
                        .fill(self.theme.bg_card)
                        .rounding(self.theme.card_rounding)
                        .inner_margin(self.theme.spacing_lg)
                        .show(ui, |ui| {
                            ComposeForm::new(&mut self.state, &self.theme).show(ui);
                            ui.add_space(self.theme.spacing);
                            ui.separator();
                            ui.add_space(self.theme.spacing);
                            ReplyPanel::new(&mut self.state, &self.theme).show(ui);
                        });
                });
            });
    }
}

impl eframe::App for RedraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll worker events before rendering so a settled request is
        // visible in the same frame
        self.state.poll_events();

        self.show_header(ctx);
        self.show_content(ctx);

        NoticeDialog::new(&mut self.state, &self.theme).show(ctx);

        // Keep repainting while a request is outstanding so the spinner
        // animates and the completion event is picked up promptly
        if self.state.is_generating {
            ctx.request_repaint();
        }
    }
}
