//! Redraft - AI email reply assistant
//!
//! Main entry point for the desktop application.

use eframe::egui;
use redraft::ui::RedraftApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redraft=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Redraft email assistant");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 720.0])
            .with_min_inner_size([480.0, 420.0])
            .with_title("Redraft"),
        ..Default::default()
    };

    eframe::run_native(
        "Redraft",
        options,
        Box::new(|cc| Ok(Box::new(RedraftApp::new(cc)))),
    )
}
