//! Notebook - minimal two-pane text editor
//!
//! A main text pane with an attached note, persisted to a single file.

mod app;
mod ui;

use app::NotebookApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Notebook...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Notebook"),
        ..Default::default()
    };

    eframe::run_native(
        "Notebook",
        native_options,
        Box::new(|cc| Ok(Box::new(NotebookApp::new(cc)))),
    )
}
