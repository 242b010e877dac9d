#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use graph_viewer::ui::{APP_NAME, GraphViewer};
use graph_viewer::util::settings::{Settings, default_path};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`). windows: $env:RUST_LOG="info"; cargo run

    let settings_path = default_path(APP_NAME);
    let settings = Settings::load(&settings_path).unwrap_or_else(|e| {
        log::error!("Failed to load settings from {settings_path:?}: {e}");
        Settings::with_defaults(&settings_path)
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(GraphViewer::new(cc, settings)))),
    )
}
