mod analysis;
mod app;
mod color;
mod data;
mod error;
mod state;
mod ui;

use app::MerchAnalyzerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Merch Analyzer",
        options,
        Box::new(|cc| {
            // Image loaders fetch and decode the listing thumbnails.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(MerchAnalyzerApp::default()))
        }),
    )
}
