use eframe::{CreationContext, NativeOptions, egui};

use quickgen::app::QuickGenApp;
use quickgen::logging;
use quickgen::settings::AppSettings;

fn main() -> eframe::Result<()> {
    logging::init();

    let settings = AppSettings::load();
    tracing::info!(length = settings.generator.length, "Starting QuickGen");

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "QuickGen",
        native_options,
        Box::new(|_cc: &CreationContext| Ok(Box::new(QuickGenApp::from_settings(settings)))),
    )
}
