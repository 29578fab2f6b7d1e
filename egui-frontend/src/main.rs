use eframe::egui;
use log::info;
use mrr_backend::Backend;

mod ui;

use ui::MrrTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("🚀 Starting MRR Tracker egui application");

    let backend = Backend::new_or_default();
    let title = backend.config.site.name.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([820.0, 640.0])
            .with_title(&title)
            .with_resizable(true),
        ..Default::default()
    };

    info!("🪟 Launching egui window '{}'", title);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(MrrTrackerApp::new(cc, backend)))),
    )
}
