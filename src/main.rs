#![windows_subsystem = "windows"]

mod app;
mod ui;

use eframe::egui;

use app::CaptureApp;
use capture_lang::AppSettings;

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut settings = AppSettings::load();

    // First argument overrides the stored language; only supported codes are remembered
    if let Some(code) = std::env::args().nth(1) {
        if settings.apply_language_override(&code) {
            if let Err(e) = settings.save() {
                log::warn!("Failed to save language setting: {}", e);
            }
        }
    }

    if settings.language().is_none() {
        log::warn!("Language {:?} is not supported", settings.language);
    }
    let text = settings.translation_table();
    log::info!("Starting capture-lang {} ({})", env!("BUILD_INFO"), settings.language);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 220.0])
            .with_title("Capture"),
        ..Default::default()
    };

    eframe::run_native(
        "capture-lang",
        options,
        Box::new(|_cc| Ok(Box::new(CaptureApp::new(text)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,capture_lang=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}
