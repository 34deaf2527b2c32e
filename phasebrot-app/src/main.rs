mod app;
mod config;
mod hud;
mod input;
mod snapshot_worker;

use eframe::egui;
use tracing::info;

use app::PhasebrotApp;
use config::AppConfig;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Phasebrot");

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Phasebrot")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Phasebrot",
        options,
        Box::new(move |_cc| Ok(Box::new(PhasebrotApp::new(config)?))),
    )
}
