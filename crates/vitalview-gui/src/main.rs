mod app;
mod convert;
mod messages;
mod panels;
mod progress;
mod states;
mod worker;

use std::path::PathBuf;

use crate::states::ConfigState;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args_os().skip(1);
    let config_path = match args.next() {
        Some(flag) if flag == "--config" => args.next(),
        other => other,
    };
    let config = match config_path.map(PathBuf::from) {
        Some(path) => ConfigState::load(&path).unwrap_or_else(|e| {
            tracing::error!("{e:#}");
            ConfigState::default()
        }),
        None => ConfigState::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("VitalView"),
        ..Default::default()
    };

    eframe::run_native(
        "VitalView",
        options,
        Box::new(|cc| Ok(Box::new(app::VitalViewApp::new(&cc.egui_ctx, config)))),
    )
}
