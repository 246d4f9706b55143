mod app;
mod app_dir;
mod cli;
mod controller;
mod debounce;
mod egui_surface;
mod event;
mod input;
mod preferences;
mod surface;

use clap::Parser;
use tracing::info;

use preferences::AppPreferences;

fn main() -> eframe::Result {
    let args = cli::Args::parse();
    if let Some(text) = args.info_text() {
        println!("{text}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fractally");

    let prefs = AppPreferences::load();
    app::run(prefs)
}
