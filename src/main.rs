#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use csvflow::backend::loader;
use csvflow::backend::settings::Settings;
use csvflow::gui::app::GuiApp;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CSV file to open
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// File name to offer when saving (".csv" is appended if missing)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    csvflow::logging::init();
    let args = Args::parse();

    let mut settings = Settings::load();

    let initial = match args.file {
        Some(path) => {
            let file = loader::load_file(&path)?;
            settings.add_recent_file(&path.to_string_lossy());
            settings.save();
            Some(file)
        }
        None => None,
    };

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CSV-Flow",
        native_options,
        Box::new(move |cc| Ok(Box::new(GuiApp::new(cc, settings, initial, args.name)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
