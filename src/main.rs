mod app;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::LabelLensApp;
use eframe::egui;

/// Dataset loaded on startup when the file exists.
const DEFAULT_DATA_PATH: &str = "data/daily-bike-share.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Fixed-path startup load.  A parse failure here is fatal; a missing
    // file just opens the window empty.
    let default_path = Path::new(DEFAULT_DATA_PATH);
    let startup = if default_path.exists() {
        Some(data::open_dataset(default_path)?)
    } else {
        log::warn!("{DEFAULT_DATA_PATH} not found, starting without a dataset");
        None
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Label Lens – Distribution Viewer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(match startup {
                Some((dataset, summary)) => LabelLensApp::with_dataset(dataset, summary),
                None => LabelLensApp::default(),
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))
}
