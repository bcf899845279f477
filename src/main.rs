use std::fs;
use std::path::Path;
use std::sync::Arc;

use dashboard::{env, DashboardApp, FileStore, Store};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = open_store();
    let owner = env::owner_name();
    let font_path = env::font_path();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dashboard",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            if let Some(path) = font_path {
                install_font(&cc.egui_ctx, &path);
            }
            Ok(Box::new(DashboardApp::new(cc, store, owner)))
        }),
    )
}

/// Storage in the data directory, or in memory if that cannot be prepared.
fn open_store() -> Store {
    let dir = match env::data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to in-memory storage");
            return Store::memory();
        }
    };
    match FileStore::open(&dir) {
        Ok(file_store) => Store::new(file_store),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "falling back to in-memory storage");
            Store::memory()
        }
    }
}

fn install_font(ctx: &egui::Context, path: &Path) {
    let font_data = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to open font file");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "dashboard-font".to_owned(),
        Arc::new(egui::FontData::from_owned(font_data)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "dashboard-font".to_owned());
    }
    ctx.set_fonts(fonts);
    tracing::info!(path = %path.display(), "installed custom font");
}
