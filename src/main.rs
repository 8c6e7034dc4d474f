mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::ReelboardApp;
use data::store::CatalogStore;
use eframe::egui;

/// The catalog is read from this path in the working directory. Run the
/// `generate_sample` bin to produce one.
const CATALOG_PATH: &str = "catalog.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The dashboard cannot render without a non-empty normalized table, so a
    // load failure is fatal before any UI state is built.
    let store = match CatalogStore::open(Path::new(CATALOG_PATH)) {
        Ok(store) => store,
        Err(e) => {
            log::error!("cannot start: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    log::info!("loaded {} titles from {CATALOG_PATH}", store.table().len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reelboard – Catalog Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(ReelboardApp::new(store)))),
    )
}
