use std::path::Path;

use crate::data::aggregate::Aggregates;
use crate::data::filter::{filter_indices, FilterSelection};
use crate::data::store::CatalogStore;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The store is read-only; a
/// selection change replaces `visible_indices` and `aggregates` wholesale.
pub struct AppState {
    pub store: CatalogStore,

    /// The side panel's current filter selection.
    pub selection: FilterSelection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Named counts for the charts, derived from `visible_indices` (cached).
    pub aggregates: Aggregates,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        let table = store.table().clone();
        let selection = FilterSelection::select_all(&table);
        let visible_indices = filter_indices(&table, &selection);
        let aggregates = Aggregates::compute(&table, &visible_indices);
        AppState {
            store,
            selection,
            visible_indices,
            aggregates,
            status_message: None,
        }
    }

    /// Recompute the filtered subset and every aggregate from the current
    /// selection. Runs on every widget change; a full recompute is cheap at
    /// this data volume.
    pub fn refilter(&mut self) {
        let table = self.store.table().clone();
        self.visible_indices = filter_indices(&table, &self.selection);
        self.aggregates = Aggregates::compute(&table, &self.visible_indices);
    }

    /// Swap in a freshly opened catalog file. On failure the current table
    /// stays in place and the error is surfaced in the top bar.
    pub fn open_path(&mut self, path: &Path) {
        match CatalogStore::open(path) {
            Ok(store) => {
                log::info!("loaded {} titles from {}", store.table().len(), path.display());
                self.store = store;
                self.status_message = None;
                self.reset_selection();
            }
            Err(e) => {
                log::error!("failed to load catalog: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-check the current file and rebuild everything if its content
    /// changed.
    pub fn reload(&mut self) {
        match self.store.refresh() {
            Ok(true) => {
                log::info!(
                    "catalog content changed, reloaded {} titles",
                    self.store.table().len()
                );
                self.status_message = None;
                self.reset_selection();
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("failed to reload catalog: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn reset_selection(&mut self) {
        self.selection = FilterSelection::select_all(self.store.table());
        self.refilter();
    }
}
