use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const COLUMN_TITLES: [&str; 8] = [
    "Title",
    "Type",
    "Country",
    "Date Added",
    "Rating",
    "Duration",
    "Listed In",
    "Director",
];

// ---------------------------------------------------------------------------
// Raw-data table
// ---------------------------------------------------------------------------

/// Virtualized table of the filtered records. An empty filter result renders
/// as an empty table, not an error.
pub fn raw_table(ui: &mut Ui, state: &AppState) {
    let table = state.store.table().clone();
    let indices = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(320.0)
        .column(Column::initial(180.0).at_least(60.0))
        .column(Column::auto())
        .column(Column::initial(130.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::initial(180.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let record = &table.records[indices[row.index()]];
                row.col(|ui| {
                    ui.label(&record.title);
                });
                row.col(|ui| {
                    ui.label(&record.content_type);
                });
                row.col(|ui| {
                    ui.label(record.country.as_deref().unwrap_or("-"));
                });
                row.col(|ui| {
                    ui.label(record.date_added.to_string());
                });
                row.col(|ui| {
                    ui.label(record.rating.as_deref().unwrap_or("-"));
                });
                row.col(|ui| {
                    ui.label(record.duration.as_deref().unwrap_or("-"));
                });
                row.col(|ui| {
                    ui.label(&record.listed_in);
                });
                row.col(|ui| {
                    ui.label(record.director.as_deref().unwrap_or("-"));
                });
            });
        });
}
