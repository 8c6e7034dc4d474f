use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone the Arc so we can mutate the selection while iterating.
    let table = state.store.table().clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Content type ----
            ui.strong("Content type");
            for content_type in &table.types {
                let mut checked = state.selection.selected_types.contains(content_type);
                if ui.checkbox(&mut checked, content_type).changed() {
                    if checked {
                        state.selection.selected_types.insert(content_type.clone());
                    } else {
                        state.selection.selected_types.remove(content_type);
                    }
                }
            }
            ui.separator();

            // ---- Year range (inclusive both ends) ----
            ui.strong("Year added");
            let (mut min_year, mut max_year) = state.selection.year_range;
            let from = ui.add(Slider::new(&mut min_year, table.year_min..=table.year_max).text("from"));
            let to = ui.add(Slider::new(&mut max_year, table.year_min..=table.year_max).text("to"));
            if from.changed() || to.changed() {
                // Keep the range well-formed when the handles cross.
                state.selection.year_range = if min_year <= max_year {
                    (min_year, max_year)
                } else {
                    (max_year, min_year)
                };
            }
            ui.separator();

            // ---- Countries (collapsible, with All/None) ----
            let n_selected = state.selection.selected_countries.len();
            let n_total = table.countries.len();
            let header_text = format!("Countries  ({n_selected}/{n_total})");

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.selection.selected_countries =
                                table.countries.iter().cloned().collect();
                        }
                        if ui.small_button("None").clicked() {
                            state.selection.selected_countries.clear();
                        }
                    });

                    for country in &table.countries {
                        let mut checked = state.selection.selected_countries.contains(country);
                        if ui.checkbox(&mut checked, country).changed() {
                            if checked {
                                state.selection.selected_countries.insert(country.clone());
                            } else {
                                state.selection.selected_countries.remove(country);
                            }
                        }
                    }
                });
        });

    // Recompute the filtered subset and aggregates after any widget change.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} titles loaded, {} matching",
            state.store.table().len(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open catalog")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
