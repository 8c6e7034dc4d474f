use eframe::egui::{CollapsingHeader, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::color::{generate_palette, ColorMap};
use crate::data::aggregate::Aggregates;
use crate::data::model::MONTH_NAMES;
use crate::state::AppState;
use crate::ui::table;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Central panel – KPIs, charts, raw data
// ---------------------------------------------------------------------------

/// Render the dashboard body: KPI row, the six charts, and the raw-data
/// table, all derived from the cached aggregates.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let table = state.store.table().clone();
    let aggregates = &state.aggregates;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            kpi_row(ui, aggregates);
            ui.separator();

            ui.heading("Content Type Distribution");
            type_bar_chart(ui, &table.types, &aggregates.by_type);

            ui.heading("Top Ratings");
            category_bar_chart(ui, "top_ratings", &aggregates.top_ratings);

            ui.heading("Monthly Additions Trend");
            monthly_line_chart(ui, &aggregates.monthly);

            ui.heading("Yearly Additions Trend");
            yearly_line_chart(ui, &aggregates.yearly);

            ui.heading("Top Directors");
            category_bar_chart(ui, "top_directors", &aggregates.top_directors);

            ui.heading("Top Genres");
            category_bar_chart(ui, "top_genres", &aggregates.top_genres);

            ui.separator();
            CollapsingHeader::new("Raw data")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    table::raw_table(ui, state);
                });
        });
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, aggregates: &Aggregates) {
    ui.columns(3, |columns| {
        kpi(&mut columns[0], "Total Titles", aggregates.total);
        kpi(&mut columns[1], "Movies", aggregates.movies);
        kpi(&mut columns[2], "TV Shows", aggregates.tv_shows);
    });
}

fn kpi(ui: &mut Ui, caption: &str, value: usize) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(caption);
        ui.heading(value.to_string());
    });
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Type-distribution bars, coloured from the full type list so each type
/// keeps its colour as filters change.
fn type_bar_chart(ui: &mut Ui, all_types: &[String], entries: &[(String, usize)]) {
    let colors = ColorMap::new(all_types);
    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .name(label)
                .fill(colors.color_for(label))
        })
        .collect();
    show_bar_plot(ui, "type_distribution", entries, bars);
}

/// Generic categorical bar chart, one hue per rank position.
fn category_bar_chart(ui: &mut Ui, id: &str, entries: &[(String, usize)]) {
    let palette = generate_palette(entries.len());
    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .name(label)
                .fill(palette[i])
        })
        .collect();
    show_bar_plot(ui, id, entries, bars);
}

fn show_bar_plot(ui: &mut Ui, id: &str, entries: &[(String, usize)], bars: Vec<Bar>) {
    let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    let chart = BarChart::new(bars).element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
        format!("{}: {}", bar.name, bar.value)
    }));

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if index < 0.0 || (mark.value - index).abs() > 1e-6 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Line charts
// ---------------------------------------------------------------------------

fn monthly_line_chart(ui: &mut Ui, monthly: &[(String, usize)]) {
    let points: PlotPoints = monthly
        .iter()
        .enumerate()
        .map(|(i, (_, count))| [i as f64, *count as f64])
        .collect();

    Plot::new("monthly_trend")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark, _range| {
            let index = mark.value.round();
            if index < 0.0 || (mark.value - index).abs() > 1e-6 {
                return String::new();
            }
            MONTH_NAMES
                .get(index as usize)
                .map(|name| name[..3].to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("additions").width(2.0));
        });
}

fn yearly_line_chart(ui: &mut Ui, yearly: &[(i32, usize)]) {
    let points: PlotPoints = yearly
        .iter()
        .map(|(year, count)| [*year as f64, *count as f64])
        .collect();

    Plot::new("yearly_trend")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("additions").width(2.0));
        });
}
