use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;
use crate::state::AppState;

/// Rows shown in the side-panel preview table.
const PREVIEW_ROWS: usize = 15;

// ---------------------------------------------------------------------------
// Left side panel – summary statistics and row preview
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Summary");
    ui.separator();

    let (dataset, summary) = match (&state.dataset, &state.summary) {
        (Some(ds), Some(s)) => (ds, s),
        _ => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong(format!("Label: {}", summary.column));
            ui.add_space(4.0);

            egui::Grid::new("summary_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("Rows");
                    ui.label(dataset.len().to_string());
                    ui.end_row();

                    ui.label("Missing");
                    ui.label(summary.n_missing.to_string());
                    ui.end_row();

                    ui.label("Mean");
                    ui.label(format!("{:.4}", summary.mean));
                    ui.end_row();

                    ui.label("Median");
                    ui.label(format!("{:.4}", summary.median));
                    ui.end_row();

                    ui.label("Q1");
                    ui.label(format!("{:.4}", summary.box_stats.q1));
                    ui.end_row();

                    ui.label("Q3");
                    ui.label(format!("{:.4}", summary.box_stats.q3));
                    ui.end_row();

                    ui.label("Min");
                    ui.label(format!("{:.4}", summary.min));
                    ui.end_row();

                    ui.label("Max");
                    ui.label(format!("{:.4}", summary.max));
                    ui.end_row();
                });

            ui.separator();

            let header_text = format!(
                "Preview (first {} rows)",
                PREVIEW_ROWS.min(dataset.len())
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    preview_table(ui, dataset);
                });
        });
}

/// First rows of the dataset as a scrollable table.
fn preview_table(ui: &mut Ui, dataset: &Dataset) {
    let head = dataset.head(PREVIEW_ROWS);

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), dataset.n_columns())
        .header(18.0, |mut header| {
            for name in &dataset.column_names {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(16.0, head.len(), |mut row| {
                let cells = &head[row.index()];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell.to_string());
                    });
                }
            });
        });
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
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} rows × {} columns", ds.len(), ds.n_columns()));
            if let Some(label) = ds.label_name() {
                ui.separator();
                ui.label(format!("label: {label}"));
            }
        }

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
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "parquet", "pq", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::open_dataset(&path) {
            Ok((dataset, summary)) => {
                state.set_dataset(dataset, summary);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
