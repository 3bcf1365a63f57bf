use eframe::egui;

use crate::data::model::Dataset;
use crate::data::summary::LabelSummary;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LabelLensApp {
    pub state: AppState,
}

impl LabelLensApp {
    /// Start with an already-loaded dataset (fixed-path startup load).
    pub fn with_dataset(dataset: Dataset, summary: LabelSummary) -> Self {
        let mut state = AppState::default();
        state.set_dataset(dataset, summary);
        Self { state }
    }
}

impl eframe::App for LabelLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summary statistics ----
        egui::SidePanel::left("summary_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: distribution figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::distribution_charts(ui, &self.state);
        });
    }
}
